//! Cellview Engine - particle motion and AR placement for the cell viewer, in WASM
//!
//! Architecture:
//! - core/        - Vectors, transforms, PRNG helpers, console logging
//! - domain/      - Species, step models and the JSON scene configuration
//! - systems/     - Population, motion integrator, placement state machine
//! - simulation/  - Per-frame orchestration and the JS facade

pub mod core;
pub mod domain;
pub mod simulation;
pub mod systems;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::console::install(log::LevelFilter::Info);
    log::info!("cellview engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{ConfigError, SceneConfig, Species};
pub use simulation::{PerfStats, PositionsLayout, Simulation, SimulationCore};

// Export species ids for JS
#[wasm_bindgen]
pub fn species_protein() -> u8 { Species::Protein.id() }
#[wasm_bindgen]
pub fn species_water() -> u8 { Species::Water.id() }
#[wasm_bindgen]
pub fn species_viral_particle() -> u8 { Species::ViralParticle.id() }
#[wasm_bindgen]
pub fn species_bacterium() -> u8 { Species::Bacterium.id() }
#[wasm_bindgen]
pub fn species_extracellular_molecule() -> u8 { Species::ExtracellularMolecule.id() }

/// Species key (as used in scene JSON) for an id, or undefined
#[wasm_bindgen]
pub fn species_key(id: u8) -> Option<String> {
    Species::from_id(id).map(|s| s.key().to_string())
}
