//! Simulation - per-frame orchestration of the cell scene
//!
//! `SimulationCore` owns the population, the PRNG stream and the placement
//! state, and delegates the work:
//! - Motion is in systems/motion.rs
//! - AR placement is in systems/placement.rs
//! - Host input (hit poses, select, drag, session edges) in commands/
//! - Position export for the renderer in render/

use crate::core::random::SimRng;
use crate::core::Pose;
use crate::domain::{Result, SceneConfig, Species};
use crate::systems::{BodyId, PlacementState, Population};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

pub use facade::{PositionsLayout, Simulation};
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation state behind the WASM facade.
pub struct SimulationCore {
    config: SceneConfig,
    population: Population,
    loaded: bool,
    rng: SimRng,
    placement: PlacementState,

    // Host input consumed by the next step
    pending_hit: Option<Pose>,

    // State
    frame: u64,
    elapsed_seconds: f64,

    // Render transfer buffer (x, y, z per body)
    positions: Vec<f32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create an empty simulation; bodies arrive with the first load.
    pub fn new(seed: u64) -> Self {
        init::create_core(seed)
    }

    /// Create and load `config` in one go.
    pub fn with_config(seed: u64, config: SceneConfig) -> Result<Self> {
        let mut core = Self::new(seed);
        core.load_config(config)?;
        Ok(core)
    }

    /// Populate from a JSON scene. Only the first load succeeds.
    pub fn load_config_json(&mut self, json: &str) -> Result<()> {
        let config = SceneConfig::from_json(json)?;
        self.load_config(config)
    }

    pub fn load_config(&mut self, config: SceneConfig) -> Result<()> {
        init::load_population(self, config)
    }

    /// Populate with the stock cell viewer scene.
    pub fn load_default_population(&mut self) -> Result<()> {
        self.load_config(SceneConfig::cell_viewer())
    }

    pub fn is_loaded(&self) -> bool { self.loaded }

    pub fn config(&self) -> &SceneConfig { &self.config }

    pub fn manifest_json(&self) -> String { self.config.manifest_json() }

    pub fn population(&self) -> &Population { &self.population }

    pub fn body_count(&self) -> usize { self.population.len() }

    pub fn body_species(&self, id: BodyId) -> Option<Species> {
        self.population.body(id).map(|b| b.species)
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn elapsed_seconds(&self) -> f64 { self.elapsed_seconds }

    pub fn placement(&self) -> &PlacementState { &self.placement }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Re-seed the PRNG stream. Bodies keep their positions.
    pub fn reseed(&mut self, seed: u64) {
        settings::reseed(self, seed);
    }

    // === HOST INPUT ===

    pub fn set_immersive_active(&mut self, active: bool) {
        commands::set_immersive_active(self, active);
    }

    /// Hit pose for the next step; replaces any earlier unconsumed pose.
    pub fn submit_hit_pose(&mut self, pose: Pose) {
        commands::submit_hit_pose(self, pose);
    }

    /// Raw 16-float matrix variant of `submit_hit_pose`. A malformed matrix
    /// counts as "no candidate" and returns false.
    pub fn submit_hit_matrix(&mut self, matrix: &[f32]) -> bool {
        commands::submit_hit_matrix(self, matrix)
    }

    pub fn clear_hit_pose(&mut self) {
        commands::clear_hit_pose(self);
    }

    pub fn select(&mut self) -> bool {
        commands::select(self)
    }

    pub fn drag(&mut self, delta_x: f32) -> bool {
        commands::drag(self, delta_x)
    }

    /// Move one body directly, e.g. to restore a saved layout.
    pub fn set_body_position(&mut self, id: BodyId, x: f32, y: f32, z: f32) -> bool {
        commands::set_body_position(self, id, x, y, z)
    }

    // === STEP ===

    /// Advance motion and placement by one frame.
    pub fn step(&mut self, dt_frame: f32) {
        step::step(self, dt_frame);
    }

    // === RENDER ===

    /// Refresh and return the packed `x, y, z` position buffer.
    pub fn positions(&mut self) -> &[f32] {
        render_extract::refresh_positions(self)
    }

    pub fn positions_ptr(&self) -> *const f32 {
        render_extract::positions_ptr(self)
    }

    pub fn positions_len(&self) -> usize {
        render_extract::positions_len(self)
    }
}
