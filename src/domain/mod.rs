//! Scene description: species, their parameters and the JSON configuration.

pub mod config;
pub mod diffusion;
pub mod error;
pub mod species;

pub use config::{PlacementConfig, SceneConfig};
pub use error::{ConfigError, Result};
pub use species::{
    Floor, Sampling, Shell, Species, SpeciesId, SpeciesParams, StepKernel, StepModel, MAX_BODIES,
};
