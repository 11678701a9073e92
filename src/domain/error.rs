//! Error types for scene configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported format version: {0}")]
    UnsupportedVersion(u32),

    #[error("{species}: body count must be >= 0, got {count}")]
    NegativeCount { species: &'static str, count: i64 },

    #[error("scene exceeds {max} bodies")]
    TooManyBodies { max: usize },

    #[error("{species}: min radius {min} exceeds max radius {max}")]
    InvertedShell { species: &'static str, min: f32, max: f32 },

    #[error("{species}: invalid parameter {name} = {value}")]
    InvalidParameter { species: &'static str, name: &'static str, value: f64 },

    #[error("population already loaded")]
    AlreadyLoaded,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
