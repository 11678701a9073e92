//! Per-frame systems: population ownership, motion and AR placement.

pub mod motion;
pub mod placement;
pub mod population;

pub use motion::{step_population, MotionStats};
pub use placement::{PlacementPhase, PlacementState};
pub use population::{Body, BodyId, Population, SpeciesGroup};
