//! Stokes-Einstein diffusion for the Brownian step model.

use std::f64::consts::PI;

/// Boltzmann constant, J/K.
pub const BOLTZMANN: f64 = 1.380649e-23;

/// Body temperature used for every species, K.
pub const BODY_TEMPERATURE_K: f64 = 310.0;

/// Diffusion coefficient `D = k_B T / (6 pi eta r)` in m^2/s.
///
/// `viscosity` is in Pa*s and `radius` in metres. Callers validate that both
/// are positive.
pub fn stokes_einstein(viscosity: f64, radius: f64) -> f64 {
    BOLTZMANN * BODY_TEMPERATURE_K / (6.0 * PI * viscosity * radius)
}

/// Per-axis standard deviation of one step, in scene units.
pub fn step_sd(diffusion: f64, dt: f64, scale_factor: f64) -> f64 {
    (2.0 * diffusion * dt).sqrt() * scale_factor
}
