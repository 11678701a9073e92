use serde::{Deserialize, Serialize};

use super::diffusion::{step_sd, stokes_einstein};
use super::error::{ConfigError, Result};

pub type SpeciesId = u8;

/// Upper bound on bodies in one scene; keeps ids within `u32` and the
/// position buffer well inside wasm32 memory.
pub const MAX_BODIES: usize = 1 << 22;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Species {
    Protein,
    Water,
    ViralParticle,
    Bacterium,
    ExtracellularMolecule,
}

impl Species {
    pub const ALL: [Species; 5] = [
        Species::Protein,
        Species::Water,
        Species::ViralParticle,
        Species::Bacterium,
        Species::ExtracellularMolecule,
    ];

    pub fn id(self) -> SpeciesId {
        match self {
            Species::Protein => 0,
            Species::Water => 1,
            Species::ViralParticle => 2,
            Species::Bacterium => 3,
            Species::ExtracellularMolecule => 4,
        }
    }

    pub fn from_id(id: SpeciesId) -> Option<Species> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn key(self) -> &'static str {
        match self {
            Species::Protein => "protein",
            Species::Water => "water",
            Species::ViralParticle => "viralParticle",
            Species::Bacterium => "bacterium",
            Species::ExtracellularMolecule => "extracellularMolecule",
        }
    }
}

/// Step model as written in the scene configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "camelCase")]
pub enum StepModel {
    /// Fixed per-frame magnitude: each axis moves `(u - 0.5) * speed`.
    Uniform { speed: f32 },
    /// Thermal motion from the Stokes-Einstein relation.
    #[serde(rename_all = "camelCase")]
    Brownian {
        /// Fluid viscosity, Pa*s.
        viscosity: f64,
        /// Particle radius, m.
        radius: f64,
        /// Physical time per frame, s.
        dt: f64,
        /// Metres to scene units.
        scale_factor: f64,
    },
}

/// Step distribution after parameter resolution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StepKernel {
    Uniform { speed: f32 },
    Gaussian { mean: f64, sd: f64 },
}

/// How starting positions are drawn inside the spawn shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sampling {
    /// Normalized uniform-cube direction scaled by a uniform radius.
    /// Not uniform by volume.
    #[default]
    Naive,
    /// Uniform by volume inside the ball of `max_radius`; ignores `min_radius`.
    VolumeUniform,
}

/// Radial band `[min_radius, max_radius]` around the origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shell {
    pub min_radius: f32,
    pub max_radius: f32,
}

impl Shell {
    pub fn new(min_radius: f32, max_radius: f32) -> Self {
        Self { min_radius, max_radius }
    }

    fn validate(&self, species: Species) -> Result<()> {
        for (name, value) in [("minRadius", self.min_radius), ("maxRadius", self.max_radius)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidParameter {
                    species: species.key(),
                    name,
                    value: value as f64,
                });
            }
        }
        if self.min_radius > self.max_radius {
            return Err(ConfigError::InvertedShell {
                species: species.key(),
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        Ok(())
    }
}

/// Per-axis lower bounds applied after radial containment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Floor {
    pub y: Option<f32>,
    pub z: Option<f32>,
}

/// Validated, immutable parameters of one species group.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesParams {
    pub species: Species,
    pub count: usize,
    pub kernel: StepKernel,
    pub containment: Shell,
    pub spawn: Shell,
    pub sampling: Sampling,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<Floor>,
}

impl SpeciesParams {
    /// Validate raw values and resolve the step model.
    ///
    /// `spawn` defaults to `containment` when `None`.
    pub fn new(
        species: Species,
        count: i64,
        step: StepModel,
        containment: Shell,
        spawn: Option<Shell>,
        sampling: Sampling,
        floor: Option<Floor>,
    ) -> Result<Self> {
        if count < 0 {
            return Err(ConfigError::NegativeCount { species: species.key(), count });
        }
        let count = usize::try_from(count)
            .ok()
            .filter(|&n| n <= MAX_BODIES)
            .ok_or(ConfigError::TooManyBodies { max: MAX_BODIES })?;
        let params = Self {
            species,
            count,
            kernel: resolve_kernel(species, step)?,
            containment,
            spawn: spawn.unwrap_or(containment),
            sampling,
            floor,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check shells and floors. Fields are public, so population
    /// initialization re-runs this on hand-built parameters.
    pub fn validate(&self) -> Result<()> {
        self.containment.validate(self.species)?;
        self.spawn.validate(self.species)?;
        if let Some(floor) = self.floor {
            for (name, value) in [("floor.y", floor.y), ("floor.z", floor.z)] {
                if let Some(v) = value {
                    if !v.is_finite() {
                        return Err(invalid(self.species, name, v as f64));
                    }
                }
            }
        }
        Ok(())
    }

    /// Uniform-step group with identical spawn and containment shells.
    pub fn uniform(species: Species, count: i64, speed: f32, min_radius: f32, max_radius: f32) -> Result<Self> {
        Self::new(
            species,
            count,
            StepModel::Uniform { speed },
            Shell::new(min_radius, max_radius),
            None,
            Sampling::Naive,
            None,
        )
    }
}

fn invalid(species: Species, name: &'static str, value: f64) -> ConfigError {
    ConfigError::InvalidParameter { species: species.key(), name, value }
}

fn resolve_kernel(species: Species, step: StepModel) -> Result<StepKernel> {
    match step {
        StepModel::Uniform { speed } => {
            if !speed.is_finite() || speed < 0.0 {
                return Err(invalid(species, "speed", speed as f64));
            }
            Ok(StepKernel::Uniform { speed })
        }
        StepModel::Brownian { viscosity, radius, dt, scale_factor } => {
            for (name, value) in [("viscosity", viscosity), ("radius", radius), ("dt", dt)] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(invalid(species, name, value));
                }
            }
            if !scale_factor.is_finite() || scale_factor < 0.0 {
                return Err(invalid(species, "scaleFactor", scale_factor));
            }
            let sd = step_sd(stokes_einstein(viscosity, radius), dt, scale_factor);
            // Displacements are applied in f32.
            if !sd.is_finite() || sd > f32::MAX as f64 {
                return Err(invalid(species, "sd", sd));
            }
            Ok(StepKernel::Gaussian { mean: 0.0, sd })
        }
    }
}
