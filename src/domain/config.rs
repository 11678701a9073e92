use serde::{Deserialize, Serialize};

use super::error::{ConfigError, Result};
use super::species::{Floor, Sampling, Shell, Species, SpeciesParams, StepKernel, StepModel};

pub const FORMAT_VERSION: u32 = 1;

/// Membrane radius of the bundled cell model, scene units.
pub const CELL_RADIUS: f32 = 7.8;

/// Uniform scale applied to the group when it is placed in AR.
pub const AR_PLACEMENT_SCALE: f32 = 0.05;

/// Group transform tweaks applied on placement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementConfig {
    #[serde(default)]
    pub vertical_offset: f32,
    #[serde(default = "unit_scale")]
    pub scale: f32,
}

fn unit_scale() -> f32 {
    1.0
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self { vertical_offset: 0.0, scale: 1.0 }
    }
}

/// Resolved scene: species groups in body-id order plus placement settings.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub species: Vec<SpeciesParams>,
    pub placement: PlacementConfig,
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let root: ConfigRoot = serde_json::from_str(json)?;
        Self::from_root(root)
    }

    /// The stock cell viewer scene: water and proteins inside the membrane,
    /// extracellular molecules in the band outside it.
    pub fn cell_viewer() -> Self {
        let r = CELL_RADIUS;
        let species = vec![
            SpeciesParams {
                species: Species::Water,
                count: 500,
                kernel: StepKernel::Uniform { speed: 1.0 },
                containment: Shell::new(0.0, r),
                spawn: Shell::new(0.0, r),
                sampling: Sampling::Naive,
                floor: None,
            },
            SpeciesParams {
                species: Species::Protein,
                count: 200,
                kernel: StepKernel::Uniform { speed: 0.1 },
                containment: Shell::new(r / 4.0, r),
                spawn: Shell::new(r / 4.0, r),
                sampling: Sampling::Naive,
                floor: None,
            },
            SpeciesParams {
                species: Species::ExtracellularMolecule,
                count: 20,
                kernel: StepKernel::Uniform { speed: 0.05 },
                containment: Shell::new(r, r * 3.0),
                spawn: Shell::new(r * 1.5, r * 3.0),
                sampling: Sampling::Naive,
                floor: None,
            },
        ];
        Self {
            species,
            placement: PlacementConfig { vertical_offset: r, scale: AR_PLACEMENT_SCALE },
        }
    }

    pub fn body_count(&self) -> usize {
        self.species.iter().fold(0, |acc, s| acc.saturating_add(s.count))
    }

    /// Resolved parameters as JSON, for host-side tuning panels.
    pub fn manifest_json(&self) -> String {
        let out = Manifest {
            format_version: FORMAT_VERSION,
            body_count: self.body_count(),
            species: &self.species,
            placement: self.placement,
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }

    fn from_root(root: ConfigRoot) -> Result<Self> {
        if root.format_version != FORMAT_VERSION {
            return Err(ConfigError::UnsupportedVersion(root.format_version));
        }

        let species = root
            .species
            .into_iter()
            .map(|s| {
                SpeciesParams::new(
                    s.species,
                    s.count,
                    s.step,
                    s.containment,
                    s.spawn,
                    s.sampling,
                    s.floor,
                )
            })
            .collect::<Result<Vec<_>>>()?;

        let placement = root.placement.unwrap_or_default();
        for (name, value) in [("verticalOffset", placement.vertical_offset), ("scale", placement.scale)] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidParameter {
                    species: "placement",
                    name,
                    value: value as f64,
                });
            }
        }

        Ok(Self { species, placement })
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::cell_viewer()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest<'a> {
    format_version: u32,
    body_count: usize,
    species: &'a [SpeciesParams],
    placement: PlacementConfig,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigRoot {
    format_version: u32,
    species: Vec<SpeciesEntry>,
    #[serde(default)]
    placement: Option<PlacementConfig>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpeciesEntry {
    species: Species,
    count: i64,
    step: StepModel,
    containment: Shell,
    #[serde(default)]
    spawn: Option<Shell>,
    #[serde(default)]
    sampling: Sampling,
    #[serde(default)]
    floor: Option<Floor>,
}
