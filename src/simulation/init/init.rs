use rand::SeedableRng;

use crate::core::random::SimRng;
use crate::domain::{ConfigError, Result, SceneConfig};
use crate::systems::{PlacementState, Population};

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn create_core(seed: u64) -> SimulationCore {
    let config = SceneConfig { species: Vec::new(), placement: Default::default() };
    SimulationCore {
        placement: PlacementState::new(config.placement),
        config,
        population: Population::empty(),
        loaded: false,
        rng: SimRng::seed_from_u64(seed),
        pending_hit: None,
        frame: 0,
        elapsed_seconds: 0.0,
        positions: Vec::new(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

/// One-shot population load, the counterpart of the host's "assets ready"
/// signal. The body set is fixed afterwards.
pub(super) fn load_population(sim: &mut SimulationCore, config: SceneConfig) -> Result<()> {
    if sim.loaded {
        return Err(ConfigError::AlreadyLoaded);
    }

    let population = Population::from_config(&config, &mut sim.rng)?;
    log::info!(
        "population loaded: {} bodies in {} species groups",
        population.len(),
        population.groups().len()
    );
    if population.is_empty() {
        log::warn!("scene has no bodies");
    }

    sim.placement.set_config(config.placement);
    sim.population = population;
    sim.config = config;
    sim.loaded = true;
    sim.population.positions_into(&mut sim.positions);
    Ok(())
}
