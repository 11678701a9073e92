use rand::SeedableRng;

use crate::core::random::SimRng;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &SimulationCore) -> PerfStats {
    sim.perf_stats.clone()
}

pub(super) fn reseed(sim: &mut SimulationCore, seed: u64) {
    sim.rng = SimRng::seed_from_u64(seed);
}
