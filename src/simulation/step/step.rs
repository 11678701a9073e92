use crate::systems::{step_population, MotionStats};

use super::{PerfTimer, SimulationCore};

pub(super) fn step(sim: &mut SimulationCore, dt_frame: f32) {
    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
        sim.perf_stats.body_count = sim.population.len() as u32;
        // positions transfer buffer plus body records (id + species + xyz)
        sim.perf_stats.memory_bytes = (sim.population.len() as u32).saturating_mul(12 + 20);
    }
    let step_start = PerfTimer::start_if(perf_on);

    // === MOTION ===
    // One randomized step per body, then containment and floors.
    let mut motion = MotionStats::default();
    let t0 = PerfTimer::start_if(perf_on);
    step_population(&mut sim.population, &mut sim.rng, &mut motion);
    if let Some(t0) = t0 {
        sim.perf_stats.motion_ms = t0.elapsed_ms();
        sim.perf_stats.absorb_motion(&motion);
    }

    // === PLACEMENT ===
    // The pending pose is consumed every frame; no pose means no reticle.
    let hit = sim.pending_hit.take();
    if sim.placement.is_immersive() {
        let t0 = PerfTimer::start_if(perf_on);
        sim.placement.update(hit);
        if let Some(t0) = t0 {
            sim.perf_stats.placement_ms = t0.elapsed_ms();
        }
    }

    // === RENDER ===
    // Body count is fixed after load, so this never reallocates and the
    // exported pointer stays valid.
    sim.population.positions_into(&mut sim.positions);

    if dt_frame.is_finite() && dt_frame > 0.0 {
        sim.elapsed_seconds += dt_frame as f64;
    }
    sim.frame += 1;

    if let Some(t) = step_start {
        sim.perf_stats.step_ms = t.elapsed_ms();
    }
}
