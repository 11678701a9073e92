use super::SimulationCore;

pub(super) fn refresh_positions(sim: &mut SimulationCore) -> &[f32] {
    sim.population.positions_into(&mut sim.positions);
    &sim.positions
}

/// Pointer into the transfer buffer, refreshed by every step.
pub(super) fn positions_ptr(sim: &SimulationCore) -> *const f32 {
    sim.positions.as_ptr()
}

pub(super) fn positions_len(sim: &SimulationCore) -> usize {
    sim.positions.len()
}
