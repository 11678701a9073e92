use crate::core::{Pose, Vec3};
use crate::systems::BodyId;

use super::SimulationCore;

pub(super) fn set_immersive_active(sim: &mut SimulationCore, active: bool) {
    if active == sim.placement.is_immersive() {
        return;
    }
    sim.pending_hit = None;
    if active {
        sim.placement.session_start();
    } else {
        sim.placement.session_end();
    }
}

pub(super) fn submit_hit_pose(sim: &mut SimulationCore, pose: Pose) {
    sim.pending_hit = Some(pose);
}

pub(super) fn submit_hit_matrix(sim: &mut SimulationCore, matrix: &[f32]) -> bool {
    match Pose::from_slice(matrix) {
        Some(pose) => {
            sim.pending_hit = Some(pose);
            true
        }
        None => {
            log::debug!("ignoring malformed hit pose ({} values)", matrix.len());
            sim.pending_hit = None;
            false
        }
    }
}

pub(super) fn clear_hit_pose(sim: &mut SimulationCore) {
    sim.pending_hit = None;
}

pub(super) fn select(sim: &mut SimulationCore) -> bool {
    sim.placement.select()
}

pub(super) fn drag(sim: &mut SimulationCore, delta_x: f32) -> bool {
    sim.placement.drag(delta_x)
}

pub(super) fn set_body_position(sim: &mut SimulationCore, id: BodyId, x: f32, y: f32, z: f32) -> bool {
    sim.population.set_position(id, Vec3::new(x, y, z))
}
