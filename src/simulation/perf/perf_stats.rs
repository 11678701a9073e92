use wasm_bindgen::prelude::*;

use crate::systems::MotionStats;

/// Per-step timings and counters. Zeros while perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) motion_ms: f64,
    pub(super) placement_ms: f64,
    pub(super) bodies_stepped: u32,
    pub(super) radial_clamps: u32,
    pub(super) floor_clamps: u32,
    pub(super) degenerate_rescales: u32,
    pub(super) body_count: u32,
    pub(super) memory_bytes: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn absorb_motion(&mut self, motion: &MotionStats) {
        self.bodies_stepped = motion.bodies_stepped;
        self.radial_clamps = motion.radial_clamps;
        self.floor_clamps = motion.floor_clamps;
        self.degenerate_rescales = motion.degenerate_rescales;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn motion_ms(&self) -> f64 { self.motion_ms }
    #[wasm_bindgen(getter)]
    pub fn placement_ms(&self) -> f64 { self.placement_ms }
    #[wasm_bindgen(getter)]
    pub fn bodies_stepped(&self) -> u32 { self.bodies_stepped }
    #[wasm_bindgen(getter)]
    pub fn radial_clamps(&self) -> u32 { self.radial_clamps }
    #[wasm_bindgen(getter)]
    pub fn floor_clamps(&self) -> u32 { self.floor_clamps }
    #[wasm_bindgen(getter)]
    pub fn degenerate_rescales(&self) -> u32 { self.degenerate_rescales }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
}
