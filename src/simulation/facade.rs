use wasm_bindgen::prelude::*;

use crate::domain::ConfigError;

use super::perf_stats::PerfStats;
use super::SimulationCore;

fn to_js(err: ConfigError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Where the packed position buffer lives in WASM memory.
#[wasm_bindgen]
pub struct PositionsLayout {
    ptr: u32,
    len_elements: u32,
    len_bytes: u32,
}

#[wasm_bindgen]
impl PositionsLayout {
    #[wasm_bindgen(getter)]
    pub fn ptr(&self) -> u32 { self.ptr }
    #[wasm_bindgen(getter)]
    pub fn len_elements(&self) -> u32 { self.len_elements }
    #[wasm_bindgen(getter)]
    pub fn len_bytes(&self) -> u32 { self.len_bytes }
}

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create an empty simulation with a seeded PRNG stream
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Self {
        Self {
            core: SimulationCore::new(seed),
        }
    }

    #[wasm_bindgen(js_name = withDefaultPopulation)]
    pub fn with_default_population(seed: u64) -> Result<Simulation, JsValue> {
        let mut sim = Self::new(seed);
        sim.load_default_population()?;
        Ok(sim)
    }

    /// Populate from a JSON scene (call once, when assets are ready)
    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_config_json(&json).map_err(to_js)
    }

    /// Populate with the stock cell viewer scene
    pub fn load_default_population(&mut self) -> Result<(), JsValue> {
        self.core.load_default_population().map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn is_loaded(&self) -> bool { self.core.is_loaded() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.body_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn elapsed_seconds(&self) -> f64 { self.core.elapsed_seconds() }

    /// Species id of a body (see `species_*` exports), undefined if unknown
    pub fn body_species(&self, id: u32) -> Option<u8> {
        self.core.body_species(id).map(|s| s.id())
    }

    pub fn manifest_json(&self) -> String {
        self.core.manifest_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn reseed(&mut self, seed: u64) {
        self.core.reseed(seed);
    }

    // === XR API ===

    /// Mirror the host's XR session state (sessionstart / sessionend)
    pub fn set_immersive_active(&mut self, active: bool) {
        self.core.set_immersive_active(active);
    }

    /// Hit-test pose for the next step, as the 16-float column-major matrix
    /// from `XRPose.transform.matrix`. Returns false if it was malformed.
    pub fn submit_hit_pose(&mut self, matrix: Vec<f32>) -> bool {
        self.core.submit_hit_matrix(&matrix)
    }

    pub fn clear_hit_pose(&mut self) {
        self.core.clear_hit_pose();
    }

    /// Controller "select" gesture. Returns true if the group was placed.
    pub fn select(&mut self) -> bool {
        self.core.select()
    }

    /// Horizontal touch drag in pixels; rotates the placed group
    pub fn drag(&mut self, delta_x: f32) -> bool {
        self.core.drag(delta_x)
    }

    #[wasm_bindgen(getter)]
    pub fn is_immersive(&self) -> bool { self.core.placement().is_immersive() }

    #[wasm_bindgen(getter)]
    pub fn is_placed(&self) -> bool { self.core.placement().is_placed() }

    #[wasm_bindgen(getter)]
    pub fn reticle_visible(&self) -> bool { self.core.placement().reticle_visible() }

    #[wasm_bindgen(getter)]
    pub fn group_visible(&self) -> bool { self.core.placement().group_visible() }

    /// Reticle matrix while it is visible
    pub fn reticle_matrix(&self) -> Option<Vec<f32>> {
        self.core.placement().reticle().map(|p| p.matrix.to_vec())
    }

    /// Group transform to copy onto the host's scene group
    pub fn group_matrix(&self) -> Vec<f32> {
        self.core.placement().group_matrix().to_vec()
    }

    // === STEP ===

    /// Step the simulation forward one frame
    pub fn step(&mut self, dt_frame: f32) {
        self.core.step(dt_frame);
    }

    // === RENDER API ===

    /// Copy of all positions as x, y, z triples indexed by body id
    pub fn body_positions(&mut self) -> Vec<f32> {
        self.core.positions().to_vec()
    }

    pub fn set_body_position(&mut self, id: u32, x: f32, y: f32, z: f32) -> bool {
        self.core.set_body_position(id, x, y, z)
    }

    /// Get pointer to the position buffer (zero-copy view for JS)
    pub fn positions_ptr(&self) -> *const f32 {
        self.core.positions_ptr()
    }

    pub fn positions_len(&self) -> usize {
        self.core.positions_len()
    }

    pub fn positions_layout(&self) -> PositionsLayout {
        let len = self.core.positions_len();
        PositionsLayout {
            ptr: self.core.positions_ptr() as u32,
            len_elements: len as u32,
            len_bytes: (len * std::mem::size_of::<f32>()) as u32,
        }
    }
}

impl Simulation {
    /// Native access to the core, for embedding outside the browser.
    pub fn core(&self) -> &SimulationCore {
        &self.core
    }
}
