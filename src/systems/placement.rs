//! AR placement: reticle tracking and one-shot placement of the body group.
//!
//! `Searching` is entered on session start. Each frame the latest hit pose
//! (if any) becomes the reticle. A select gesture with a visible reticle
//! moves the group onto it and switches to `Placed`, which lasts until the
//! session ends.

use crate::core::{GroupTransform, Pose};
use crate::domain::PlacementConfig;

/// Radians of yaw per pixel of horizontal drag.
pub const DRAG_RADIANS_PER_PIXEL: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementPhase {
    Searching,
    Placed,
}

#[derive(Clone, Debug)]
pub struct PlacementState {
    config: PlacementConfig,
    immersive: bool,
    phase: PlacementPhase,
    reticle: Option<Pose>,
    group: GroupTransform,
    group_visible: bool,
}

impl PlacementState {
    pub fn new(config: PlacementConfig) -> Self {
        Self {
            config,
            immersive: false,
            phase: PlacementPhase::Searching,
            reticle: None,
            group: GroupTransform::identity(),
            group_visible: true,
        }
    }

    pub fn set_config(&mut self, config: PlacementConfig) {
        self.config = config;
    }

    /// Immersive session began: search for a surface with the group hidden.
    pub fn session_start(&mut self) {
        self.immersive = true;
        self.phase = PlacementPhase::Searching;
        self.reticle = None;
        self.group_visible = false;
        log::info!("immersive session started, searching for a surface");
    }

    /// Immersive session ended: back to the pre-session defaults.
    pub fn session_end(&mut self) {
        self.immersive = false;
        self.phase = PlacementPhase::Searching;
        self.reticle = None;
        self.group = GroupTransform::identity();
        self.group_visible = true;
        log::info!("immersive session ended, group transform reset");
    }

    /// Feed this frame's hit pose. `None` hides the reticle.
    pub fn update(&mut self, hit: Option<Pose>) {
        if !self.immersive {
            return;
        }
        self.reticle = match self.phase {
            PlacementPhase::Searching => hit,
            PlacementPhase::Placed => None,
        };
    }

    /// Handle a select gesture. Returns true when it placed the group.
    pub fn select(&mut self) -> bool {
        if self.phase != PlacementPhase::Searching {
            return false;
        }
        let Some(reticle) = self.reticle.take() else {
            return false;
        };

        let mut position = reticle.translation();
        position.y += self.config.vertical_offset;
        self.group.position = position;
        self.group.scale = self.config.scale;
        self.group_visible = true;
        self.phase = PlacementPhase::Placed;
        log::info!(
            "group placed at ({:.3}, {:.3}, {:.3})",
            position.x,
            position.y,
            position.z
        );
        true
    }

    /// Rotate the placed group about +y by a horizontal drag in pixels.
    pub fn drag(&mut self, delta_x: f32) -> bool {
        if !self.immersive || self.phase != PlacementPhase::Placed || !delta_x.is_finite() {
            return false;
        }
        self.group.rotation_y += delta_x * DRAG_RADIANS_PER_PIXEL;
        true
    }

    pub fn is_immersive(&self) -> bool {
        self.immersive
    }

    pub fn phase(&self) -> PlacementPhase {
        self.phase
    }

    pub fn is_placed(&self) -> bool {
        self.phase == PlacementPhase::Placed
    }

    pub fn reticle_visible(&self) -> bool {
        self.reticle.is_some()
    }

    pub fn reticle(&self) -> Option<&Pose> {
        self.reticle.as_ref()
    }

    pub fn group(&self) -> &GroupTransform {
        &self.group
    }

    pub fn group_visible(&self) -> bool {
        self.group_visible
    }

    pub fn group_matrix(&self) -> [f32; 16] {
        self.group.matrix()
    }
}

impl Default for PlacementState {
    fn default() -> Self {
        Self::new(PlacementConfig::default())
    }
}
