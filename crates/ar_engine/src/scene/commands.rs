//! Pose edits coming from the UI layer
//!
//! Slider and button events are turned into [`PoseCommand`]s by the host and
//! applied through [`SceneRegistry::apply`](super::SceneRegistry::apply).

use serde::{Deserialize, Serialize};

use crate::render::primitives::Mesh;

/// A single pose edit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PoseCommand {
    /// Replace the uniform scale
    SetScale {
        /// New scale factor
        scale: f32,
    },
    /// Add rotation in degrees
    Rotate {
        /// Degrees about X
        dx: f32,
        /// Degrees about Y
        dy: f32,
        /// Degrees about Z
        dz: f32,
    },
    /// Add translation
    Translate {
        /// Offset along X
        dx: f32,
        /// Offset along Y
        dy: f32,
        /// Offset along Z
        dz: f32,
    },
    /// Return to the identity pose
    Reset,
}

impl PoseCommand {
    /// Apply this edit to a mesh
    pub fn apply_to(self, mesh: &mut Mesh) {
        match self {
            Self::SetScale { scale } => mesh.set_scale(scale),
            Self::Rotate { dx, dy, dz } => mesh.rotate(dx, dy, dz),
            Self::Translate { dx, dy, dz } => mesh.translate(dx, dy, dz),
            Self::Reset => mesh.reset_pose(),
        }
    }
}
