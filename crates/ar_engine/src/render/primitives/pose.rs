//! Mesh pose: uniform scale, Euler rotation in degrees, translation
//!
//! Rotation and translation are accumulators. User input adds deltas to them
//! rather than setting absolute values; scale is the one absolute field.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{utils, Mat4, Mat4Ext};

/// Scale, rotation and translation of a mesh in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pose {
    /// Uniform scale factor. Not bounded; zero or negative values give degenerate matrices.
    pub scale: f32,
    /// Accumulated rotation about X in degrees
    pub rotation_x: f32,
    /// Accumulated rotation about Y in degrees
    pub rotation_y: f32,
    /// Accumulated rotation about Z in degrees
    pub rotation_z: f32,
    /// Accumulated translation along X
    pub translation_x: f32,
    /// Accumulated translation along Y
    pub translation_y: f32,
    /// Accumulated translation along Z
    pub translation_z: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            rotation_z: 0.0,
            translation_x: 0.0,
            translation_y: 0.0,
            translation_z: 0.0,
        }
    }
}

impl Pose {
    /// Identity pose
    pub fn identity() -> Self {
        Self::default()
    }

    /// Builder pattern: set uniform scale
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Builder pattern: set rotation in degrees
    pub fn with_rotation(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation_x = x;
        self.rotation_y = y;
        self.rotation_z = z;
        self
    }

    /// Builder pattern: set translation
    pub fn with_translation(mut self, x: f32, y: f32, z: f32) -> Self {
        self.translation_x = x;
        self.translation_y = y;
        self.translation_z = z;
        self
    }

    /// Add rotation deltas in degrees
    pub fn add_rotation(&mut self, dx: f32, dy: f32, dz: f32) {
        self.rotation_x += dx;
        self.rotation_y += dy;
        self.rotation_z += dz;
    }

    /// Add translation deltas
    pub fn add_translation(&mut self, dx: f32, dy: f32, dz: f32) {
        self.translation_x += dx;
        self.translation_y += dy;
        self.translation_z += dz;
    }

    /// Compose the model matrix `T * Rx * Ry * Rz * S`
    ///
    /// Geometry is scaled first, then rotated about Z, Y and X, then
    /// translated. Each rotation is its own elemental matrix, so the result
    /// depends on this exact order.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::identity()
            * Mat4::translation(self.translation_x, self.translation_y, self.translation_z)
            * Mat4::rotation_x(utils::deg_to_rad(self.rotation_x))
            * Mat4::rotation_y(utils::deg_to_rad(self.rotation_y))
            * Mat4::rotation_z(utils::deg_to_rad(self.rotation_z))
            * Mat4::uniform_scale(self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point3;
    use approx::{assert_relative_eq, relative_eq};

    #[test]
    fn test_default_pose_is_identity() {
        assert_eq!(Pose::default().to_matrix(), Mat4::identity());
    }

    #[test]
    fn test_accumulators_add() {
        let mut pose = Pose::identity();
        pose.add_rotation(10.0, 0.0, -5.0);
        pose.add_rotation(20.0, 1.0, 0.0);
        pose.add_translation(0.5, 0.0, 0.0);
        pose.add_translation(0.5, -1.0, 2.0);

        assert_eq!(pose.rotation_x, 30.0);
        assert_eq!(pose.rotation_y, 1.0);
        assert_eq!(pose.rotation_z, -5.0);
        assert_eq!((pose.translation_x, pose.translation_y, pose.translation_z), (1.0, -1.0, 2.0));
        assert_eq!(pose.scale, 1.0);
    }

    #[test]
    fn test_scale_applies_before_translation() {
        let pose = Pose::identity().with_scale(3.0).with_translation(1.0, 0.0, 0.0);
        let p = pose.to_matrix().transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Point3::new(4.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_rotation_order_is_x_then_y_then_z() {
        let pose = Pose::identity().with_rotation(30.0, 45.0, 60.0);
        let expected = Mat4::rotation_x(utils::deg_to_rad(30.0))
            * Mat4::rotation_y(utils::deg_to_rad(45.0))
            * Mat4::rotation_z(utils::deg_to_rad(60.0));
        assert_relative_eq!(pose.to_matrix(), expected, epsilon = 1e-6);

        let reversed = Mat4::rotation_z(utils::deg_to_rad(60.0))
            * Mat4::rotation_y(utils::deg_to_rad(45.0))
            * Mat4::rotation_x(utils::deg_to_rad(30.0));
        assert!(!relative_eq!(pose.to_matrix(), reversed, epsilon = 1e-3));
    }
}
