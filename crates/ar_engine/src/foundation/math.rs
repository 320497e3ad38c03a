//! Math utilities and types
//!
//! Provides the fundamental math types used by the mesh and frame code.
//! All matrices are `nalgebra` 4x4 `f32` matrices, which store their
//! elements column-major, the layout GL expects for uniform upload.

pub use nalgebra::{Matrix4, Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}

/// Extension trait for Mat4 with elemental transform constructors
///
/// The rotation constructors build the textbook single-axis matrices
/// directly rather than going through an axis-angle or quaternion path,
/// so composing them reproduces the exact X, then Y, then Z sequence.
pub trait Mat4Ext {
    /// Rotation about the X axis by `angle` radians
    fn rotation_x(angle: f32) -> Mat4;

    /// Rotation about the Y axis by `angle` radians
    fn rotation_y(angle: f32) -> Mat4;

    /// Rotation about the Z axis by `angle` radians
    fn rotation_z(angle: f32) -> Mat4;

    /// Translation by `(x, y, z)`
    fn translation(x: f32, y: f32, z: f32) -> Mat4;

    /// Uniform scale by `s` on all three axes
    fn uniform_scale(s: f32) -> Mat4;

    /// Copy out the sixteen elements in column-major order
    fn to_column_major(&self) -> [f32; 16];
}

impl Mat4Ext for Mat4 {
    fn rotation_x(angle: f32) -> Mat4 {
        let (s, c) = angle.sin_cos();
        // Mat4::new takes its arguments row by row
        Mat4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0,   c,  -s, 0.0,
            0.0,   s,   c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    fn rotation_y(angle: f32) -> Mat4 {
        let (s, c) = angle.sin_cos();
        Mat4::new(
              c, 0.0,   s, 0.0,
            0.0, 1.0, 0.0, 0.0,
             -s, 0.0,   c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    fn rotation_z(angle: f32) -> Mat4 {
        let (s, c) = angle.sin_cos();
        Mat4::new(
              c,  -s, 0.0, 0.0,
              s,   c, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    fn translation(x: f32, y: f32, z: f32) -> Mat4 {
        Mat4::new_translation(&Vec3::new(x, y, z))
    }

    fn uniform_scale(s: f32) -> Mat4 {
        Mat4::new_nonuniform_scaling(&Vec3::new(s, s, s))
    }

    fn to_column_major(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        out.copy_from_slice(self.as_slice());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_elemental_rotations_match_nalgebra() {
        let angle = 0.7;
        assert_relative_eq!(
            Mat4::rotation_x(angle),
            Mat4::from_axis_angle(&Vec3::x_axis(), angle),
            epsilon = EPSILON
        );
        assert_relative_eq!(
            Mat4::rotation_y(angle),
            Mat4::from_axis_angle(&Vec3::y_axis(), angle),
            epsilon = EPSILON
        );
        assert_relative_eq!(
            Mat4::rotation_z(angle),
            Mat4::from_axis_angle(&Vec3::z_axis(), angle),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_rotation_y_right_handed() {
        // +90 degrees about Y carries +Z onto +X
        let m = Mat4::rotation_y(utils::deg_to_rad(90.0));
        let p = m.transform_point(&Point3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(p, Point3::new(1.0, 0.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_column_major_layout() {
        let m = Mat4::translation(1.0, 2.0, 3.0);
        let cols = m.to_column_major();
        // Translation lives in the fourth column
        assert_eq!(&cols[12..15], &[1.0, 2.0, 3.0]);
        assert_eq!(cols[15], 1.0);
    }

    #[test]
    fn test_degree_conversion() {
        assert_relative_eq!(utils::deg_to_rad(180.0), constants::PI, epsilon = EPSILON);
        assert_relative_eq!(utils::rad_to_deg(constants::PI), 180.0, epsilon = 1e-4);
    }
}
