//! # Fixed Camera
//!
//! A stand-in for the AR session's camera when no session is running: a
//! perspective projection and a look-at view that never change unless the
//! host moves them. Matrices use OpenGL clip-space conventions (Y up,
//! depth in [-1, 1]) to match a GL ES host.

use crate::foundation::math::{utils, Mat4, Point3, Vec3};
use crate::render::frame::{FrameMatrices, FrameSource};

/// Perspective camera with a fixed look-at target
#[derive(Debug, Clone)]
pub struct StaticCamera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Vertical field of view in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl StaticCamera {
    /// Create a perspective camera looking at the origin with +Y up
    ///
    /// # Example
    /// ```rust
    /// use ar_engine::foundation::math::Vec3;
    /// use ar_engine::render::primitives::StaticCamera;
    ///
    /// let camera = StaticCamera::perspective(Vec3::new(0.0, 0.0, 3.0), 60.0, 9.0 / 16.0, 0.1, 100.0);
    /// assert_eq!(camera.target, Vec3::zeros());
    /// ```
    ///
    /// Parameters are stored as given. A camera with a degenerate projection
    /// (see [`Self::has_valid_projection`]) yields no frame from
    /// [`FrameSource::frame_matrices`].
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// Point the camera at `target` with the given up vector
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        self.target = target;
        self.up = up;
        log::trace!("Camera looking at {:?}", target);
    }

    /// Update aspect ratio after a surface resize
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        if aspect > 0.0 {
            self.aspect = aspect;
        } else {
            log::warn!("Ignoring non-positive aspect ratio {}", aspect);
        }
    }

    /// Whether the projection parameters describe a usable frustum
    ///
    /// Requires a finite positive aspect, a field of view inside (0, pi), and
    /// `0 < near < far`.
    pub fn has_valid_projection(&self) -> bool {
        self.aspect.is_finite()
            && self.aspect > 0.0
            && self.fov > 0.0
            && self.fov < std::f32::consts::PI
            && self.near > 0.0
            && self.far > self.near
            && self.far.is_finite()
    }

    /// World-to-view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(&Point3::from(self.position), &Point3::from(self.target), &self.up)
    }

    /// View-to-clip matrix
    ///
    /// # Panics
    ///
    /// nalgebra panics on a zero aspect ratio or `near == far`; check
    /// [`Self::has_valid_projection`] first when the parameters are untrusted.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }
}

impl FrameSource for StaticCamera {
    fn frame_matrices(&self) -> Option<FrameMatrices> {
        if !self.has_valid_projection() {
            log::warn!(
                "Degenerate camera projection (aspect={}, near={}, far={}), no frame",
                self.aspect,
                self.near,
                self.far
            );
            return None;
        }
        Some(FrameMatrices::new(self.projection_matrix(), self.view_matrix()))
    }
}
