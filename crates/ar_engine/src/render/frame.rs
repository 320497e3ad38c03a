//! Per-frame camera input and draw list
//!
//! The AR session (or any other camera) is owned by the host. Each frame the
//! host asks its [`FrameSource`] for projection and view matrices and hands
//! them to the core, which combines them with every mesh's model matrix.

use crate::foundation::math::Mat4;
use crate::scene::{MeshHandle, SceneRegistry};

/// Projection and view matrices for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    /// View-to-clip matrix
    pub projection: Mat4,
    /// World-to-view matrix
    pub view: Mat4,
}

impl FrameMatrices {
    /// Bundle a projection and view matrix
    pub fn new(projection: Mat4, view: Mat4) -> Self {
        Self { projection, view }
    }

    /// `projection * view`
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    /// `projection * view * model`
    pub fn mvp(&self, model: &Mat4) -> Mat4 {
        self.view_projection() * model
    }

    /// One draw item per registered mesh, in insertion order
    pub fn draw_list(&self, registry: &SceneRegistry) -> Vec<DrawItem> {
        let view_projection = self.view_projection();
        registry
            .iter()
            .map(|(handle, mesh)| DrawItem {
                handle,
                mvp: view_projection * mesh.model_matrix(),
                index_count: mesh.index_count(),
            })
            .collect()
    }
}

/// Everything the renderer needs per mesh besides the packed buffers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    /// Registry handle of the mesh
    pub handle: MeshHandle,
    /// Combined model-view-projection matrix
    pub mvp: Mat4,
    /// Element count for the indexed draw
    pub index_count: usize,
}

/// Externally owned producer of per-frame camera matrices
///
/// Implemented by the host's AR session wrapper. The session's lifecycle
/// (resume, pause, release) stays with the host; the core only reads from it.
pub trait FrameSource {
    /// Matrices for the current frame, or `None` while the camera is not tracking
    fn frame_matrices(&self) -> Option<FrameMatrices>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Mat4Ext;
    use crate::render::primitives::ModelKind;
    use approx::assert_relative_eq;

    struct LostTracking;

    impl FrameSource for LostTracking {
        fn frame_matrices(&self) -> Option<FrameMatrices> {
            None
        }
    }

    #[test]
    fn test_mvp_order() {
        let projection = Mat4::uniform_scale(2.0);
        let view = Mat4::translation(0.0, 0.0, -3.0);
        let model = Mat4::rotation_y(0.5);
        let frame = FrameMatrices::new(projection, view);
        assert_relative_eq!(frame.mvp(&model), projection * view * model, epsilon = 1e-6);
    }

    #[test]
    fn test_draw_list_follows_registry() {
        let mut registry = SceneRegistry::new();
        let cube = registry.load_model(&ModelKind::Cube).unwrap();
        let pyramid = registry.load_model(&ModelKind::Pyramid).unwrap();
        registry.get_mesh_mut(pyramid).unwrap().translate(1.0, 0.0, 0.0);

        let frame = FrameMatrices::new(Mat4::identity(), Mat4::translation(0.0, 0.0, -2.0));
        let items = frame.draw_list(&registry);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].handle, cube);
        assert_eq!(items[0].index_count, 36);
        assert_eq!(items[1].handle, pyramid);
        assert_eq!(items[1].index_count, 18);
        assert_relative_eq!(
            items[1].mvp,
            frame.mvp(registry.get_mesh(pyramid).unwrap().model_matrix()),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_frame_source_may_skip_frames() {
        assert!(LostTracking.frame_matrices().is_none());
    }
}
