//! End-to-end checks: load from the catalog, edit the pose, pack, and build a draw list

use crate::foundation::math::{Mat4, Point3, Vec3};
use crate::render::frame::FrameSource;
use crate::render::primitives::{ModelKind, StaticCamera};
use crate::scene::{PoseCommand, SceneRegistry};
use approx::assert_relative_eq;

#[test]
fn test_cube_load_pose_pack() {
    let mut registry = SceneRegistry::new();
    let handle = registry.load_model_named("cube").unwrap();
    assert_eq!(handle.index(), 0);

    let mesh = registry.get_mesh_mut(handle).unwrap();
    mesh.set_scale(2.0);
    mesh.rotate(0.0, 180.0, 0.0);

    let mesh = registry.get_mesh(handle).unwrap();
    let bytes = mesh.position_bytes().unwrap();
    assert_eq!(bytes.len(), mesh.vertices().len() * 4);

    // +Z front corner ends up on the -Z side, doubled
    let p = mesh.model_matrix().transform_point(&Point3::new(0.5, 0.5, 0.5));
    assert_relative_eq!(p, Point3::new(-1.0, 1.0, -1.0), epsilon = 1e-5);
}

#[test]
fn test_ui_session_to_draw_list() {
    let mut registry = SceneRegistry::new();
    let sphere = registry.load_model(&ModelKind::from_name("Sphere")).unwrap();
    let pyramid = registry.load_model(&ModelKind::from_name("PYRAMID")).unwrap();

    // Slider drags arrive as many small deltas
    for _ in 0..9 {
        registry.apply(sphere, PoseCommand::Rotate { dx: 0.0, dy: 10.0, dz: 0.0 });
    }
    registry.apply(pyramid, PoseCommand::Translate { dx: 0.0, dy: 0.0, dz: -1.0 });

    let sphere_mesh = registry.get_mesh(sphere).unwrap();
    assert_relative_eq!(sphere_mesh.pose().rotation_y, 90.0, epsilon = 1e-4);
    let east = sphere_mesh.model_matrix().transform_point(&Point3::new(0.0, 0.0, 0.5));
    assert_relative_eq!(east, Point3::new(0.5, 0.0, 0.0), epsilon = 1e-5);

    let camera = StaticCamera::perspective(Vec3::new(0.0, 0.0, 3.0), 60.0, 0.5, 0.1, 50.0);
    let frame = camera.frame_matrices().unwrap();
    let items = frame.draw_list(&registry);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].index_count, 24);
    assert_relative_eq!(
        items[1].mvp,
        camera.projection_matrix() * camera.view_matrix() * registry.get_mesh(pyramid).unwrap().model_matrix(),
        epsilon = 1e-5
    );
}

#[test]
fn test_repacking_after_pose_edits_is_byte_identical() {
    let mut registry = SceneRegistry::new();
    let handle = registry.load_model(&ModelKind::Pyramid).unwrap();
    let before = registry.get_mesh(handle).unwrap().packed_buffers().unwrap().clone();

    let mesh = registry.get_mesh_mut(handle).unwrap();
    mesh.rotate(12.0, 34.0, 56.0);
    mesh.set_scale(0.25);
    let after = mesh.pack_buffers().clone();

    assert_eq!(before, after);
    assert_ne!(*registry.get_mesh(handle).unwrap().model_matrix(), Mat4::identity());
}
