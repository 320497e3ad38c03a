//! # AR Engine
//!
//! Model transform and geometry-buffer core for an AR model viewer.
//!
//! The host application owns the camera feed, the AR session, the UI and the
//! GL context. This crate owns what it draws: meshes built from a small model
//! catalog, their poses and model matrices, native-endian upload buffers, and
//! the per-frame draw list combining each model matrix with the session's
//! projection and view.
//!
//! ## Quick Start
//!
//! ```rust
//! use ar_engine::prelude::*;
//!
//! let mut scene = SceneRegistry::new();
//! let cube = scene.load_model(&ModelKind::from_name("cube")).unwrap();
//!
//! let mesh = scene.get_mesh_mut(cube).unwrap();
//! mesh.set_scale(2.0);
//! mesh.rotate(0.0, 45.0, 0.0);
//!
//! let camera = StaticCamera::perspective(Vec3::new(0.0, 0.0, 3.0), 60.0, 1.0, 0.1, 100.0);
//! if let Some(frame) = camera.frame_matrices() {
//!     for item in frame.draw_list(&scene) {
//!         let mesh = scene.get_mesh(item.handle).unwrap();
//!         let _positions = mesh.position_bytes().unwrap();
//!         assert_eq!(item.index_count, 36);
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod core;
pub mod foundation;
pub mod render;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::config::{CameraConfig, ModelConfig, ViewerConfig},
        config::{Config, ConfigError},
        foundation::math::{Mat4, Mat4Ext, Point3, Vec3},
        render::{
            DrawItem, FrameMatrices, FrameSource, Mesh, MeshError, ModelKind, PackedBuffers, Pose,
            StaticCamera,
        },
        scene::{MeshHandle, PoseCommand, SceneRegistry, SceneStatistics},
    };
}
