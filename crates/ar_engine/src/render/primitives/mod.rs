//! Core primitive types for rendering
//!
//! This module contains the data the renderer draws: meshes and their poses,
//! packed upload buffers, the built-in model catalog, and a fixed camera.

pub mod buffers;
pub mod camera;
pub mod geometry;
pub mod mesh;
pub mod pose;

// Re-export commonly used types
pub use buffers::{pack_matrix, PackedBuffers};
pub use camera::StaticCamera;
pub use geometry::{GeometryData, GeometryFactory, ModelKind};
pub use mesh::{Mesh, MeshError};
pub use pose::Pose;
