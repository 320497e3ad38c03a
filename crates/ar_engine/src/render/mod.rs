//! Rendering data
//!
//! Everything here is backend-agnostic: meshes and their upload buffers,
//! the built-in model catalog, and the per-frame matrices a GL renderer
//! combines with each mesh's model matrix. Shader programs and GL object
//! lifetimes belong to the host.

pub mod frame;
pub mod primitives;

pub use frame::{DrawItem, FrameMatrices, FrameSource};
pub use primitives::{Mesh, MeshError, ModelKind, PackedBuffers, Pose, StaticCamera};
