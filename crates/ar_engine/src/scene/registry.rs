//! Insertion-ordered mesh registry
//!
//! Meshes are addressed by the index they were inserted at. Handles stay
//! valid until [`SceneRegistry::clear`]; there is no per-mesh removal, so a
//! handle is never reused for a different mesh while the registry lives.

use std::fmt;

use super::commands::PoseCommand;
use crate::render::primitives::{Mesh, MeshError, ModelKind};

/// Stable handle to a mesh in a [`SceneRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshHandle(usize);

impl MeshHandle {
    /// Zero-based insertion index
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for MeshHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns every placed mesh; the only path to mutate one
#[derive(Debug, Default)]
pub struct SceneRegistry {
    meshes: Vec<Mesh>,
}

impl SceneRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a mesh and return its handle
    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshHandle {
        let handle = MeshHandle(self.meshes.len());
        log::info!("Added mesh '{}' as {}", mesh.name(), handle);
        self.meshes.push(mesh);
        handle
    }

    /// Build a model from the catalog and add it
    pub fn load_model(&mut self, kind: &ModelKind) -> Result<MeshHandle, MeshError> {
        let mesh = kind.build_mesh()?;
        Ok(self.add_mesh(mesh))
    }

    /// Resolve a picker name, build it and add it
    pub fn load_model_named(&mut self, name: &str) -> Result<MeshHandle, MeshError> {
        self.load_model(&ModelKind::from_name(name))
    }

    /// Look up a mesh
    pub fn get_mesh(&self, handle: MeshHandle) -> Option<&Mesh> {
        self.meshes.get(handle.0)
    }

    /// Look up a mesh for mutation
    pub fn get_mesh_mut(&mut self, handle: MeshHandle) -> Option<&mut Mesh> {
        self.meshes.get_mut(handle.0)
    }

    /// Look up a mesh by a raw integer from the host; negative or past-the-end is `None`
    pub fn get_mesh_by_index(&self, index: i64) -> Option<&Mesh> {
        usize::try_from(index).ok().and_then(|i| self.meshes.get(i))
    }

    /// Convert a raw integer into a handle if it names a live mesh
    pub fn handle_at(&self, index: i64) -> Option<MeshHandle> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.meshes.len())
            .map(MeshHandle)
    }

    /// Apply a pose edit; `false` if the handle is unknown
    pub fn apply(&mut self, handle: MeshHandle, command: PoseCommand) -> bool {
        match self.get_mesh_mut(handle) {
            Some(mesh) => {
                command.apply_to(mesh);
                true
            }
            None => {
                log::warn!("Ignoring {:?} for unknown mesh {}", command, handle);
                false
            }
        }
    }

    /// All meshes in insertion order
    pub fn all_meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Iterate meshes with their handles in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (MeshHandle, &Mesh)> {
        self.meshes.iter().enumerate().map(|(i, mesh)| (MeshHandle(i), mesh))
    }

    /// Iterate meshes mutably with their handles in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (MeshHandle, &mut Mesh)> {
        self.meshes.iter_mut().enumerate().map(|(i, mesh)| (MeshHandle(i), mesh))
    }

    /// Number of meshes
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Whether the registry holds no meshes
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Release every mesh's buffers and drop all meshes
    ///
    /// Handles issued before the call no longer resolve; numbering restarts at 0.
    pub fn clear(&mut self) {
        for mesh in &mut self.meshes {
            mesh.release_buffers();
        }
        log::info!("Cleared {} meshes from scene", self.meshes.len());
        self.meshes.clear();
    }

    /// Gets statistics about the scene
    pub fn statistics(&self) -> SceneStatistics {
        SceneStatistics {
            mesh_count: self.meshes.len(),
            total_vertices: self.meshes.iter().map(Mesh::vertex_count).sum(),
            total_triangles: self.meshes.iter().map(Mesh::triangle_count).sum(),
            packed_bytes: self
                .meshes
                .iter()
                .filter_map(|mesh| mesh.packed_buffers().ok())
                .map(|packed| packed.total_bytes())
                .sum(),
        }
    }
}

/// Scene statistics for debugging and UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SceneStatistics {
    /// Number of meshes
    pub mesh_count: usize,
    /// Sum of vertex counts
    pub total_vertices: usize,
    /// Sum of triangle counts
    pub total_triangles: usize,
    /// Bytes held in packed buffers
    pub packed_bytes: usize,
}
