//! Mesh representation for placed 3D models
//!
//! A [`Mesh`] pairs immutable geometry (positions, indices, normals, colors)
//! with a mutable [`Pose`] and the model matrix derived from it.
//!
//! # Threading
//!
//! `Mesh` does no internal locking. Pose mutation and reads of the model
//! matrix or packed buffers must not overlap across threads; a host that
//! mutates from a UI thread while drawing on a GL thread needs its own lock
//! around the owning [`SceneRegistry`](crate::scene::SceneRegistry).

use thiserror::Error;

use super::buffers::PackedBuffers;
use super::pose::Pose;
use crate::foundation::math::{Mat4, Mat4Ext};

/// Mesh construction and buffer access errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Array lengths disagree or an index is out of range
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A packed buffer was requested before packing
    #[error("Mesh buffers have not been packed")]
    BufferNotInitialized,
}

/// Renderable geometry with a pose and derived model matrix
#[derive(Debug, Clone)]
pub struct Mesh {
    name: String,
    vertices: Vec<f32>,
    indices: Vec<u32>,
    normals: Vec<f32>,
    colors: Vec<f32>,
    pose: Pose,
    model_matrix: Mat4,
    packed: Option<PackedBuffers>,
}

impl Mesh {
    /// Create a mesh from flattened arrays and pack its upload buffers
    ///
    /// # Errors
    /// [`MeshError::InvalidGeometry`] when positions or normals are not xyz
    /// triples of equal length, colors are not one RGBA quad per vertex,
    /// indices are not whole triangles, or an index names a missing vertex.
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<f32>,
        indices: Vec<u32>,
        normals: Vec<f32>,
        colors: Vec<f32>,
    ) -> Result<Self, MeshError> {
        let name = name.into();
        validate_geometry(&vertices, &indices, &normals, &colors)?;

        let mut mesh = Self {
            name,
            vertices,
            indices,
            normals,
            colors,
            pose: Pose::default(),
            model_matrix: Mat4::identity(),
            packed: None,
        };
        mesh.pack_buffers();

        log::debug!(
            "Created mesh '{}': {} vertices, {} triangles",
            mesh.name,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }

    /// Display label; not unique
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Flattened xyz positions
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Triangle-list indices
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Flattened xyz normals
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Flattened RGBA colors
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of indices, i.e. the draw call's element count
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Current pose
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Model matrix for the current pose
    pub fn model_matrix(&self) -> &Mat4 {
        &self.model_matrix
    }

    /// Model matrix as sixteen column-major floats for a uniform upload
    pub fn model_matrix_array(&self) -> [f32; 16] {
        self.model_matrix.to_column_major()
    }

    /// Replace the uniform scale
    pub fn set_scale(&mut self, scale: f32) {
        self.pose.scale = scale;
        self.recompute_model_matrix();
    }

    /// Add rotation deltas in degrees about X, Y and Z
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.pose.add_rotation(dx, dy, dz);
        self.recompute_model_matrix();
    }

    /// Add translation deltas
    pub fn translate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.pose.add_translation(dx, dy, dz);
        self.recompute_model_matrix();
    }

    /// Replace the whole pose
    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
        self.recompute_model_matrix();
    }

    /// Return to the identity pose
    pub fn reset_pose(&mut self) {
        self.set_pose(Pose::default());
    }

    pub(crate) fn recompute_model_matrix(&mut self) {
        self.model_matrix = self.pose.to_matrix();
        log::trace!("Mesh '{}' pose updated: {:?}", self.name, self.pose);
    }

    /// (Re)build the packed upload buffers from the geometry arrays
    pub fn pack_buffers(&mut self) -> &PackedBuffers {
        let packed = PackedBuffers::pack(&self.vertices, &self.indices, &self.colors);
        log::debug!("Packed mesh '{}' into {} bytes", self.name, packed.total_bytes());
        self.packed.insert(packed)
    }

    /// Drop the packed buffers
    pub fn release_buffers(&mut self) {
        if self.packed.take().is_some() {
            log::debug!("Released buffers for mesh '{}'", self.name);
        }
    }

    /// Whether packed buffers are currently held
    pub fn has_packed_buffers(&self) -> bool {
        self.packed.is_some()
    }

    /// All three packed buffers
    pub fn packed_buffers(&self) -> Result<&PackedBuffers, MeshError> {
        self.packed.as_ref().ok_or(MeshError::BufferNotInitialized)
    }

    /// Packed position bytes
    pub fn position_bytes(&self) -> Result<&[u8], MeshError> {
        self.packed_buffers().map(PackedBuffers::positions)
    }

    /// Packed index bytes
    pub fn index_bytes(&self) -> Result<&[u8], MeshError> {
        self.packed_buffers().map(PackedBuffers::indices)
    }

    /// Packed color bytes
    pub fn color_bytes(&self) -> Result<&[u8], MeshError> {
        self.packed_buffers().map(PackedBuffers::colors)
    }
}

fn validate_geometry(
    vertices: &[f32],
    indices: &[u32],
    normals: &[f32],
    colors: &[f32],
) -> Result<(), MeshError> {
    if vertices.len() % 3 != 0 {
        return Err(MeshError::InvalidGeometry(format!(
            "vertex array length {} is not a multiple of 3",
            vertices.len()
        )));
    }
    if normals.len() != vertices.len() {
        return Err(MeshError::InvalidGeometry(format!(
            "normal array length {} does not match vertex array length {}",
            normals.len(),
            vertices.len()
        )));
    }

    let vertex_count = vertices.len() / 3;
    if colors.len() != vertex_count * 4 {
        return Err(MeshError::InvalidGeometry(format!(
            "color array length {} should be {} for {} vertices",
            colors.len(),
            vertex_count * 4,
            vertex_count
        )));
    }
    if indices.len() % 3 != 0 {
        return Err(MeshError::InvalidGeometry(format!(
            "index array length {} is not a multiple of 3",
            indices.len()
        )));
    }
    if let Some(&bad) = indices.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(MeshError::InvalidGeometry(format!(
            "index {} out of range for {} vertices",
            bad, vertex_count
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point3;
    use crate::render::primitives::geometry::create_cube;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    fn cube_mesh() -> Mesh {
        create_cube().into_mesh("cube").expect("cube tables are valid")
    }

    fn single_triangle(indices: Vec<u32>, normals: usize, colors: usize) -> Result<Mesh, MeshError> {
        Mesh::new(
            "tri",
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            indices,
            vec![0.0; normals],
            vec![1.0; colors],
        )
    }

    #[test]
    fn test_new_mesh_has_identity_pose_and_buffers() {
        let mesh = cube_mesh();
        assert_eq!(mesh.name(), "cube");
        assert_eq!(*mesh.pose(), Pose::default());
        assert_eq!(*mesh.model_matrix(), Mat4::identity());
        assert!(mesh.has_packed_buffers());
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.index_count(), 36);
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        assert!(single_triangle(vec![0, 1, 2], 9, 12).is_ok());

        // normals shorter than positions
        assert!(matches!(
            single_triangle(vec![0, 1, 2], 6, 12),
            Err(MeshError::InvalidGeometry(_))
        ));
        // three colors for three vertices
        assert!(matches!(
            single_triangle(vec![0, 1, 2], 9, 3),
            Err(MeshError::InvalidGeometry(_))
        ));
        // partial triangle
        assert!(matches!(
            single_triangle(vec![0, 1], 9, 12),
            Err(MeshError::InvalidGeometry(_))
        ));
        // index past the last vertex
        assert!(matches!(
            single_triangle(vec![0, 1, 3], 9, 12),
            Err(MeshError::InvalidGeometry(_))
        ));
        // positions not xyz triples
        assert!(matches!(
            Mesh::new("bad", vec![0.0; 4], vec![], vec![0.0; 4], vec![]),
            Err(MeshError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_scale_rotate_translate_reference_point() {
        let mut mesh = cube_mesh();
        mesh.set_scale(2.0);
        mesh.rotate(0.0, 90.0, 0.0);
        mesh.translate(1.0, 0.0, 0.0);

        // (0,0,1) scales to (0,0,2), turns +90 about Y to (2,0,0), shifts to (3,0,0)
        let p = mesh.model_matrix().transform_point(&Point3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(p, Point3::new(3.0, 0.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_rotate_is_cumulative() {
        let mut twice = cube_mesh();
        twice.rotate(10.0, 0.0, 0.0);
        twice.rotate(20.0, 0.0, 0.0);

        let mut once = cube_mesh();
        once.rotate(30.0, 0.0, 0.0);

        assert_relative_eq!(*twice.model_matrix(), *once.model_matrix(), epsilon = EPSILON);
        assert_eq!(twice.pose().rotation_x, 30.0);
    }

    #[test]
    fn test_translate_is_cumulative() {
        let mut mesh = cube_mesh();
        mesh.translate(0.25, 0.0, -1.0);
        mesh.translate(0.25, 2.0, 0.0);

        let cols = mesh.model_matrix_array();
        assert_relative_eq!(cols[12], 0.5);
        assert_relative_eq!(cols[13], 2.0);
        assert_relative_eq!(cols[14], -1.0);
    }

    #[test]
    fn test_set_scale_replaces() {
        let mut mesh = cube_mesh();
        mesh.set_scale(4.0);
        mesh.set_scale(0.5);
        assert_eq!(mesh.pose().scale, 0.5);
        assert_relative_eq!(mesh.model_matrix()[(0, 0)], 0.5);

        // Non-positive scale is accepted and simply degenerate
        mesh.set_scale(0.0);
        let linear = mesh.model_matrix().fixed_view::<3, 3>(0, 0).into_owned();
        assert!(linear.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_matrix_never_stale() {
        let mut mesh = cube_mesh();
        mesh.rotate(15.0, -30.0, 45.0);
        mesh.translate(1.0, 2.0, 3.0);
        mesh.set_scale(1.5);
        assert_eq!(*mesh.model_matrix(), mesh.pose().to_matrix());

        mesh.reset_pose();
        assert_eq!(*mesh.model_matrix(), Mat4::identity());
    }

    #[test]
    fn test_pack_buffers_idempotent() {
        let mut mesh = cube_mesh();
        let first = mesh.pack_buffers().clone();
        let second = mesh.pack_buffers().clone();
        assert_eq!(first, second);

        // Pose changes do not touch geometry buffers
        mesh.rotate(0.0, 45.0, 0.0);
        assert_eq!(mesh.packed_buffers().unwrap(), &first);
    }

    #[test]
    fn test_buffer_sizes() {
        let mesh = cube_mesh();
        assert_eq!(mesh.position_bytes().unwrap().len(), mesh.vertices().len() * 4);
        assert_eq!(mesh.index_bytes().unwrap().len(), mesh.indices().len() * 4);
        assert_eq!(mesh.color_bytes().unwrap().len(), mesh.colors().len() * 4);
    }

    #[test]
    fn test_released_buffers_report_not_initialized() {
        let mut mesh = cube_mesh();
        let before = mesh.position_bytes().unwrap().to_vec();

        mesh.release_buffers();
        assert!(!mesh.has_packed_buffers());
        assert_eq!(mesh.position_bytes(), Err(MeshError::BufferNotInitialized));
        assert_eq!(mesh.index_bytes(), Err(MeshError::BufferNotInitialized));
        assert_eq!(mesh.color_bytes(), Err(MeshError::BufferNotInitialized));

        mesh.pack_buffers();
        assert_eq!(mesh.position_bytes().unwrap(), before.as_slice());
    }
}
