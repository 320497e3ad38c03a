//! # Primitive Shape Catalog
//!
//! Fixed geometry tables for the models the viewer can place: a cube, an
//! octahedron standing in for a sphere, a square pyramid, and a single flat
//! triangle used whenever the requested model is not one of those three.
//!
//! Every shape is centered on the origin and fits inside the unit cube
//! `[-0.5, 0.5]^3`. Triangles wind counter-clockwise seen from outside.
//!
//! ## Normals
//!
//! Normals are not computed from the faces. Every shape gets the same
//! placeholder field produced by [`placeholder_normals`]: each vertex normal
//! is `(0, 0, 1)`. Lighting that consumes these normals will shade every face
//! as if it faced the camera.

use super::mesh::{Mesh, MeshError};

/// Raw geometry arrays for one primitive, flattened for upload
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<f32>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
    /// Per-vertex colors (r, g, b, a)
    pub colors: Vec<f32>,
    /// Per-vertex normals (x, y, z), see [`placeholder_normals`]
    pub normals: Vec<f32>,
}

impl GeometryData {
    fn from_tables(vertices: &[f32], indices: &[u32], colors: &[f32]) -> Self {
        Self {
            vertices: vertices.to_vec(),
            indices: indices.to_vec(),
            colors: colors.to_vec(),
            normals: placeholder_normals(vertices.len()),
        }
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Wrap the arrays in a [`Mesh`] with an identity pose
    pub fn into_mesh(self, name: impl Into<String>) -> Result<Mesh, MeshError> {
        Mesh::new(name, self.vertices, self.indices, self.normals, self.colors)
    }
}

/// Build the placeholder normal array for `component_count` position floats
///
/// Component `i` is `1.0` when `i % 3 == 2` and `0.0` otherwise, i.e. every
/// vertex points down +Z regardless of the face it belongs to.
pub fn placeholder_normals(component_count: usize) -> Vec<f32> {
    (0..component_count)
        .map(|i| if i % 3 == 2 { 1.0 } else { 0.0 })
        .collect()
}

/// Signature shared by all primitive builders
pub type GeometryFactory = fn() -> GeometryData;

/// Which model to build, resolved once from the picker's string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// Axis-aligned cube
    Cube,
    /// Octahedron approximating a sphere
    Sphere,
    /// Square-based pyramid
    Pyramid,
    /// Anything else; rendered as the default triangle
    Custom(String),
}

/// Built-in model names and their builders
///
/// Lookups against this table are case-insensitive.
pub const BUILTIN_MODELS: [(&str, GeometryFactory); 3] = [
    ("cube", create_cube),
    ("sphere", create_sphere),
    ("pyramid", create_pyramid),
];

impl ModelKind {
    /// Resolve a model name from the UI boundary
    ///
    /// Matching ignores ASCII case only; padded names such as `" cube "` are
    /// not built-ins.
    pub fn from_name(name: &str) -> Self {
        let lowered = name.to_ascii_lowercase();
        match lowered.as_str() {
            "cube" => Self::Cube,
            "sphere" => Self::Sphere,
            "pyramid" => Self::Pyramid,
            _ => Self::Custom(name.to_string()),
        }
    }

    /// Name used as the mesh label
    pub fn display_name(&self) -> &str {
        match self {
            Self::Cube => BUILTIN_MODELS[0].0,
            Self::Sphere => BUILTIN_MODELS[1].0,
            Self::Pyramid => BUILTIN_MODELS[2].0,
            Self::Custom(name) => name,
        }
    }

    /// Builder for this model
    pub fn factory(&self) -> GeometryFactory {
        if self.is_fallback() {
            return create_triangle;
        }
        BUILTIN_MODELS
            .iter()
            .find(|(name, _)| *name == self.display_name())
            .map_or(create_triangle as GeometryFactory, |(_, factory)| *factory)
    }

    /// Whether this kind falls back to the default triangle
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Build the geometry arrays for this model
    pub fn geometry(&self) -> GeometryData {
        if let Self::Custom(name) = self {
            log::warn!("Unknown model '{}', using default triangle", name);
        }
        (self.factory())()
    }

    /// Build a mesh for this model labelled with its display name
    pub fn build_mesh(&self) -> Result<Mesh, MeshError> {
        self.geometry().into_mesh(self.display_name())
    }
}

/// Default single flat triangle in the XY plane
pub fn create_triangle() -> GeometryData {
    #[rustfmt::skip]
    let vertices = [
        -0.5, -0.5, 0.0,
         0.5, -0.5, 0.0,
         0.0,  0.5, 0.0,
    ];
    let indices = [0, 1, 2];
    #[rustfmt::skip]
    let colors = [
        1.0, 0.0, 0.0, 1.0,
        0.0, 1.0, 0.0, 1.0,
        0.0, 0.0, 1.0, 1.0,
    ];
    GeometryData::from_tables(&vertices, &indices, &colors)
}

/// Cube with its eight shared corners at +/-0.5
///
/// Corner colors follow their position (RGB cube), so `(-0.5, -0.5, 0.5)` is
/// blue and `(0.5, 0.5, 0.5)` is white.
pub fn create_cube() -> GeometryData {
    #[rustfmt::skip]
    let vertices = [
        -0.5, -0.5,  0.5, // 0 front bottom left
         0.5, -0.5,  0.5, // 1 front bottom right
         0.5,  0.5,  0.5, // 2 front top right
        -0.5,  0.5,  0.5, // 3 front top left
        -0.5, -0.5, -0.5, // 4 back bottom left
         0.5, -0.5, -0.5, // 5 back bottom right
         0.5,  0.5, -0.5, // 6 back top right
        -0.5,  0.5, -0.5, // 7 back top left
    ];
    #[rustfmt::skip]
    let indices = [
        0, 1, 2, 2, 3, 0, // front
        1, 5, 6, 6, 2, 1, // right
        5, 4, 7, 7, 6, 5, // back
        4, 0, 3, 3, 7, 4, // left
        3, 2, 6, 6, 7, 3, // top
        4, 5, 1, 1, 0, 4, // bottom
    ];
    #[rustfmt::skip]
    let colors = [
        0.0, 0.0, 1.0, 1.0,
        1.0, 0.0, 1.0, 1.0,
        1.0, 1.0, 1.0, 1.0,
        0.0, 1.0, 1.0, 1.0,
        0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 1.0,
        1.0, 1.0, 0.0, 1.0,
        0.0, 1.0, 0.0, 1.0,
    ];
    GeometryData::from_tables(&vertices, &indices, &colors)
}

/// Octahedron of radius 0.5 standing in for a sphere
pub fn create_sphere() -> GeometryData {
    #[rustfmt::skip]
    let vertices = [
         0.0,  0.5,  0.0, // 0 north pole
         0.0, -0.5,  0.0, // 1 south pole
         0.5,  0.0,  0.0, // 2 +X
         0.0,  0.0,  0.5, // 3 +Z
        -0.5,  0.0,  0.0, // 4 -X
         0.0,  0.0, -0.5, // 5 -Z
    ];
    #[rustfmt::skip]
    let indices = [
        // upper half
        2, 5, 0,  5, 4, 0,  4, 3, 0,  3, 2, 0,
        // lower half
        5, 2, 1,  4, 5, 1,  3, 4, 1,  2, 3, 1,
    ];
    #[rustfmt::skip]
    let colors = [
        1.0, 1.0, 1.0, 1.0,
        0.2, 0.2, 0.2, 1.0,
        1.0, 0.0, 0.0, 1.0,
        0.0, 1.0, 0.0, 1.0,
        0.0, 0.0, 1.0, 1.0,
        1.0, 1.0, 0.0, 1.0,
    ];
    GeometryData::from_tables(&vertices, &indices, &colors)
}

/// Square pyramid: base at y = -0.5, apex at y = 0.5
pub fn create_pyramid() -> GeometryData {
    #[rustfmt::skip]
    let vertices = [
        -0.5, -0.5,  0.5, // 0 base front left
         0.5, -0.5,  0.5, // 1 base front right
         0.5, -0.5, -0.5, // 2 base back right
        -0.5, -0.5, -0.5, // 3 base back left
         0.0,  0.5,  0.0, // 4 apex
    ];
    #[rustfmt::skip]
    let indices = [
        0, 1, 4, // front
        1, 2, 4, // right
        2, 3, 4, // back
        3, 0, 4, // left
        3, 2, 1,  1, 0, 3, // base
    ];
    #[rustfmt::skip]
    let colors = [
        1.0, 0.0, 0.0, 1.0,
        0.0, 1.0, 0.0, 1.0,
        0.0, 0.0, 1.0, 1.0,
        1.0, 1.0, 0.0, 1.0,
        1.0, 1.0, 1.0, 1.0,
    ];
    GeometryData::from_tables(&vertices, &indices, &colors)
}
