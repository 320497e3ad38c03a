//! Upload-ready byte buffers
//!
//! Floats are packed as 4-byte IEEE-754 and indices as 4-byte unsigned
//! integers, both in the platform's native byte order, which is what a GL
//! client-side buffer upload expects.

use crate::foundation::math::{Mat4, Mat4Ext};

/// Native-endian byte copies of a mesh's position, index and color arrays
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackedBuffers {
    positions: Vec<u8>,
    indices: Vec<u8>,
    colors: Vec<u8>,
}

impl PackedBuffers {
    /// Pack the three arrays; the output depends only on the input values
    pub fn pack(vertices: &[f32], indices: &[u32], colors: &[f32]) -> Self {
        Self {
            positions: bytemuck::cast_slice(vertices).to_vec(),
            indices: bytemuck::cast_slice(indices).to_vec(),
            colors: bytemuck::cast_slice(colors).to_vec(),
        }
    }

    /// Position bytes, 12 per vertex
    pub fn positions(&self) -> &[u8] {
        &self.positions
    }

    /// Index bytes, 4 per index
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Color bytes, 16 per vertex
    pub fn colors(&self) -> &[u8] {
        &self.colors
    }

    /// Total bytes held across all three buffers
    pub fn total_bytes(&self) -> usize {
        self.positions.len() + self.indices.len() + self.colors.len()
    }
}

/// Pack a model matrix as 64 native-endian bytes in column-major order
pub fn pack_matrix(matrix: &Mat4) -> Vec<u8> {
    let columns = matrix.to_column_major();
    bytemuck::cast_slice(&columns).to_vec()
}
