//! Chart mesh data model.
//!
//! A [`ChartMesh`] is a non-indexed triangle list: every three consecutive
//! vertices form one triangle, and vertices shared by adjacent triangles are
//! duplicated rather than indexed. Each vertex carries its own color; the
//! mesh carries no normals (the host renders it with an unlit
//! vertex-colored technique).

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// A single mesh vertex: model-space position plus an RGBA8 color.
///
/// The layout is `#[repr(C)]` with no padding (16 bytes), so a vertex slice
/// can be handed to a renderer as-is via [`ChartMesh::as_bytes`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Position in model space.
    pub position: Vec3,

    /// RGBA8 vertex color.
    pub color: [u8; 4],
}

impl MeshVertex {
    /// Creates a vertex from a position and an RGBA8 color.
    #[must_use]
    pub const fn new(position: Vec3, color: [u8; 4]) -> Self {
        Self { position, color }
    }
}

/// A triangulated, per-vertex-colored surface in model space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartMesh {
    vertices: Vec<MeshVertex>,
}

impl ChartMesh {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mesh with room for `triangles` triangles.
    #[must_use]
    pub fn with_triangle_capacity(triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(triangles * 3),
        }
    }

    /// Appends one triangle, vertices in emission order.
    pub fn push_triangle(&mut self, triangle: [MeshVertex; 3]) {
        self.vertices.extend_from_slice(&triangle);
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns true if the mesh holds no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the flat vertex list.
    #[must_use]
    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    /// Iterates over triangles as slices of three vertices.
    pub fn triangles(&self) -> impl Iterator<Item = &[MeshVertex]> {
        self.vertices.chunks_exact(3)
    }

    /// Returns the three corner positions of triangle `index`, if present.
    #[must_use]
    pub fn triangle_positions(&self, index: usize) -> Option<[Vec3; 3]> {
        let base = index.checked_mul(3)?;
        let tri = self.vertices.get(base..base + 3)?;
        Some([tri[0].position, tri[1].position, tri[2].position])
    }

    /// Returns the raw vertex bytes, suitable for direct buffer upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}
