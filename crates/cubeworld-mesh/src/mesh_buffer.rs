//! Growable mesh output of a compile pass.

use crate::cube::{CUBE_INDEX_COUNT, CUBE_VERTEX_COUNT};
use crate::vertex_format::{InterleavedMesh, VertexFormat};

/// Parallel per-vertex attribute arrays plus a triangle index list.
///
/// `positions`, `normals`, `tex_coords` and `layers` always have the same
/// length, and every index is smaller than that length. Fields are read-only
/// outside the crate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffer {
    pub(crate) positions: Vec<[f32; 3]>,
    pub(crate) normals: Vec<[f32; 3]>,
    pub(crate) tex_coords: Vec<[f32; 2]>,
    pub(crate) layers: Vec<f32>,
    pub(crate) indices: Vec<u32>,
}

impl MeshBuffer {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mesh with room for `cubes` unit cubes.
    pub fn with_capacity_for_cubes(cubes: usize) -> Self {
        let vertices = cubes * CUBE_VERTEX_COUNT;
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            tex_coords: Vec::with_capacity(vertices),
            layers: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(cubes * CUBE_INDEX_COUNT),
        }
    }

    /// Removes all geometry, keeping the allocations.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.tex_coords.clear();
        self.layers.clear();
        self.indices.clear();
    }

    /// Vertex positions.
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Vertex normals, one per position.
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// Texture coordinates, one per position.
    pub fn tex_coords(&self) -> &[[f32; 2]] {
        &self.tex_coords
    }

    /// Texture-array layer of each vertex, one per position.
    pub fn layers(&self) -> &[f32] {
        &self.layers
    }

    /// Triangle list indices into the vertex arrays.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of indices; this is the count handed to a draw call.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns `true` if the mesh has no vertices.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Appends `other`, shifting its indices past this mesh's vertices.
    ///
    /// Used to merge independently built meshes into one buffer; merging in a
    /// fixed order gives a fixed result.
    pub fn append_rebased(&mut self, other: &MeshBuffer) {
        let base = self.vertex_count() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.tex_coords.extend_from_slice(&other.tex_coords);
        self.layers.extend_from_slice(&other.layers);
        self.indices
            .extend(other.indices.iter().map(|&index| base + index));
    }

    /// Packs the vertex arrays into one interleaved stream in `format`.
    ///
    /// The index list is copied unchanged.
    pub fn interleave(&self, format: VertexFormat) -> InterleavedMesh {
        debug_assert!(self.is_consistent());

        let mut vertices = Vec::with_capacity(self.vertex_count() * format.floats_per_vertex());
        for i in 0..self.vertex_count() {
            vertices.extend_from_slice(&self.positions[i]);
            vertices.extend_from_slice(&self.normals[i]);
            vertices.extend_from_slice(&self.tex_coords[i]);
            if format == VertexFormat::PositionNormalUvLayer {
                vertices.push(self.layers[i]);
            }
        }

        InterleavedMesh {
            format,
            vertices,
            indices: self.indices.clone(),
        }
    }

    /// Checks the parallel-array and index-range invariants.
    pub fn is_consistent(&self) -> bool {
        let n = self.positions.len();
        self.normals.len() == n
            && self.tex_coords.len() == n
            && self.layers.len() == n
            && self.indices.iter().all(|&index| (index as usize) < n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::append_cube;
    use crate::face_table::FaceLayers;
    use glam::Vec3;

    fn one_cube(center: Vec3, layer: u32) -> MeshBuffer {
        let mut mesh = MeshBuffer::new();
        append_cube(&mut mesh, center, 0.5, &FaceLayers::uniform(layer));
        mesh
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = MeshBuffer::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.index_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.is_consistent());
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut mesh = one_cube(Vec3::splat(0.5), 0);
        let capacity = mesh.positions.capacity();
        mesh.clear();
        assert!(mesh.is_empty());
        assert_eq!(mesh.index_count(), 0);
        assert_eq!(mesh.positions.capacity(), capacity);
    }

    #[test]
    fn test_with_capacity_for_cubes() {
        let mesh = MeshBuffer::with_capacity_for_cubes(3);
        assert!(mesh.positions.capacity() >= 72);
        assert!(mesh.indices.capacity() >= 108);
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_append_rebased_offsets_indices() {
        let mut mesh = one_cube(Vec3::splat(0.5), 0);
        let second = one_cube(Vec3::splat(1.5), 1);
        mesh.append_rebased(&second);

        assert_eq!(mesh.vertex_count(), 48);
        assert_eq!(mesh.index_count(), 72);
        assert!(mesh.is_consistent());
        assert!(mesh.indices()[36..].iter().all(|&i| i >= 24));
        assert_eq!(&mesh.layers()[24..], second.layers());
    }

    #[test]
    fn test_interleave_without_layer() {
        let mesh = one_cube(Vec3::splat(0.5), 7);
        let interleaved = mesh.interleave(VertexFormat::PositionNormalUv);
        assert_eq!(interleaved.vertices.len(), 24 * 8);
        assert_eq!(interleaved.indices, mesh.indices());

        let first = &interleaved.vertices[0..8];
        assert_eq!(&first[0..3], &mesh.positions()[0]);
        assert_eq!(&first[3..6], &mesh.normals()[0]);
        assert_eq!(&first[6..8], &mesh.tex_coords()[0]);
    }

    #[test]
    fn test_interleave_with_layer() {
        let mesh = one_cube(Vec3::splat(0.5), 7);
        let interleaved = mesh.interleave(VertexFormat::PositionNormalUvLayer);
        assert_eq!(interleaved.vertices.len(), 24 * 9);
        for (i, vertex) in interleaved.vertices.chunks_exact(9).enumerate() {
            assert_eq!(&vertex[0..3], &mesh.positions()[i]);
            assert_eq!(&vertex[3..6], &mesh.normals()[i]);
            assert_eq!(&vertex[6..8], &mesh.tex_coords()[i]);
            assert_eq!(vertex[8], 7.0);
        }
    }
}
