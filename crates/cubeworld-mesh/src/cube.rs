//! Emission of a single textured cube into a [`MeshBuffer`].

use glam::Vec3;

use crate::face_direction::FaceDirection;
use crate::face_table::FaceLayers;
use crate::mesh_buffer::MeshBuffer;

/// Vertices emitted per cube (4 per face, none shared between faces).
pub const CUBE_VERTEX_COUNT: usize = 24;

/// Indices emitted per cube (2 triangles per face).
pub const CUBE_INDEX_COUNT: usize = 36;

/// Texture coordinates of a face's corners, in corner order.
const FACE_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Fan triangulation of a quad from corner 0.
const FACE_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Appends an axis-aligned cube centered at `center` with the given half-size.
///
/// Faces are emitted in [`FaceDirection::EMISSION_ORDER`], each carrying the
/// layer `layers` assigns to it. Indices are offset by the mesh's vertex count
/// before the call, so they stay valid in the combined buffer.
pub fn append_cube(mesh: &mut MeshBuffer, center: Vec3, half_size: f32, layers: &FaceLayers) {
    let base = mesh.vertex_count() as u32;

    for (face_index, direction) in FaceDirection::EMISSION_ORDER.into_iter().enumerate() {
        let normal = direction.normal();
        let layer = layers.for_face(direction) as f32;

        for (corner, uv) in direction.corners().into_iter().zip(FACE_UVS) {
            let position = center + Vec3::from(corner) * half_size;
            mesh.positions.push(position.to_array());
            mesh.normals.push(normal);
            mesh.tex_coords.push(uv);
            mesh.layers.push(layer);
        }

        let face_base = base + face_index as u32 * 4;
        mesh.indices
            .extend(FACE_INDICES.iter().map(|&local| face_base + local));
    }
}
