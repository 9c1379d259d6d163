//! CPU-side stand-in for a GPU upload backend.
//!
//! Copies the interleaved streams into owned byte buffers the way a staging
//! belt would, validating indices first, and logs the layout a renderer
//! would bind.

use cubeworld_mesh::{InterleavedMesh, MeshUpload};

use crate::error::UploadError;

/// Byte copies of one uploaded mesh plus what is needed to draw it.
#[derive(Debug)]
pub struct StagedMesh {
    /// Interleaved vertex bytes.
    pub vertex_bytes: Vec<u8>,
    /// `u32` index bytes.
    pub index_bytes: Vec<u8>,
    /// Vertex stride in bytes.
    pub stride: u64,
    /// Index count for the draw call.
    pub index_count: u32,
}

/// Collects staged meshes and reports each upload through `tracing`.
#[derive(Debug, Default)]
pub struct StagingUpload {
    staged_bytes: usize,
    uploads: usize,
}

impl StagingUpload {
    /// Total vertex plus index bytes staged so far.
    pub fn staged_bytes(&self) -> usize {
        self.staged_bytes
    }

    /// Number of successful uploads.
    pub fn uploads(&self) -> usize {
        self.uploads
    }
}

impl MeshUpload for StagingUpload {
    type Handle = StagedMesh;
    type Error = UploadError;

    fn upload(&mut self, mesh: &InterleavedMesh) -> Result<StagedMesh, UploadError> {
        let vertex_count = mesh.vertex_count();
        if mesh.index_count() % 3 != 0 {
            return Err(UploadError::PartialTriangle(mesh.index_count()));
        }
        if let Some(&index) = mesh.indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(UploadError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }

        let layout = mesh.format.wgpu_layout();
        for attribute in layout.attributes {
            tracing::trace!(
                location = attribute.shader_location,
                offset = attribute.offset,
                format = ?attribute.format,
                "vertex attribute"
            );
        }

        let staged = StagedMesh {
            vertex_bytes: mesh.vertex_bytes().to_vec(),
            index_bytes: mesh.index_bytes().to_vec(),
            stride: layout.array_stride,
            index_count: mesh.index_count() as u32,
        };
        self.staged_bytes += staged.vertex_bytes.len() + staged.index_bytes.len();
        self.uploads += 1;

        tracing::info!(
            vertices = vertex_count,
            indices = staged.index_count,
            stride = staged.stride,
            vertex_bytes = staged.vertex_bytes.len(),
            index_bytes = staged.index_bytes.len(),
            "staged mesh upload"
        );
        Ok(staged)
    }
}
