//! Seam between the mesh compiler and whatever owns GPU buffers.
//!
//! The renderer implements [`MeshUpload`] to turn an [`InterleavedMesh`] into
//! device buffers. Buffer creation, binding and deletion stay on the
//! renderer's side of this trait.

use crate::vertex_format::InterleavedMesh;

/// Consumes CPU mesh buffers and produces renderer-owned GPU resources.
pub trait MeshUpload {
    /// Handle to the uploaded buffers, typically a vertex/index buffer pair.
    type Handle;
    /// Failure reported by the backend.
    type Error;

    /// Uploads `mesh`. The mesh is only read.
    fn upload(&mut self, mesh: &InterleavedMesh) -> Result<Self::Handle, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex_format::{VertexAttributeDesc, VertexFormat};

    /// Records what a GPU backend would have been asked to create.
    #[derive(Default)]
    struct RecordingUpload {
        uploads: Vec<(usize, u64, Vec<VertexAttributeDesc>, usize)>,
    }

    impl MeshUpload for RecordingUpload {
        type Handle = usize;
        type Error = String;

        fn upload(&mut self, mesh: &InterleavedMesh) -> Result<usize, String> {
            if mesh.index_count() == 0 {
                return Err("nothing to draw".to_string());
            }
            self.uploads.push((
                mesh.vertex_bytes().len(),
                mesh.stride(),
                mesh.attributes().to_vec(),
                mesh.index_count(),
            ));
            Ok(self.uploads.len() - 1)
        }
    }

    #[test]
    fn test_upload_receives_layout_and_counts() {
        let mesh = InterleavedMesh {
            format: VertexFormat::PositionNormalUv,
            vertices: vec![0.0; 8 * 3],
            indices: vec![0, 1, 2],
        };
        let mut backend = RecordingUpload::default();
        let handle = backend.upload(&mesh).unwrap();

        assert_eq!(handle, 0);
        let (bytes, stride, attributes, index_count) = &backend.uploads[0];
        assert_eq!(*bytes, 3 * 32);
        assert_eq!(*stride, 32);
        assert_eq!(attributes.len(), 3);
        assert_eq!(*index_count, 3);
    }

    #[test]
    fn test_upload_error_is_passed_through() {
        let mesh = InterleavedMesh {
            format: VertexFormat::PositionNormalUvLayer,
            vertices: Vec::new(),
            indices: Vec::new(),
        };
        let mut backend = RecordingUpload::default();
        assert_eq!(backend.upload(&mesh), Err("nothing to draw".to_string()));
        assert!(backend.uploads.is_empty());
    }
}
