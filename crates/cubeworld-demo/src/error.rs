//! Errors surfaced by the demo binary.

use cubeworld_config::ConfigError;
use cubeworld_mesh::FaceTableError;

/// Anything that stops the demo from producing a mesh.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// No `--config` was given and the platform has no config directory.
    #[error("no config directory available; pass --config")]
    NoConfigDir,

    /// Loading or validating `config.ron` failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The face table could not be loaded or does not fit the scene.
    #[error(transparent)]
    FaceTable(#[from] FaceTableError),

    /// The upload backend rejected the mesh.
    #[error(transparent)]
    Upload(#[from] UploadError),
}

/// Validation failures from [`crate::upload::StagingUpload`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// An index refers past the end of the vertex stream.
    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// The offending index value.
        index: u32,
        /// Vertices in the stream.
        vertex_count: usize,
    },

    /// The index list is not a whole number of triangles.
    #[error("{0} indices do not form whole triangles")]
    PartialTriangle(usize),
}
