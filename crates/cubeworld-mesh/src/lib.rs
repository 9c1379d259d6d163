//! Voxel-to-mesh compiler: expands every solid voxel of a [`VoxelGrid`] into a
//! textured unit cube and packs the result into GPU-ready buffers.
//!
//! [`VoxelGrid`]: cubeworld_voxel::VoxelGrid

pub mod compiler;
pub mod cube;
pub mod face_direction;
pub mod face_table;
pub mod mesh_buffer;
pub mod upload;
pub mod vertex_format;

pub use compiler::{compile, compile_into, compile_sharded};
pub use cube::{CUBE_INDEX_COUNT, CUBE_VERTEX_COUNT, append_cube};
pub use face_direction::FaceDirection;
pub use face_table::{FaceLayers, FaceTableError, FaceTextureTable, STANDARD_LAYERS, TextureLayers};
pub use mesh_buffer::MeshBuffer;
pub use upload::MeshUpload;
pub use vertex_format::{
    InterleavedMesh, POSITION_NORMAL_UV_ATTRIBUTES, POSITION_NORMAL_UV_LAYER_ATTRIBUTES,
    VertexAttributeDesc, VertexFormat,
};
