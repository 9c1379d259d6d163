//! Voxel types and the fixed-size voxel grid the mesh compiler walks.

pub mod grid;
pub mod voxel_type;

pub use grid::{VoxelGrid, WORLD_DEPTH, WORLD_HEIGHT, WORLD_VOLUME, WORLD_WIDTH};
pub use voxel_type::{VoxelError, VoxelType};
