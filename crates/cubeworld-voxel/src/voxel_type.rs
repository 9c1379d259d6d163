//! The closed set of block types a grid cell can hold.
//!
//! Air is always discriminant 0 so that a zeroed cell buffer represents empty
//! space.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Type tag stored in every voxel cell (1 byte).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum VoxelType {
    /// Empty space. The only non-solid type.
    #[default]
    Air = 0,
    Dirt = 1,
    Stone = 2,
    Sand = 3,
    /// Dirt with a grass top; textured differently on top, sides and bottom.
    Grass = 4,
    /// Oak log; ring texture on top and bottom, bark on the sides.
    WoodOak = 5,
    Cobblestone = 6,
    OakPlank = 7,
    OakLeaf = 8,
}

/// Errors produced when decoding voxel types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoxelError {
    /// The byte does not name any [`VoxelType`].
    #[error("unknown voxel type discriminant: {0}")]
    UnknownVoxelType(u8),
}

// ---------------------------------------------------------------------------
// VoxelType
// ---------------------------------------------------------------------------

impl VoxelType {
    /// Every variant, in discriminant order.
    pub const ALL: [VoxelType; 9] = [
        Self::Air,
        Self::Dirt,
        Self::Stone,
        Self::Sand,
        Self::Grass,
        Self::WoodOak,
        Self::Cobblestone,
        Self::OakPlank,
        Self::OakLeaf,
    ];

    /// Returns `true` for [`VoxelType::Air`].
    pub fn is_air(self) -> bool {
        self == Self::Air
    }

    /// Returns `true` for every type except Air.
    pub fn is_solid(self) -> bool {
        !self.is_air()
    }

    /// Snake-case name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Self::Air => "air",
            Self::Dirt => "dirt",
            Self::Stone => "stone",
            Self::Sand => "sand",
            Self::Grass => "grass",
            Self::WoodOak => "wood_oak",
            Self::Cobblestone => "cobblestone",
            Self::OakPlank => "oak_plank",
            Self::OakLeaf => "oak_leaf",
        }
    }
}

impl TryFrom<u8> for VoxelType {
    type Error = VoxelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(VoxelError::UnknownVoxelType(value))
    }
}

impl From<VoxelType> for u8 {
    fn from(voxel: VoxelType) -> Self {
        voxel as u8
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
