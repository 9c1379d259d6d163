//! Per-voxel-type mapping from each cube face to a texture-array layer.
//!
//! The table is built once at startup (from [`FaceTextureTable::standard`] or a
//! RON file) and borrowed read-only by every compile pass. A solid voxel type
//! without an entry cannot be meshed; callers that want a recoverable error
//! instead of the compiler's panic should run
//! [`FaceTextureTable::check_covers`] first.

use std::path::{Path, PathBuf};

use cubeworld_voxel::{VoxelGrid, VoxelType};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::face_direction::FaceDirection;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Texture-array layer for each of a cube's six faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceLayers {
    /// +Y face.
    pub top: u32,
    /// −Y face.
    pub bottom: u32,
    /// +Z face.
    pub front: u32,
    /// −Z face.
    pub back: u32,
    /// −X face.
    pub left: u32,
    /// +X face.
    pub right: u32,
}

/// Errors raised while building or validating a face table.
#[derive(Debug, Error)]
pub enum FaceTableError {
    /// Failed to read a face-table file.
    #[error("failed to read face table {path}: {source}")]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The face-table file is not valid RON.
    #[error("failed to parse face table: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// Air was given faces; it is never meshed.
    #[error("air cannot have a face-table entry")]
    AirEntry,

    /// The same voxel type appears twice in one file.
    #[error("duplicate face-table entry for {0:?}")]
    DuplicateEntry(VoxelType),

    /// A solid voxel type present in the grid has no entry.
    #[error("no face-table entry for voxel type {0:?}")]
    MissingEntry(VoxelType),

    /// An entry references a layer the texture array does not have.
    #[error("{voxel:?} references texture layer {layer}, but only {layer_count} layers are loaded")]
    LayerOutOfRange {
        /// Voxel type whose entry is out of range.
        voxel: VoxelType,
        /// The offending layer index.
        layer: u32,
        /// Number of layers available.
        layer_count: usize,
    },
}

/// One entry of a face-table file.
#[derive(Debug, Deserialize)]
struct FaceTableEntry {
    voxel: VoxelType,
    faces: FaceLayers,
}

/// Maps each solid [`VoxelType`] to its [`FaceLayers`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaceTextureTable {
    entries: FxHashMap<VoxelType, FaceLayers>,
}

/// Layer names of the built-in block texture array, in layer order.
pub const STANDARD_LAYERS: [&str; 10] = [
    "dirt",
    "stone",
    "sand",
    "grass_top",
    "grass_side",
    "oak_log_top",
    "oak_log",
    "cobblestone",
    "oak_planks",
    "oak_leaves",
];

/// Ordered names of the layers in a texture array.
///
/// Layer `i` is the `i`-th image handed to the texture loader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureLayers {
    names: Vec<String>,
}

// ---------------------------------------------------------------------------
// FaceLayers
// ---------------------------------------------------------------------------

impl FaceLayers {
    /// The same layer on all six faces.
    pub const fn uniform(layer: u32) -> Self {
        Self {
            top: layer,
            bottom: layer,
            front: layer,
            back: layer,
            left: layer,
            right: layer,
        }
    }

    /// Distinct top and bottom layers, one shared layer for the four sides.
    pub const fn top_side_bottom(top: u32, side: u32, bottom: u32) -> Self {
        Self {
            top,
            bottom,
            front: side,
            back: side,
            left: side,
            right: side,
        }
    }

    /// Layer for the face pointing in `direction`.
    pub fn for_face(&self, direction: FaceDirection) -> u32 {
        match direction {
            FaceDirection::PosY => self.top,
            FaceDirection::NegY => self.bottom,
            FaceDirection::PosZ => self.front,
            FaceDirection::NegZ => self.back,
            FaceDirection::NegX => self.left,
            FaceDirection::PosX => self.right,
        }
    }

    fn max_layer(&self) -> u32 {
        [
            self.top,
            self.bottom,
            self.front,
            self.back,
            self.left,
            self.right,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// FaceTextureTable
// ---------------------------------------------------------------------------

impl FaceTextureTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table for the built-in block set, indexing into [`STANDARD_LAYERS`].
    pub fn standard() -> Self {
        let layer = |name: &str| -> u32 {
            STANDARD_LAYERS
                .iter()
                .position(|&n| n == name)
                .unwrap_or_else(|| panic!("{name} is not a standard texture layer"))
                as u32
        };

        Self::new()
            .with(VoxelType::Dirt, FaceLayers::uniform(layer("dirt")))
            .with(VoxelType::Stone, FaceLayers::uniform(layer("stone")))
            .with(VoxelType::Sand, FaceLayers::uniform(layer("sand")))
            .with(
                VoxelType::Grass,
                FaceLayers::top_side_bottom(layer("grass_top"), layer("grass_side"), layer("dirt")),
            )
            .with(
                VoxelType::WoodOak,
                FaceLayers::top_side_bottom(
                    layer("oak_log_top"),
                    layer("oak_log"),
                    layer("oak_log_top"),
                ),
            )
            .with(VoxelType::Cobblestone, FaceLayers::uniform(layer("cobblestone")))
            .with(VoxelType::OakPlank, FaceLayers::uniform(layer("oak_planks")))
            .with(VoxelType::OakLeaf, FaceLayers::uniform(layer("oak_leaves")))
    }

    /// Parses a RON list of `(voxel: <type>, faces: (top: .., ..))` entries.
    ///
    /// # Errors
    ///
    /// [`FaceTableError::Parse`] on malformed input,
    /// [`FaceTableError::AirEntry`] if Air is listed, and
    /// [`FaceTableError::DuplicateEntry`] if a type is listed twice.
    pub fn from_ron_str(source: &str) -> Result<Self, FaceTableError> {
        let entries: Vec<FaceTableEntry> = ron::from_str(source).map_err(FaceTableError::Parse)?;

        let mut table = Self::new();
        for entry in entries {
            if entry.voxel.is_air() {
                return Err(FaceTableError::AirEntry);
            }
            if table.insert(entry.voxel, entry.faces).is_some() {
                return Err(FaceTableError::DuplicateEntry(entry.voxel));
            }
        }
        Ok(table)
    }

    /// Reads and parses a face-table file. See [`from_ron_str`](Self::from_ron_str).
    pub fn load(path: &Path) -> Result<Self, FaceTableError> {
        let contents = std::fs::read_to_string(path).map_err(|source| FaceTableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_ron_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            entries = table.len(),
            "loaded face table"
        );
        Ok(table)
    }

    /// Inserts or replaces the entry for `voxel`, returning the previous one.
    pub fn insert(&mut self, voxel: VoxelType, layers: FaceLayers) -> Option<FaceLayers> {
        self.entries.insert(voxel, layers)
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, voxel: VoxelType, layers: FaceLayers) -> Self {
        self.insert(voxel, layers);
        self
    }

    /// Returns the entry for `voxel`, if any.
    pub fn get(&self, voxel: VoxelType) -> Option<&FaceLayers> {
        self.entries.get(&voxel)
    }

    /// Returns the entry for `voxel`.
    ///
    /// # Panics
    ///
    /// Panics if there is no entry.
    pub fn layers_for(&self, voxel: VoxelType) -> &FaceLayers {
        self.get(voxel)
            .unwrap_or_else(|| panic!("no face-table entry for voxel type {voxel:?}"))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in voxel-type order.
    pub fn iter(&self) -> impl Iterator<Item = (VoxelType, &FaceLayers)> {
        let mut entries: Vec<_> = self.entries.iter().map(|(&v, l)| (v, l)).collect();
        entries.sort_by_key(|(v, _)| *v);
        entries.into_iter()
    }

    /// Checks that every solid type in `grid` has an entry.
    ///
    /// Reports the lowest missing type.
    pub fn check_covers(&self, grid: &VoxelGrid) -> Result<(), FaceTableError> {
        let mut present = [false; VoxelType::ALL.len()];
        for &voxel in grid.cells() {
            present[voxel as usize] = true;
        }

        match VoxelType::ALL
            .into_iter()
            .find(|&v| v.is_solid() && present[v as usize] && self.get(v).is_none())
        {
            Some(missing) => Err(FaceTableError::MissingEntry(missing)),
            None => Ok(()),
        }
    }

    /// Checks that every referenced layer exists in `layers`.
    pub fn check_layers(&self, layers: &TextureLayers) -> Result<(), FaceTableError> {
        for (voxel, faces) in self.iter() {
            let layer = faces.max_layer();
            if layer as usize >= layers.len() {
                return Err(FaceTableError::LayerOutOfRange {
                    voxel,
                    layer,
                    layer_count: layers.len(),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TextureLayers
// ---------------------------------------------------------------------------

impl TextureLayers {
    /// Creates a layer list from names in layer order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in block texture array ([`STANDARD_LAYERS`]).
    pub fn standard() -> Self {
        Self::new(STANDARD_LAYERS)
    }

    /// Layer index of `name`.
    pub fn index_of(&self, name: &str) -> Option<u32> {
        self.names.iter().position(|n| n == name).map(|i| i as u32)
    }

    /// Name of layer `index`.
    pub fn name(&self, index: u32) -> Option<&str> {
        self.names.get(index as usize).map(String::as_str)
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if there are no layers.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
