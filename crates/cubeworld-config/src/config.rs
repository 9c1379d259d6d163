//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest accepted grid extent along any axis.
pub const MAX_GRID_EXTENT: usize = 256;

/// Name of the config file inside the config directory.
const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Voxel grid dimensions.
    pub grid: GridConfig,
    /// Mesh compilation and vertex packing.
    pub mesh: MeshConfig,
    /// Which scene the demo builds.
    pub scene: SceneConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Voxel grid dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    /// Extent along X.
    pub width: usize,
    /// Extent along Y.
    pub height: usize,
    /// Extent along Z.
    pub depth: usize,
}

/// Mesh compilation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MeshConfig {
    /// Carry the texture-array layer as a fourth vertex attribute.
    pub carry_layer: bool,
    /// Worker threads for compilation (1 = single-threaded).
    pub shards: usize,
    /// RON face-table file. `None` uses the built-in table.
    pub face_table: Option<PathBuf>,
}

/// Scene selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Scene to populate the grid with.
    pub kind: SceneKind,
}

/// Built-in scenes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// A handful of blocks around the origin.
    Starter,
    /// Layered ground with a tree and a small build.
    #[default]
    Terrain,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter (e.g. "debug", "info,cubeworld_mesh=trace").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            depth: 16,
        }
    }
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            carry_layer: true,
            shards: 1,
            face_table: None,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Validate ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    ///
    /// The loaded config is validated before it is returned.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
                    path: config_path.clone(),
                    source,
                })?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;
            config.validate()?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path,
            source,
        })
    }

    /// Checks ranges that the type system cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let extents = [
            ("grid.width", self.grid.width),
            ("grid.height", self.grid.height),
            ("grid.depth", self.grid.depth),
        ];
        for (field, extent) in extents {
            if extent == 0 || extent > MAX_GRID_EXTENT {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{extent} is outside 1..={MAX_GRID_EXTENT}"),
                });
            }
        }
        if self.mesh.shards == 0 {
            return Err(ConfigError::Invalid {
                field: "mesh.shards",
                reason: "at least one shard is required".to_string(),
            });
        }
        Ok(())
    }
}
