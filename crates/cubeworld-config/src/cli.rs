//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;
use crate::config::SceneKind;

/// Command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "cubeworld", about = "Build a voxel scene and compile it to a mesh")]
pub struct CliArgs {
    /// Grid width (X).
    #[arg(long)]
    pub width: Option<usize>,

    /// Grid height (Y).
    #[arg(long)]
    pub height: Option<usize>,

    /// Grid depth (Z).
    #[arg(long)]
    pub depth: Option<usize>,

    /// Carry the texture layer as a vertex attribute.
    #[arg(long)]
    pub carry_layer: Option<bool>,

    /// Number of worker threads used to compile the mesh.
    #[arg(long)]
    pub shards: Option<usize>,

    /// RON face-table file to use instead of the built-in table.
    #[arg(long)]
    pub face_table: Option<PathBuf>,

    /// Scene to build.
    #[arg(long, value_enum)]
    pub scene: Option<SceneKind>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    ///
    /// Call [`Config::validate`] afterwards; overrides are not range-checked.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.grid.width = w;
        }
        if let Some(h) = args.height {
            self.grid.height = h;
        }
        if let Some(d) = args.depth {
            self.grid.depth = d;
        }
        if let Some(carry) = args.carry_layer {
            self.mesh.carry_layer = carry;
        }
        if let Some(shards) = args.shards {
            self.mesh.shards = shards;
        }
        if let Some(ref path) = args.face_table {
            self.mesh.face_table = Some(path.clone());
        }
        if let Some(scene) = args.scene {
            self.scene.kind = scene;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs::parse_from([
            "cubeworld",
            "--width",
            "32",
            "--shards",
            "4",
            "--scene",
            "starter",
            "--carry-layer",
            "false",
        ]);
        config.apply_cli_overrides(&args);
        assert_eq!(config.grid.width, 32);
        assert_eq!(config.mesh.shards, 4);
        assert_eq!(config.scene.kind, SceneKind::Starter);
        assert!(!config.mesh.carry_layer);
        // Non-overridden fields retain defaults
        assert_eq!(config.grid.height, 16);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        let args = CliArgs::parse_from(["cubeworld"]);
        config.apply_cli_overrides(&args);
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_face_table_and_log_level() {
        let mut config = Config::default();
        let args = CliArgs::parse_from([
            "cubeworld",
            "--face-table",
            "assets/faces.ron",
            "--log-level",
            "debug",
        ]);
        config.apply_cli_overrides(&args);
        assert_eq!(config.mesh.face_table, Some(PathBuf::from("assets/faces.ron")));
        assert_eq!(config.debug.log_level, "debug");
    }
}
