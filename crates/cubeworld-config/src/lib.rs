//! Configuration for the cubeworld tools.
//!
//! Settings persist to disk as `config.ron` and can be overridden from the
//! command line via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, GridConfig, MAX_GRID_EXTENT, MeshConfig, SceneConfig, SceneKind,
};
pub use error::ConfigError;
