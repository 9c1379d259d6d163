//! Demo binary: builds a voxel scene, compiles it to a cube mesh and stages
//! the interleaved buffers for upload.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p cubeworld-demo -- --scene starter --shards 4`.

mod error;
mod scene;
mod upload;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use cubeworld_config::{CliArgs, Config};
use cubeworld_mesh::{
    FaceTextureTable, MeshUpload, TextureLayers, VertexFormat, compile, compile_sharded,
};
use cubeworld_voxel::VoxelGrid;
use tracing::info;

use crate::error::DemoError;
use crate::upload::{StagedMesh, StagingUpload};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = match resolve_config_dir(&args) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    if let Some(log_file) =
        cubeworld_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config))
    {
        info!("Writing JSON log to {}", log_file.display());
    }

    match run(&config) {
        Ok(staged) => {
            info!(
                index_count = staged.index_count,
                stride = staged.stride,
                "mesh ready to draw"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// `--config` if given, otherwise the platform config directory.
fn resolve_config_dir(args: &CliArgs) -> Result<PathBuf, DemoError> {
    match &args.config {
        Some(dir) => Ok(dir.clone()),
        None => dirs::config_dir()
            .map(|dir| dir.join("cubeworld"))
            .ok_or(DemoError::NoConfigDir),
    }
}

/// Build the configured scene, compile it and stage the result.
fn run(config: &Config) -> Result<StagedMesh, DemoError> {
    config.validate()?;

    let mut grid = VoxelGrid::new(config.grid.width, config.grid.height, config.grid.depth);
    scene::build(&mut grid, config.scene.kind);

    let faces = match &config.mesh.face_table {
        Some(path) => FaceTextureTable::load(path)?,
        None => FaceTextureTable::standard(),
    };
    faces.check_layers(&TextureLayers::standard())?;
    faces.check_covers(&grid)?;

    let start = Instant::now();
    let mesh = if config.mesh.shards > 1 {
        compile_sharded(&grid, &faces, config.mesh.shards)
    } else {
        compile(&grid, &faces)
    };
    info!(
        cubes = grid.solid_count(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        shards = config.mesh.shards,
        elapsed_us = start.elapsed().as_micros() as u64,
        "compiled grid"
    );

    let format = if config.mesh.carry_layer {
        VertexFormat::PositionNormalUvLayer
    } else {
        VertexFormat::PositionNormalUv
    };
    let packed = mesh.interleave(format);

    let mut backend = StagingUpload::default();
    Ok(backend.upload(&packed)?)
}
