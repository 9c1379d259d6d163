//! Whole-grid mesh compilation.
//!
//! Every solid voxel becomes a unit cube with all six faces, hidden or not.
//! Cells are visited y, then z, then x, matching the grid's linearization, so
//! the vertex order of the output is fixed for a given grid.

use cubeworld_voxel::VoxelGrid;
use glam::Vec3;

use crate::cube::{CUBE_VERTEX_COUNT, append_cube};
use crate::face_table::FaceTextureTable;
use crate::mesh_buffer::MeshBuffer;

/// Half-size of a voxel cube (voxels are unit cubes).
const HALF_SIZE: f32 = 0.5;

/// Compiles the whole grid into a fresh [`MeshBuffer`].
///
/// # Panics
///
/// Panics if a solid voxel type in `grid` has no entry in `faces`. Use
/// [`FaceTextureTable::check_covers`] beforehand to get an error instead.
pub fn compile(grid: &VoxelGrid, faces: &FaceTextureTable) -> MeshBuffer {
    let mut mesh = MeshBuffer::new();
    compile_into(grid, faces, &mut mesh);
    mesh
}

/// Clears `mesh` and repopulates it from `grid`, reusing its allocations.
///
/// Produces the same contents as [`compile`].
pub fn compile_into(grid: &VoxelGrid, faces: &FaceTextureTable, mesh: &mut MeshBuffer) {
    let _span = tracing::debug_span!("compile", dims = ?grid.dimensions()).entered();
    mesh.clear();
    compile_layers(grid, faces, 0..grid.height(), mesh);
    tracing::debug!(
        vertices = mesh.vertex_count(),
        indices = mesh.index_count(),
        "compiled voxel mesh"
    );
}

/// Compiles the grid on up to `shards` worker threads.
///
/// The y range is split into contiguous slabs, each slab is meshed into its
/// own buffer, and the buffers are merged in ascending slab order with their
/// indices rebased. The result is identical to [`compile`].
///
/// Falls back to [`compile`] when `shards <= 1` or the grid has fewer than two
/// layers.
///
/// # Panics
///
/// Same as [`compile`]. If any worker panics, this call panics once all
/// workers have stopped.
pub fn compile_sharded(grid: &VoxelGrid, faces: &FaceTextureTable, shards: usize) -> MeshBuffer {
    let height = grid.height();
    let shards = shards.min(height);
    if shards <= 1 {
        return compile(grid, faces);
    }

    let _span = tracing::debug_span!("compile_sharded", shards, dims = ?grid.dimensions()).entered();
    let slab = height.div_ceil(shards);
    let (result_tx, result_rx) = crossbeam_channel::unbounded::<(usize, MeshBuffer)>();

    std::thread::scope(|scope| {
        for (shard, start) in (0..height).step_by(slab).enumerate() {
            let tx = result_tx.clone();
            let end = (start + slab).min(height);
            scope.spawn(move || {
                let mut local = MeshBuffer::new();
                compile_layers(grid, faces, start..end, &mut local);
                // The receiver outlives the scope, so this cannot fail.
                let _ = tx.send((shard, local));
            });
        }
    });
    drop(result_tx);

    let mut parts: Vec<(usize, MeshBuffer)> = result_rx.into_iter().collect();
    parts.sort_by_key(|(shard, _)| *shard);

    let vertex_total = parts.iter().map(|(_, m)| m.vertex_count()).sum::<usize>();
    let mut mesh = MeshBuffer::with_capacity_for_cubes(vertex_total / CUBE_VERTEX_COUNT);
    for (_, part) in &parts {
        mesh.append_rebased(part);
    }

    tracing::debug!(
        parts = parts.len(),
        vertices = mesh.vertex_count(),
        indices = mesh.index_count(),
        "merged sharded voxel mesh"
    );
    mesh
}

/// Appends cubes for every solid voxel with `y` in `ys`.
fn compile_layers(
    grid: &VoxelGrid,
    faces: &FaceTextureTable,
    ys: std::ops::Range<usize>,
    mesh: &mut MeshBuffer,
) {
    // Dimensions fit in i32; `VoxelGrid::new` enforces it.
    for y in ys {
        for z in 0..grid.depth() {
            for x in 0..grid.width() {
                let (x, y, z) = (x as i32, y as i32, z as i32);
                if !grid.is_solid(x, y, z) {
                    continue;
                }
                let center = Vec3::new(x as f32, y as f32, z as f32) + Vec3::splat(HALF_SIZE);
                let layers = faces.layers_for(grid.type_at(x, y, z));
                append_cube(mesh, center, HALF_SIZE, layers);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
