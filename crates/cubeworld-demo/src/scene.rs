//! Built-in scenes for the demo grid.
//!
//! Layouts are anchored at the origin and sized for the default 16³ grid.
//! Smaller grids clip them; larger grids leave the extra space empty above
//! the ground.

use cubeworld_config::SceneKind;
use cubeworld_voxel::{VoxelGrid, VoxelType};

/// Top of the terrain ground (the grass layer).
const GROUND_Y: i32 = 4;

/// Populate `grid` with the chosen scene. Existing contents are cleared.
pub fn build(grid: &mut VoxelGrid, kind: SceneKind) {
    grid.fill(VoxelType::Air);
    match kind {
        SceneKind::Starter => starter(grid),
        SceneKind::Terrain => terrain(grid),
    }
    tracing::info!(scene = ?kind, solid = grid.solid_count(), "scene built");
}

/// Five blocks around the origin. The block at x = -1 lies outside the grid
/// and is dropped.
fn starter(grid: &mut VoxelGrid) {
    grid.set(0, 0, 0, VoxelType::Grass);
    grid.set(1, 0, 0, VoxelType::Dirt);
    grid.set(0, 1, 0, VoxelType::Stone);
    grid.set(-1, 0, 0, VoxelType::Cobblestone);
    grid.set(0, 0, 1, VoxelType::Sand);
}

/// Layered ground with a sand patch, a cobblestone pad with plank posts, and
/// an oak tree.
fn terrain(grid: &mut VoxelGrid) {
    let max_x = grid.width() as i32 - 1;
    let max_z = grid.depth() as i32 - 1;

    grid.fill_region((0, 0, 0), (max_x, 1, max_z), VoxelType::Stone);
    grid.fill_region((0, 2, 0), (max_x, GROUND_Y - 1, max_z), VoxelType::Dirt);
    grid.fill_region((0, GROUND_Y, 0), (max_x, GROUND_Y, max_z), VoxelType::Grass);
    grid.fill_region((1, GROUND_Y, 1), (4, GROUND_Y, 3), VoxelType::Sand);

    let pad_y = GROUND_Y + 1;
    grid.fill_region((9, pad_y, 2), (13, pad_y, 6), VoxelType::Cobblestone);
    for (x, z) in [(9, 2), (13, 2), (9, 6), (13, 6)] {
        grid.fill_region((x, pad_y + 1, z), (x, pad_y + 2, z), VoxelType::OakPlank);
    }

    oak_tree(grid, 4, GROUND_Y + 1, 11);
}

/// Trunk of four logs from `base_y` with a 5x3x5 canopy and a cap.
fn oak_tree(grid: &mut VoxelGrid, x: i32, base_y: i32, z: i32) {
    let top_y = base_y + 3;
    grid.fill_region((x - 2, top_y - 1, z - 2), (x + 2, top_y + 1, z + 2), VoxelType::OakLeaf);
    grid.set(x, top_y + 2, z, VoxelType::OakLeaf);
    grid.fill_region((x, base_y, z), (x, top_y, z), VoxelType::WoodOak);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_drops_out_of_bounds_block() {
        let mut grid = VoxelGrid::default();
        build(&mut grid, SceneKind::Starter);
        assert_eq!(grid.solid_count(), 4);
        assert_eq!(grid.type_at(0, 0, 0), VoxelType::Grass);
        assert_eq!(grid.type_at(0, 0, 1), VoxelType::Sand);
        assert_eq!(grid.type_at(-1, 0, 0), VoxelType::Air);
    }

    #[test]
    fn test_terrain_layers() {
        let mut grid = VoxelGrid::default();
        build(&mut grid, SceneKind::Terrain);
        assert_eq!(grid.type_at(7, 0, 7), VoxelType::Stone);
        assert_eq!(grid.type_at(7, 3, 7), VoxelType::Dirt);
        assert_eq!(grid.type_at(7, GROUND_Y, 7), VoxelType::Grass);
        assert_eq!(grid.type_at(2, GROUND_Y, 2), VoxelType::Sand);
        assert_eq!(grid.type_at(11, GROUND_Y + 1, 4), VoxelType::Cobblestone);
        assert_eq!(grid.type_at(9, GROUND_Y + 3, 2), VoxelType::OakPlank);
    }

    #[test]
    fn test_tree_trunk_inside_canopy() {
        let mut grid = VoxelGrid::default();
        build(&mut grid, SceneKind::Terrain);
        for y in GROUND_Y + 1..=GROUND_Y + 4 {
            assert_eq!(grid.type_at(4, y, 11), VoxelType::WoodOak);
        }
        assert_eq!(grid.type_at(2, GROUND_Y + 4, 13), VoxelType::OakLeaf);
        assert_eq!(grid.type_at(4, GROUND_Y + 6, 11), VoxelType::OakLeaf);
        assert_eq!(grid.type_at(4, GROUND_Y + 7, 11), VoxelType::Air);
    }

    #[test]
    fn test_terrain_uses_every_solid_type() {
        let mut grid = VoxelGrid::default();
        build(&mut grid, SceneKind::Terrain);
        for voxel in VoxelType::ALL.into_iter().filter(|v| v.is_solid()) {
            assert!(
                grid.cells().contains(&voxel),
                "terrain is missing {voxel:?}"
            );
        }
    }

    #[test]
    fn test_terrain_clips_to_small_grid() {
        let mut grid = VoxelGrid::new(3, 2, 3);
        build(&mut grid, SceneKind::Terrain);
        assert_eq!(grid.solid_count(), 3 * 2 * 3);
        assert!(grid.cells().iter().all(|&v| v == VoxelType::Stone));
    }

    #[test]
    fn test_rebuild_clears_previous_scene() {
        let mut grid = VoxelGrid::default();
        build(&mut grid, SceneKind::Terrain);
        build(&mut grid, SceneKind::Starter);
        assert_eq!(grid.solid_count(), 4);
    }
}
