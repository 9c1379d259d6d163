//! Dense, fixed-size voxel grid.
//!
//! Cells are stored in one flat buffer, linearized y-major, then z, then x:
//! `index = y * (depth * width) + z * width + x`. The mesh compiler walks cells
//! in this same order, so the ordering defines the vertex order of every
//! compiled mesh and must not change.
//!
//! Coordinates are signed. Anything outside the grid reads as Air and writes
//! to it are dropped without error.

use crate::voxel_type::VoxelType;

/// Width of the default world in voxels (X axis).
pub const WORLD_WIDTH: usize = 16;

/// Height of the default world in voxels (Y axis).
pub const WORLD_HEIGHT: usize = 16;

/// Depth of the default world in voxels (Z axis).
pub const WORLD_DEPTH: usize = 16;

/// Total number of cells in the default world (16³).
pub const WORLD_VOLUME: usize = WORLD_WIDTH * WORLD_HEIGHT * WORLD_DEPTH;

/// Fixed-size 3D array of [`VoxelType`] values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
    width: usize,
    height: usize,
    depth: usize,
    /// Always exactly `width * height * depth` long.
    cells: Vec<VoxelType>,
}

impl VoxelGrid {
    /// Creates a grid of the given dimensions with every cell set to Air.
    ///
    /// Zero-sized dimensions are allowed and produce an empty grid.
    ///
    /// # Panics
    ///
    /// Panics if the volume overflows `usize` or a dimension cannot be
    /// addressed with `i32` coordinates.
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        let addressable = |d: usize| i32::try_from(d).is_ok();
        assert!(
            addressable(width) && addressable(height) && addressable(depth),
            "grid dimensions {width}x{height}x{depth} exceed the i32 coordinate range"
        );
        let volume = width
            .checked_mul(height)
            .and_then(|v| v.checked_mul(depth))
            .unwrap_or_else(|| panic!("grid volume {width}x{height}x{depth} overflows usize"));

        Self {
            width,
            height,
            depth,
            cells: vec![VoxelType::Air; volume],
        }
    }

    /// Extent along X.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Extent along Y.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Extent along Z.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns `(width, height, depth)`.
    pub fn dimensions(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.depth)
    }

    /// Total number of cells.
    pub fn volume(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if `(x, y, z)` has a backing cell.
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        self.linear_index(x, y, z).is_some()
    }

    /// Maps `(x, y, z)` to its position in the cell buffer, or `None` when
    /// out of bounds.
    pub fn linear_index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        let z = usize::try_from(z).ok().filter(|&z| z < self.depth)?;
        Some(y * (self.depth * self.width) + z * self.width + x)
    }

    /// Writes `voxel` into the cell at `(x, y, z)`.
    ///
    /// Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, z: i32, voxel: VoxelType) {
        match self.linear_index(x, y, z) {
            Some(index) => self.cells[index] = voxel,
            None => tracing::trace!(x, y, z, ?voxel, "ignoring out-of-bounds voxel write"),
        }
    }

    /// Resets the cell at `(x, y, z)` to Air. Same bounds policy as [`set`](Self::set).
    pub fn clear(&mut self, x: i32, y: i32, z: i32) {
        self.set(x, y, z, VoxelType::Air);
    }

    /// Returns the type at `(x, y, z)`, or Air when out of bounds.
    pub fn type_at(&self, x: i32, y: i32, z: i32) -> VoxelType {
        self.linear_index(x, y, z)
            .map_or(VoxelType::Air, |index| self.cells[index])
    }

    /// Returns `true` if the cell holds anything other than Air.
    ///
    /// Out-of-bounds coordinates are never solid.
    pub fn is_solid(&self, x: i32, y: i32, z: i32) -> bool {
        self.type_at(x, y, z).is_solid()
    }

    /// Overwrites every cell with `voxel`.
    pub fn fill(&mut self, voxel: VoxelType) {
        self.cells.fill(voxel);
    }

    /// Writes `voxel` into every cell of the inclusive box `min..=max`.
    ///
    /// The box is clipped to the grid; cells outside are ignored like any
    /// other out-of-bounds write. An inverted box writes nothing.
    pub fn fill_region(&mut self, min: (i32, i32, i32), max: (i32, i32, i32), voxel: VoxelType) {
        let clip = |lo: i32, hi: i32, extent: usize| -> Option<(i32, i32)> {
            let lo = lo.max(0);
            // `extent` fits in i32, checked in `new`.
            let hi = hi.min(extent as i32 - 1);
            (lo <= hi).then_some((lo, hi))
        };
        let (Some((x0, x1)), Some((y0, y1)), Some((z0, z1))) = (
            clip(min.0, max.0, self.width),
            clip(min.1, max.1, self.height),
            clip(min.2, max.2, self.depth),
        ) else {
            return;
        };

        for y in y0..=y1 {
            for z in z0..=z1 {
                for x in x0..=x1 {
                    self.set(x, y, z, voxel);
                }
            }
        }
    }

    /// Number of non-Air cells.
    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|v| v.is_solid()).count()
    }

    /// Iterates solid cells as `(x, y, z, type)` in linearization order.
    pub fn iter_solid(&self) -> impl Iterator<Item = (i32, i32, i32, VoxelType)> + '_ {
        let layer = self.depth * self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_solid())
            .map(move |(index, &voxel)| {
                let y = index / layer;
                let z = (index % layer) / self.width;
                let x = index % self.width;
                (x as i32, y as i32, z as i32, voxel)
            })
    }

    /// Read-only view of the cell buffer in linearization order.
    pub fn cells(&self) -> &[VoxelType] {
        &self.cells
    }
}

impl Default for VoxelGrid {
    /// The 16×16×16 world.
    fn default() -> Self {
        Self::new(WORLD_WIDTH, WORLD_HEIGHT, WORLD_DEPTH)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_air() {
        let grid = VoxelGrid::new(4, 3, 2);
        assert_eq!(grid.volume(), 24);
        assert_eq!(grid.cells().len(), 4 * 3 * 2);
        assert!(grid.cells().iter().all(|v| *v == VoxelType::Air));
        assert_eq!(grid.solid_count(), 0);
    }

    #[test]
    fn test_default_is_world_size() {
        let grid = VoxelGrid::default();
        assert_eq!(grid.dimensions(), (16, 16, 16));
        assert_eq!(grid.volume(), WORLD_VOLUME);
    }

    #[test]
    fn test_linearization_is_y_then_z_then_x() {
        let grid = VoxelGrid::new(5, 7, 3);
        assert_eq!(grid.linear_index(0, 0, 0), Some(0));
        assert_eq!(grid.linear_index(1, 0, 0), Some(1));
        assert_eq!(grid.linear_index(0, 0, 1), Some(5));
        assert_eq!(grid.linear_index(0, 1, 0), Some(15));
        assert_eq!(grid.linear_index(4, 6, 2), Some(6 * 15 + 2 * 5 + 4));
        assert_eq!(grid.linear_index(4, 6, 2), Some(grid.volume() - 1));
    }

    #[test]
    fn test_set_then_read_back() {
        let mut grid = VoxelGrid::new(8, 8, 8);
        grid.set(3, 4, 5, VoxelType::Stone);
        assert!(grid.is_solid(3, 4, 5));
        assert_eq!(grid.type_at(3, 4, 5), VoxelType::Stone);
        assert_eq!(grid.type_at(4, 3, 5), VoxelType::Air);
        assert_eq!(grid.solid_count(), 1);
    }

    #[test]
    fn test_every_in_bounds_cell_round_trips() {
        let mut grid = VoxelGrid::new(3, 4, 5);
        for y in 0..4 {
            for z in 0..5 {
                for x in 0..3 {
                    let t = VoxelType::ALL[1 + ((x + y + z) as usize % 8)];
                    grid.set(x, y, z, t);
                    assert!(grid.is_solid(x, y, z));
                    assert_eq!(grid.type_at(x, y, z), t, "mismatch at ({x}, {y}, {z})");
                    grid.clear(x, y, z);
                    assert!(!grid.is_solid(x, y, z));
                }
            }
        }
    }

    #[test]
    fn test_out_of_bounds_reads_as_air() {
        let mut grid = VoxelGrid::new(2, 2, 2);
        grid.fill(VoxelType::Dirt);
        let outside = [
            (-1, 0, 0),
            (0, -1, 0),
            (0, 0, -1),
            (2, 0, 0),
            (0, 2, 0),
            (0, 0, 2),
            (i32::MIN, i32::MIN, i32::MIN),
            (i32::MAX, i32::MAX, i32::MAX),
        ];
        for (x, y, z) in outside {
            assert!(!grid.is_solid(x, y, z), "({x}, {y}, {z}) should not be solid");
            assert_eq!(grid.type_at(x, y, z), VoxelType::Air);
            assert!(!grid.contains(x, y, z));
        }
    }

    #[test]
    fn test_out_of_bounds_write_is_ignored() {
        let mut grid = VoxelGrid::new(2, 2, 2);
        let before = grid.clone();
        grid.set(-1, 0, 0, VoxelType::Stone);
        grid.set(2, 0, 0, VoxelType::Stone);
        grid.set(0, 0, 99, VoxelType::Stone);
        grid.clear(5, 5, 5);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_fill_region_is_clipped_and_inclusive() {
        let mut grid = VoxelGrid::new(4, 4, 4);
        grid.fill_region((-5, 0, 2), (1, 0, 10), VoxelType::Sand);
        // x in 0..=1, y == 0, z in 2..=3
        assert_eq!(grid.solid_count(), 4);
        assert_eq!(grid.type_at(1, 0, 3), VoxelType::Sand);
        assert_eq!(grid.type_at(2, 0, 3), VoxelType::Air);
    }

    #[test]
    fn test_fill_region_inverted_box_writes_nothing() {
        let mut grid = VoxelGrid::new(4, 4, 4);
        grid.fill_region((3, 0, 0), (1, 3, 3), VoxelType::Stone);
        assert_eq!(grid.solid_count(), 0);
    }

    #[test]
    fn test_iter_solid_follows_linear_order() {
        let mut grid = VoxelGrid::new(3, 3, 3);
        grid.set(2, 1, 0, VoxelType::Stone);
        grid.set(0, 0, 2, VoxelType::Dirt);
        grid.set(1, 0, 0, VoxelType::Grass);
        let solids: Vec<_> = grid.iter_solid().collect();
        assert_eq!(
            solids,
            vec![
                (1, 0, 0, VoxelType::Grass),
                (0, 0, 2, VoxelType::Dirt),
                (2, 1, 0, VoxelType::Stone),
            ]
        );
    }

    #[test]
    fn test_zero_sized_grid() {
        let grid = VoxelGrid::new(0, 4, 4);
        assert_eq!(grid.volume(), 0);
        assert!(!grid.is_solid(0, 0, 0));
        assert_eq!(grid.iter_solid().count(), 0);
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn test_overflowing_volume_panics() {
        let _ = VoxelGrid::new(i32::MAX as usize, i32::MAX as usize, i32::MAX as usize);
    }
}
