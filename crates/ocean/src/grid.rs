//! Fixed-resolution density grid for pressure-style repulsion.
//!
//! A 16x16x16 occupancy histogram rebuilt from particle positions every
//! frame. Cheap stand-in for real neighbor lists: a particle only needs to
//! know how crowded its own cell is relative to the six axis neighbors.

use glam::Vec3;

/// Cells per axis.
pub const GRID_RES: usize = 16;
/// Total cell count.
pub const GRID_CELLS: usize = GRID_RES * GRID_RES * GRID_RES;

/// Occupancy reported for cells outside the grid. Treating the void beyond
/// the boundary as maximally dense pushes crowded particles back toward the
/// interior instead of letting them pile up against the walls.
pub const OUT_OF_RANGE_DENSITY: u32 = 999;

/// Cell occupancy above which repulsion kicks in.
pub const CROWDING_THRESHOLD: u32 = 5;

/// Per-frame particle occupancy histogram over the container volume.
pub struct DensityGrid {
    counts: Vec<u32>,
}

impl DensityGrid {
    /// Create a zeroed grid.
    pub fn new() -> Self {
        Self {
            counts: vec![0; GRID_CELLS],
        }
    }

    /// Map a position to clamped per-axis cell coordinates.
    ///
    /// Positions outside the box land in the nearest boundary cell; binning
    /// never fails.
    pub fn cell_coords(position: Vec3, box_size: f32) -> (usize, usize, usize) {
        let scale = GRID_RES as f32 / box_size;
        let half = box_size / 2.0;
        let clamp_axis = |coord: f32| -> usize {
            let idx = ((coord + half) * scale).floor();
            (idx.max(0.0) as usize).min(GRID_RES - 1)
        };
        (
            clamp_axis(position.x),
            clamp_axis(position.y),
            clamp_axis(position.z),
        )
    }

    /// Rebuild the histogram from scratch for the given positions.
    pub fn bin(&mut self, positions: &[Vec3], box_size: f32) {
        self.counts.fill(0);
        for &p in positions {
            let (gx, gy, gz) = Self::cell_coords(p, box_size);
            self.counts[gx + gy * GRID_RES + gz * GRID_RES * GRID_RES] += 1;
        }
    }

    /// Occupancy of the cell at the given coordinates.
    pub fn count_at(&self, gx: usize, gy: usize, gz: usize) -> u32 {
        self.counts[gx + gy * GRID_RES + gz * GRID_RES * GRID_RES]
    }

    /// Occupancy of the axis neighbor at `(gx+dx, gy+dy, gz+dz)`.
    ///
    /// Out-of-range neighbors report [`OUT_OF_RANGE_DENSITY`].
    pub fn neighbor_count(
        &self,
        gx: usize,
        gy: usize,
        gz: usize,
        dx: i32,
        dy: i32,
        dz: i32,
    ) -> u32 {
        let nx = gx as i32 + dx;
        let ny = gy as i32 + dy;
        let nz = gz as i32 + dz;
        let max = GRID_RES as i32;
        if nx < 0 || ny < 0 || nz < 0 || nx >= max || ny >= max || nz >= max {
            return OUT_OF_RANGE_DENSITY;
        }
        self.count_at(nx as usize, ny as usize, nz as usize)
    }

    /// Sum of all cell counts. Equals the number of binned particles.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

impl Default for DensityGrid {
    fn default() -> Self {
        Self::new()
    }
}
