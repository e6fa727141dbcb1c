// engine.rs - Generation transition for Conway's Game of Life

use log::trace;

use crate::grid::{Grid, TRow};

/// Relative positions of the 8 surrounding cells.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Computes the next generation of a grid.
///
/// The grid has hard edges: a neighbor position that falls outside the
/// grid counts as dead. There is no wraparound.
#[derive(Debug, Default, Clone, Copy)]
pub struct GridEngine;

impl GridEngine {
    pub fn new() -> Self {
        Self
    }

    /// Produces a new grid of the same dimensions. Every cell is evaluated
    /// against `grid`, which is left as it was.
    pub fn next_generation(&self, grid: &Grid) -> Grid {
        if grid.height() == 0 || grid.width() == 0 {
            return Grid::empty();
        }
        let rows = (0..grid.height()).map(|r| self.next_row(grid, r)).collect();
        let next = Grid::from_rows(rows).unwrap_or_else(|_| Grid::empty());
        trace!(
            "generation computed: {} -> {} live cells",
            grid.live_cells(),
            next.live_cells()
        );
        next
    }

    /// Next state of one row.
    pub fn next_row(&self, grid: &Grid, row: usize) -> TRow {
        (0..grid.width())
            .map(|col| rule(grid.is_alive(row, col), self.live_neighbors(grid, row, col)))
            .collect()
    }

    pub fn live_neighbors(&self, grid: &Grid, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for &(dr, dc) in &NEIGHBORS {
            let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue; // above or left of the grid
            };
            if grid.is_alive(nr, nc) {
                count += 1;
            }
        }
        count
    }
}

/// Life rule: `(alive, live neighbors) -> alive next`.
pub fn rule(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 0..=1) => false, // Underpopulation
        (true, 2..=3) => true,  // Survival
        (true, _) => false,     // Overpopulation
        (false, 3) => true,     // Birth
        (false, _) => false,
    }
}
