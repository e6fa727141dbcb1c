// patterns.rs - Well-known starting patterns and random soups

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, SimError};
use crate::grid::Grid;

/// A named set of live cells, relative to the pattern's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Horizontal bars
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
            // Vertical bars
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

impl Pattern {
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Bounding box as `(rows, cols)`.
    pub fn size(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }

    /// Copy of `grid` with the pattern drawn alive at `(row, col)`.
    /// Cells that land outside the grid are dropped.
    pub fn stamp(&self, grid: &Grid, row: usize, col: usize) -> Grid {
        let mut next = grid.clone();
        for &(r, c) in self.cells {
            let (Some(nr), Some(nc)) = (row.checked_add(r), col.checked_add(c)) else {
                continue;
            };
            // Clipped at the edge, same as the engine's boundary
            let _ = next.set(nr, nc, true);
        }
        next
    }

    /// Fresh grid with the pattern centred.
    pub fn centered(&self, height: usize, width: usize) -> Result<Grid> {
        let blank = Grid::new(height, width)?;
        let (h, w) = self.size();
        Ok(self.stamp(&blank, height.saturating_sub(h) / 2, width.saturating_sub(w) / 2))
    }
}

/// Reproducible random soup where each cell is alive with probability `density`.
/// Densities outside `0.0..=1.0` are clamped; NaN is rejected.
pub fn random_grid(height: usize, width: usize, seed: u64, density: f64) -> Result<Grid> {
    if density.is_nan() {
        return Err(SimError::InvalidDensity);
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let density = density.clamp(0.0, 1.0);
    let rows = (0..height)
        .map(|_| (0..width).map(|_| rng.gen_bool(density)).collect())
        .collect();
    Grid::from_rows(rows)
}
