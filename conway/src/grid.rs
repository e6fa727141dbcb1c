// grid.rs - Grid type for Conway's Game of Life

use std::fmt;

use crate::error::{Result, SimError};

pub type TRow = Vec<bool>;

/// Fixed-size rectangular matrix of cells, addressed as `(row, col)`.
///
/// Each row owns its own storage. A grid is never resized; a change of
/// dimensions means building a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: Vec<TRow>,
    width: usize,
}

impl Grid {
    /// All-dead grid of `height x width`.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        check_dimensions(height, width)?;
        // vec! clones the prototype row, so no two rows share storage
        Ok(Self {
            rows: vec![vec![false; width]; height],
            width,
        })
    }

    /// The degenerate 0x0 grid.
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            width: 0,
        }
    }

    pub fn from_rows(rows: Vec<TRow>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        check_dimensions(rows.len(), width)?;
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(SimError::RaggedRows {
                row,
                expected: width,
                found,
            });
        }
        Ok(Self { rows, width })
    }

    pub fn from_cells(height: usize, width: usize, cells: &[(usize, usize)]) -> Result<Self> {
        let mut grid = Self::new(height, width)?;
        for &(row, col) in cells {
            grid.set(row, col, true)?;
        }
        Ok(grid)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.height(), self.width)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.rows.get(row)?.get(col).copied()
    }

    /// Anything outside the grid reads as dead.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    pub fn rows(&self) -> &[TRow] {
        &self.rows
    }

    pub fn live_cells(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&alive| alive).count())
            .sum()
    }

    pub fn live_coordinates(&self) -> Vec<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &alive)| alive)
                    .map(move |(c, _)| (r, c))
            })
            .collect()
    }

    /// Copy of this grid with one cell replaced.
    pub fn with_cell(&self, row: usize, col: usize, value: bool) -> Result<Self> {
        let mut next = self.clone();
        next.set(row, col, value)?;
        Ok(next)
    }

    // Mutation stays crate-private: callers outside only ever see whole grids.
    pub(crate) fn set(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        let (height, width) = self.dimensions();
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(SimError::OutOfRange {
                row,
                col,
                height,
                width,
            }),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line: String = row.iter().map(|&a| if a { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn check_dimensions(height: usize, width: usize) -> Result<()> {
    if height == 0 || width == 0 {
        return Err(SimError::InvalidDimensions { height, width });
    }
    Ok(())
}
