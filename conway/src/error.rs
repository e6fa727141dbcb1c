// error.rs - Error types for the simulation core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("invalid grid dimensions {height}x{width}: both sides must be at least 1")]
    InvalidDimensions { height: usize, width: usize },

    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid dimensions {found:?} do not match the controller's {expected:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("tick interval must be longer than zero")]
    InvalidInterval,

    #[error("random density must be a number")]
    InvalidDensity,
}
