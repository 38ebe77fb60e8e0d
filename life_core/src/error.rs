// error.rs - Contract violations reported by the core

use thiserror::Error;

/// Errors returned when a caller breaks a precondition of a grid or
/// configuration operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    /// Coordinate outside `[0, rows) x [0, cols)`.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A row passed to `Grid::from_rows` has the wrong width.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Live probability not in `[0, 1]`.
    #[error("live probability must be within 0..=1, got {0}")]
    InvalidProbability(f64),

    #[error("step delay must be greater than zero")]
    InvalidStepDelay,
}
