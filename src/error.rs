//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Precondition violations of the index pipeline (shape mismatch, band index
//! out of range, invalid band table) are surfaced immediately; degenerate
//! numeric input never produces an error.
use thiserror::Error;

use crate::types::BandRole;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Shape mismatch: left operand is {left:?}, right operand is {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Band index {index} out of range for cube with {bands} bands")]
    BandOutOfRange { index: usize, bands: usize },

    #[error("Invalid band table: {role} band index {index} exceeds cube band count {bands}")]
    InvalidBandTable {
        role: BandRole,
        index: usize,
        bands: usize,
    },

    #[error("Cube has no pixels: {rows} rows x {cols} columns")]
    EmptyCube { rows: usize, cols: usize },

    #[error("Cube file holds {actual} bytes, expected {expected} for shape {shape:?}")]
    CubeSize {
        expected: usize,
        actual: usize,
        shape: (usize, usize, usize),
    },

    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },
}

impl Error {
    pub(crate) fn shape_mismatch(left: &[usize], right: &[usize]) -> Self {
        Error::ShapeMismatch {
            left: (left[0], left[1]),
            right: (right[0], right[1]),
        }
    }
}
