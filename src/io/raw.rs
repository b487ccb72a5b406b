use std::path::Path;

use ndarray::Array3;
use tracing::info;

use crate::error::{Error, Result};

const SAMPLE_BYTES: usize = std::mem::size_of::<f32>();

/// Read a headerless little-endian `f32` cube stored band-interleaved-by-pixel,
/// i.e. `(row, col, band)` in row-major order. Samples are widened to `f64`.
pub fn read_raw_cube(path: &Path, shape: (usize, usize, usize)) -> Result<Array3<f64>> {
    let bytes = std::fs::read(path)?;
    let (rows, cols, bands) = shape;
    let expected = rows
        .checked_mul(cols)
        .and_then(|n| n.checked_mul(bands))
        .and_then(|n| n.checked_mul(SAMPLE_BYTES))
        .ok_or_else(|| Error::InvalidArgument {
            arg: "shape",
            value: format!("{rows}x{cols}x{bands}"),
        })?;

    if bytes.len() != expected {
        return Err(Error::CubeSize {
            expected,
            actual: bytes.len(),
            shape,
        });
    }

    let samples: Vec<f64> = bytes
        .chunks_exact(SAMPLE_BYTES)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]) as f64)
        .collect();

    info!(
        "Loaded cube {:?}: {}x{}x{} ({:.2} MB)",
        path,
        rows,
        cols,
        bands,
        expected as f64 / 1024.0 / 1024.0
    );
    Ok(Array3::from_shape_vec(shape, samples)?)
}
