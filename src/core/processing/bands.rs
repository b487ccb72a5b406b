use ndarray::{Array2, ArrayView3, Axis};
use tracing::debug;

use crate::core::params::BandTable;
use crate::error::{Error, Result};
use crate::types::BandRole;

/// Copy the `(row, col)` slice at `index` out of a `(row, col, band)` cube.
pub fn extract_band(cube: &ArrayView3<f64>, index: usize) -> Result<Array2<f64>> {
    let bands = cube.len_of(Axis(2));
    if index >= bands {
        return Err(Error::BandOutOfRange { index, bands });
    }
    Ok(cube.index_axis(Axis(2), index).to_owned())
}

/// Band extractor bound to a cube whose band count has already been checked
/// against the full role table.
pub struct BandExtractor<'a> {
    cube: ArrayView3<'a, f64>,
    table: BandTable,
}

impl<'a> BandExtractor<'a> {
    pub fn new(cube: ArrayView3<'a, f64>, table: &BandTable) -> Result<Self> {
        table.validate(cube.len_of(Axis(2)))?;
        debug!(
            "Band table: red={}, nir={}, swir={}",
            table.red, table.nir, table.swir
        );
        Ok(Self {
            cube,
            table: *table,
        })
    }

    pub fn band(&self, role: BandRole) -> Result<Array2<f64>> {
        extract_band(&self.cube, self.table.index(role))
    }
}
