use ndarray::{Array2, ArrayBase, Data, Ix2, Zip};

use crate::error::{Error, Result};

/// Denominator guard for normalized differences.
pub const NORMALIZED_DIFFERENCE_EPSILON: f64 = 1e-10;

/// Normalized difference: (a - b) / (a + b + epsilon)
///
/// No clamping is applied. Where `a + b` cancels to zero the result is finite
/// but on the order of `(a - b) / epsilon`, well outside [-1, 1].
pub fn normalized_difference<S1, S2>(
    a: &ArrayBase<S1, Ix2>,
    b: &ArrayBase<S2, Ix2>,
    epsilon: f64,
) -> Result<Array2<f64>>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    if a.shape() != b.shape() {
        return Err(Error::shape_mismatch(a.shape(), b.shape()));
    }
    Ok(Zip::from(a)
        .and(b)
        .map_collect(|&a_val, &b_val| (a_val - b_val) / (a_val + b_val + epsilon)))
}

/// Index calculator holding the epsilon used by both named indices.
#[derive(Debug, Clone, Copy)]
pub struct IndexCalculator {
    epsilon: f64,
}

impl IndexCalculator {
    pub fn new() -> Self {
        Self {
            epsilon: NORMALIZED_DIFFERENCE_EPSILON,
        }
    }

    /// NDVI-style vegetation index: (NIR - Red) / (NIR + Red)
    pub fn vegetation_index(&self, nir: &Array2<f64>, red: &Array2<f64>) -> Result<Array2<f64>> {
        normalized_difference(nir, red, self.epsilon)
    }

    /// NDWI-style moisture index: (NIR - SWIR) / (NIR + SWIR)
    pub fn moisture_index(&self, nir: &Array2<f64>, swir: &Array2<f64>) -> Result<Array2<f64>> {
        normalized_difference(nir, swir, self.epsilon)
    }
}

impl Default for IndexCalculator {
    fn default() -> Self {
        Self::new()
    }
}
