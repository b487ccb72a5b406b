use ndarray::{ArrayBase, Data, Ix2};
use serde::{Deserialize, Serialize};

/// Summary statistics of a raster over its finite pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RasterStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub finite_count: usize,
    pub non_finite_count: usize,
}

/// Single pass min/max with a running (Welford) mean. NaN and +/-Inf are
/// counted but excluded from min/max/mean; with no finite pixels all three
/// are reported as 0.
pub fn raster_stats<S>(raster: &ArrayBase<S, Ix2>) -> RasterStats
where
    S: Data<Elem = f64>,
{
    let mut count: u64 = 0;
    let mut non_finite = 0usize;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut mean = 0.0_f64;

    for &v in raster.iter() {
        if !v.is_finite() {
            non_finite += 1;
            continue;
        }
        count += 1;
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
        mean += (v - mean) / (count as f64);
    }

    if count == 0 {
        return RasterStats {
            min: 0.0,
            max: 0.0,
            mean: 0.0,
            finite_count: 0,
            non_finite_count: non_finite,
        };
    }

    RasterStats {
        min,
        max,
        mean,
        finite_count: count as usize,
        non_finite_count: non_finite,
    }
}

/// Number of finite pixels outside the closed range `[lo, hi]`.
pub fn count_outside<S>(raster: &ArrayBase<S, Ix2>, lo: f64, hi: f64) -> usize
where
    S: Data<Elem = f64>,
{
    raster
        .iter()
        .filter(|v| v.is_finite() && (**v < lo || **v > hi))
        .count()
}
