use ndarray::{Array2, ArrayBase, Data, Ix2, Zip};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Score at or above which a pixel counts as healthy.
pub const HEALTHY_THRESHOLD: f64 = 0.6;
/// Score below which a pixel counts as stressed.
pub const STRESSED_THRESHOLD: f64 = 0.3;

/// Fixed health thresholds. `healthy` must stay above `stressed` so the two
/// buckets never overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub healthy: f64,
    pub stressed: f64,
}

impl Thresholds {
    pub const STANDARD: Thresholds = Thresholds {
        healthy: HEALTHY_THRESHOLD,
        stressed: STRESSED_THRESHOLD,
    };
}

/// Healthy/stressed area as percentages of all pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaSummary {
    pub healthy_pct: f64,
    pub stressed_pct: f64,
    pub pixel_count: usize,
}

/// Fuses vegetation and moisture indices into a health score.
///
/// High moisture depresses an otherwise positive vegetation signal, modelling
/// water-logging stress. Moisture is clamped to [0, 1] so extreme readings
/// saturate the penalty instead of inverting it. The score itself is left
/// unclamped: it only stays inside [0, 1] when the vegetation index does.
#[derive(Debug, Clone, Copy)]
pub struct FusionScorer {
    thresholds: Thresholds,
}

impl FusionScorer {
    pub fn new() -> Self {
        Self {
            thresholds: Thresholds::STANDARD,
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// health = vegetation * (1 - clamp(moisture, 0, 1))
    pub fn health_score<S1, S2>(
        &self,
        vegetation: &ArrayBase<S1, Ix2>,
        moisture: &ArrayBase<S2, Ix2>,
    ) -> Result<Array2<f64>>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
    {
        if vegetation.shape() != moisture.shape() {
            return Err(Error::shape_mismatch(vegetation.shape(), moisture.shape()));
        }
        Ok(Zip::from(vegetation)
            .and(moisture)
            .map_collect(|&veg, &wet| veg * (1.0 - wet.clamp(0.0, 1.0))))
    }

    /// Percentage of pixels at or above the healthy threshold and below the
    /// stressed threshold. NaN pixels fall in neither bucket but still count
    /// towards the total.
    pub fn threshold_summary<S>(&self, health: &ArrayBase<S, Ix2>) -> AreaSummary
    where
        S: Data<Elem = f64>,
    {
        let pixel_count = health.len();
        if pixel_count == 0 {
            return AreaSummary {
                healthy_pct: 0.0,
                stressed_pct: 0.0,
                pixel_count,
            };
        }

        let mut healthy = 0usize;
        let mut stressed = 0usize;
        for &v in health.iter() {
            if v >= self.thresholds.healthy {
                healthy += 1;
            } else if v < self.thresholds.stressed {
                stressed += 1;
            }
        }

        let total = pixel_count as f64;
        AreaSummary {
            healthy_pct: healthy as f64 / total * 100.0,
            stressed_pct: stressed as f64 / total * 100.0,
            pixel_count,
        }
    }
}

impl Default for FusionScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn moisture_penalizes_vegetation() {
        let veg = array![[0.8, 0.8, 0.8]];
        let wet = array![[0.0, 0.5, 1.0]];
        let health = FusionScorer::new().health_score(&veg, &wet).unwrap();
        assert!((health[[0, 0]] - 0.8).abs() < 1e-12);
        assert!((health[[0, 1]] - 0.4).abs() < 1e-12);
        assert_eq!(health[[0, 2]], 0.0);
    }

    #[test]
    fn moisture_outside_unit_range_saturates() {
        let veg = array![[0.7, 0.7]];
        let wet = array![[-3.0, 42.0]];
        let health = FusionScorer::new().health_score(&veg, &wet).unwrap();
        assert!((health[[0, 0]] - 0.7).abs() < 1e-12);
        assert_eq!(health[[0, 1]], 0.0);
    }

    #[test]
    fn score_never_exceeds_non_negative_vegetation() {
        let veg = array![[0.0, 0.25, 0.9], [1.5, 0.6, 3.0]];
        let wet = array![[0.3, -0.2, 0.99], [0.1, 2.0, 0.5]];
        let health = FusionScorer::new().health_score(&veg, &wet).unwrap();
        Zip::from(&veg)
            .and(&health)
            .for_each(|&v, &h| assert!(h <= v, "{h} > {v}"));
    }

    #[test]
    fn score_is_not_clamped() {
        let veg = array![[1e11]];
        let wet = array![[0.0]];
        let health = FusionScorer::new().health_score(&veg, &wet).unwrap();
        assert_eq!(health[[0, 0]], 1e11);
    }

    #[test]
    fn shape_mismatch_is_reported() {
        let veg = Array2::<f64>::zeros((2, 2));
        let wet = Array2::<f64>::zeros((2, 1));
        assert!(matches!(
            FusionScorer::new().health_score(&veg, &wet),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn scorer_holds_standard_thresholds() {
        let thresholds = FusionScorer::default().thresholds();
        assert_eq!(thresholds, Thresholds::STANDARD);
        assert_eq!(thresholds.healthy, 0.6);
        assert_eq!(thresholds.stressed, 0.3);
    }

    #[test]
    fn summary_uses_fixed_thresholds() {
        // 0.6 is healthy (inclusive), 0.3 is neither, 0.29 is stressed.
        let health = array![[0.6, 0.95], [0.3, 0.29], [0.45, -0.2], [f64::NAN, 0.1]];
        let summary = FusionScorer::new().threshold_summary(&health);
        assert_eq!(summary.pixel_count, 8);
        assert!((summary.healthy_pct - 25.0).abs() < 1e-12);
        assert!((summary.stressed_pct - 37.5).abs() < 1e-12);
    }

    #[test]
    fn summary_percentages_are_bounded() {
        let health =
            Array2::from_shape_fn((7, 9), |(r, c)| (r as f64 - 3.0) * 0.4 + c as f64 * 0.05);
        let summary = FusionScorer::new().threshold_summary(&health);
        assert!((0.0..=100.0).contains(&summary.healthy_pct));
        assert!((0.0..=100.0).contains(&summary.stressed_pct));
        assert!(summary.healthy_pct + summary.stressed_pct <= 100.0 + 1e-9);
    }

    #[test]
    fn empty_raster_summarizes_to_zero() {
        let health = Array2::<f64>::zeros((0, 4));
        let summary = FusionScorer::new().threshold_summary(&health);
        assert_eq!(summary.pixel_count, 0);
        assert_eq!(summary.healthy_pct, 0.0);
        assert_eq!(summary.stressed_pct, 0.0);
    }
}
