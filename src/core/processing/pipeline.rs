use ndarray::{Array2, ArrayView3};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::params::AnalysisParams;
use crate::core::processing::bands::BandExtractor;
use crate::core::processing::fusion::FusionScorer;
use crate::core::processing::ops::IndexCalculator;
use crate::core::processing::stats::{RasterStats, count_outside, raster_stats};
use crate::error::{Error, Result};
use crate::types::BandRole;

/// Scalar results of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthSummary {
    /// Percentage of pixels with health score >= 0.6
    pub healthy_pct: f64,
    /// Percentage of pixels with health score < 0.3
    pub stressed_pct: f64,
    pub pixel_count: usize,
    pub vegetation: RasterStats,
    pub moisture: RasterStats,
    pub health: RasterStats,
    /// Finite health pixels outside [0, 1]
    pub health_out_of_range: usize,
}

/// Rasters and statistics produced by [`analyze_cube`].
#[derive(Debug, Clone)]
pub struct HealthAnalysis {
    pub vegetation: Array2<f64>,
    pub moisture: Array2<f64>,
    pub health: Array2<f64>,
    pub summary: HealthSummary,
}

pub fn analyze_cube(cube: ArrayView3<f64>, params: &AnalysisParams) -> Result<HealthAnalysis> {
    let (rows, cols, bands) = cube.dim();
    if rows == 0 || cols == 0 {
        return Err(Error::EmptyCube { rows, cols });
    }
    info!("Cube shape: {} rows x {} cols x {} bands", rows, cols, bands);

    let extractor = BandExtractor::new(cube, &params.bands)?;
    let red = extractor.band(BandRole::Red)?;
    let nir = extractor.band(BandRole::Nir)?;
    let swir = extractor.band(BandRole::Swir)?;

    let calculator = IndexCalculator::new();
    let vegetation = calculator.vegetation_index(&nir, &red)?;
    let moisture = calculator.moisture_index(&nir, &swir)?;
    debug!("Computed vegetation and moisture indices");

    let scorer = FusionScorer::new();
    let thresholds = scorer.thresholds();
    debug!(
        "Health thresholds: healthy >= {}, stressed < {}",
        thresholds.healthy, thresholds.stressed
    );
    let health = scorer.health_score(&vegetation, &moisture)?;
    let area = scorer.threshold_summary(&health);

    let health_out_of_range = count_outside(&health, 0.0, 1.0);
    if health_out_of_range > 0 {
        warn!(
            "{} health pixels fall outside [0, 1]; scores are left unclamped",
            health_out_of_range
        );
    }

    let summary = HealthSummary {
        healthy_pct: area.healthy_pct,
        stressed_pct: area.stressed_pct,
        pixel_count: area.pixel_count,
        vegetation: raster_stats(&vegetation),
        moisture: raster_stats(&moisture),
        health: raster_stats(&health),
        health_out_of_range,
    };
    info!(
        "Healthy area: {:.1}%, stressed area: {:.1}%",
        summary.healthy_pct, summary.stressed_pct
    );

    Ok(HealthAnalysis {
        vegetation,
        moisture,
        health,
        summary,
    })
}
