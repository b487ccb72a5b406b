//! High-level, ergonomic library API: analyze an in-memory cube, a raw cube
//! file, or a raw cube file straight into an output directory with a JSON
//! report. Prefer these entrypoints over the low-level `core` modules.
use std::path::Path;

use ndarray::ArrayView3;
use tracing::info;

use crate::core::params::AnalysisParams;
use crate::core::processing::pipeline::{self, HealthAnalysis, HealthSummary};
use crate::error::Result;
use crate::io::raw::read_raw_cube;
use crate::io::writers::report::{REPORT_FILE_NAME, write_summary_json};

/// Run band extraction, index calculation and fusion on a borrowed cube.
pub fn analyze_cube(cube: ArrayView3<f64>, params: &AnalysisParams) -> Result<HealthAnalysis> {
    pipeline::analyze_cube(cube, params)
}

/// Load a raw `f32` cube of the given `(rows, cols, bands)` shape and analyze it.
pub fn analyze_raw_file(
    input: &Path,
    shape: (usize, usize, usize),
    params: &AnalysisParams,
) -> Result<HealthAnalysis> {
    let cube = read_raw_cube(input, shape)?;
    pipeline::analyze_cube(cube.view(), params)
}

/// Analyze a raw cube and write `health_report.json` into `output_dir`,
/// creating the directory if needed.
pub fn analyze_raw_file_to_dir(
    input: &Path,
    shape: (usize, usize, usize),
    output_dir: &Path,
    params: &AnalysisParams,
) -> Result<HealthSummary> {
    std::fs::create_dir_all(output_dir)?;
    let analysis = analyze_raw_file(input, shape, params)?;
    let report_path = output_dir.join(REPORT_FILE_NAME);
    write_summary_json(&report_path, &params.bands, &analysis.summary)?;
    info!("Analysis complete: {:?} -> {:?}", input, report_path);
    Ok(analysis.summary)
}
