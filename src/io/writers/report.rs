use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::core::params::BandTable;
use crate::core::processing::pipeline::HealthSummary;
use crate::error::Result;

/// Report file name written next to other outputs.
pub const REPORT_FILE_NAME: &str = "health_report.json";

#[derive(Debug, Serialize)]
struct ReportFile<'a> {
    generator: &'static str,
    version: &'static str,
    bands: &'a BandTable,
    summary: &'a HealthSummary,
}

/// Write the summary (and the band table it was computed with) as pretty JSON.
pub fn write_summary_json(output: &Path, bands: &BandTable, summary: &HealthSummary) -> Result<()> {
    let report = ReportFile {
        generator: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        bands,
        summary,
    };
    let writer = BufWriter::new(File::create(output)?);
    serde_json::to_writer_pretty(writer, &report)?;
    info!("Summary report written: {:?}", output);
    Ok(())
}
