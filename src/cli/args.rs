use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cropscan", version, about = "Crop health maps from hyperspectral cubes")]
pub struct CliArgs {
    /// Raw cube file: little-endian f32, band-interleaved-by-pixel
    #[arg(short, long)]
    pub input: PathBuf,

    /// Number of rows in the cube
    #[arg(long)]
    pub rows: usize,

    /// Number of columns in the cube
    #[arg(long)]
    pub cols: usize,

    /// Number of spectral bands in the cube
    #[arg(long)]
    pub bands: usize,

    /// Directory for the summary report
    #[arg(short, long, default_value = "results")]
    pub output_dir: PathBuf,

    /// Optional JSON file with analysis parameters (band table)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the red band index
    #[arg(long)]
    pub red_band: Option<usize>,

    /// Override the near-infrared band index
    #[arg(long)]
    pub nir_band: Option<usize>,

    /// Override the short-wave infrared band index
    #[arg(long)]
    pub swir_band: Option<usize>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
