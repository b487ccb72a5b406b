use tracing::info;
use tracing_subscriber::EnvFilter;

use cropscan::{AnalysisParams, HealthSummary, analyze_raw_file_to_dir};

use super::args::CliArgs;
use super::errors::AppError;

fn load_params(args: &CliArgs) -> Result<AnalysisParams, AppError> {
    let mut params = match &args.config {
        Some(path) => AnalysisParams::from_json_file(path).map_err(|source| AppError::Config {
            path: path.clone(),
            source,
        })?,
        None => AnalysisParams::default(),
    };

    if let Some(red) = args.red_band {
        params.bands.red = red;
    }
    if let Some(nir) = args.nir_band {
        params.bands.nir = nir;
    }
    if let Some(swir) = args.swir_band {
        params.bands.swir = swir;
    }
    Ok(params)
}

fn print_report(summary: &HealthSummary) {
    println!("\n--- Crop Health Assessment Report ---");
    println!("Healthy area: {:.1}%", summary.healthy_pct);
    println!("Stressed area: {:.1}%", summary.stressed_pct);
    println!("-------------------------------------");
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    for (arg, value) in [("--rows", args.rows), ("--cols", args.cols), ("--bands", args.bands)] {
        if value == 0 {
            return Err(AppError::ZeroDimension { arg }.into());
        }
    }

    let params = load_params(&args)?;
    info!("Input: {:?}", args.input);
    info!("Output directory: {:?}", args.output_dir);

    let summary = analyze_raw_file_to_dir(
        &args.input,
        (args.rows, args.cols, args.bands),
        &args.output_dir,
        &params,
    )
    .map_err(AppError::from)?;

    print_report(&summary);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> CliArgs {
        let base = [
            "cropscan", "-i", "cube.raw", "--rows", "2", "--cols", "2", "--bands", "151",
        ];
        CliArgs::parse_from(base.iter().chain(extra.iter()).copied())
    }

    #[test]
    fn defaults_without_config_or_flags() {
        let params = load_params(&args(&[])).unwrap();
        assert_eq!(params, AnalysisParams::default());
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("params.json");
        std::fs::write(&config, r#"{ "bands": { "red": 10, "nir": 20, "swir": 30 } }"#).unwrap();
        let config = config.to_string_lossy().into_owned();

        let params = load_params(&args(&["--config", &config, "--nir-band", "25"])).unwrap();
        assert_eq!(params.bands.red, 10);
        assert_eq!(params.bands.nir, 25);
        assert_eq!(params.bands.swir, 30);
    }

    #[test]
    fn flags_apply_on_top_of_defaults() {
        let params = load_params(&args(&["--red-band", "3", "--swir-band", "7"])).unwrap();
        assert_eq!(params.bands.red, 3);
        assert_eq!(params.bands.nir, 90);
        assert_eq!(params.bands.swir, 7);
    }

    #[test]
    fn unreadable_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json").to_string_lossy().into_owned();
        let result = load_params(&args(&["--config", &missing]));
        assert!(matches!(result, Err(AppError::Config { .. })));
    }
}
