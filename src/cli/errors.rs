use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cube dimension {arg} must be greater than 0")]
    ZeroDimension { arg: &'static str },

    #[error("Failed to load config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: cropscan::Error,
    },

    #[error(transparent)]
    Analysis(#[from] cropscan::Error),
}
