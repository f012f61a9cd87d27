use std::io;
use std::path::PathBuf;

/// Failure to read a progress token such as `25%` or `1250bp`
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseProgressError {
    #[error("empty progress value")]
    Empty,
    #[error("unknown progress unit in {0:?} (expected %, ‰/pm or ‱/bp)")]
    UnknownUnit(String),
    #[error("invalid progress number {0:?}")]
    InvalidNumber(String),
}

/// Failure to load an [`ArcConfig`](crate::ArcConfig) from disk
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid arc config")]
    Json(#[from] serde_json::Error),
}
