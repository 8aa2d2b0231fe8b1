//! Error types shared across OpenField crates.

use std::path::PathBuf;

/// Top-level error type for OpenField operations.
#[derive(Debug, thiserror::Error)]
pub enum OpenFieldError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("No XY data files matching '{pattern}' in directory: {dir}")]
    NoInputFiles { dir: PathBuf, pattern: String },

    #[error("Malformed record {source_path}: {message}")]
    MalformedRecord {
        source_path: PathBuf,
        message: String,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Output error: {message}")]
    Output { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using OpenFieldError.
pub type OpenFieldResult<T> = Result<T, OpenFieldError>;

impl OpenFieldError {
    pub fn no_input_files(dir: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        Self::NoInputFiles {
            dir: dir.into(),
            pattern: pattern.into(),
        }
    }

    pub fn malformed_record(source_path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::MalformedRecord {
            source_path: source_path.into(),
            message: msg.into(),
        }
    }

    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output {
            message: msg.into(),
        }
    }
}

/// A rejected analysis parameter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("{name} must be greater than zero, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("center area must be within (0, 100] percent, got {value}")]
    CenterAreaOutOfRange { value: f64 },

    /// The center zone is a square, so it must fit the shorter ROI side.
    #[error(
        "a {center_pct}% center zone is a square of side {side:.2}px, which does not fit \
         the shorter side of a {roi_width}x{roi_height}px ROI; use at most {max_pct:.2}%"
    )]
    CenterExceedsRoi {
        center_pct: f64,
        side: f64,
        roi_width: f64,
        roi_height: f64,
        max_pct: f64,
    },
}
