//! Error types for benchplot.

use thiserror::Error;

/// Result type alias for benchplot operations
pub type Result<T> = std::result::Result<T, BenchplotError>;

/// Main error type for benchplot
#[derive(Error, Debug)]
pub enum BenchplotError {
    /// Benchmark name does not follow the `[BM_]<algorithm>/<size>` shape
    #[error("malformed benchmark name {name:?}: {reason}")]
    Name { name: String, reason: String },

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Input held no usable rows
    #[error("no usable benchmark rows in input")]
    EmptyInput,

    /// Chart rendering errors
    #[error("render error: {0}")]
    Render(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl<E: std::error::Error + Send + Sync> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for BenchplotError
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        BenchplotError::Render(err.to_string())
    }
}

impl From<serde_json::Error> for BenchplotError {
    fn from(err: serde_json::Error) -> Self {
        BenchplotError::Serialization(err.to_string())
    }
}
