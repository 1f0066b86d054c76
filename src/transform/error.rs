use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Failed to read forecast file '{0}'")]
    FileRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse forecast file '{0}'")]
    JsonParse(PathBuf, #[source] serde_json::Error),

    #[error("Hourly array '{field}' has {found} entries, expected {expected} to match the time array")]
    SeriesLengthMismatch {
        field: String,
        expected: usize,
        found: usize,
    },

    #[error("Failed to parse hourly timestamp '{value}'")]
    TimestampParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),

    #[error("I/O error writing parquet file '{0}'")]
    ParquetWriteIo(PathBuf, #[source] std::io::Error),

    #[error("Encoding error writing parquet file '{0}'")]
    ParquetWritePolars(PathBuf, #[source] PolarsError),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
