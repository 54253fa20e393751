use crate::types::dataset_kind::DatasetKind;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Dataset file '{0}' does not exist")]
    FileNotFound(PathBuf),

    #[error("Failed to read metadata for dataset file '{0}'")]
    FileMetadata(PathBuf, #[source] std::io::Error),

    // Errors while reading the file contents
    #[error("Failed to read CSV dataset '{path}'")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("Failed to read parquet dataset '{0}'")]
    ParquetScan(PathBuf, #[source] PolarsError),

    #[error("Required column '{column}' not found in {dataset} dataset")]
    MissingColumn {
        dataset: DatasetKind,
        column: String,
    },

    #[error("Column 'Date' of the {dataset} dataset has type {dtype}, which cannot be read as a date")]
    UnsupportedDateType { dataset: DatasetKind, dtype: String },

    #[error("Failed to normalize {dataset} dataset: {source}")]
    Normalization {
        dataset: DatasetKind,
        #[source]
        source: PolarsError,
    },

    #[error("Column '{column}' of the {dataset} dataset has {count} empty or unreadable value(s)")]
    NullValues {
        dataset: DatasetKind,
        column: String,
        count: usize,
    },

    #[error("{dataset} dataset failed validation: {count} row(s) {message}")]
    Validation {
        dataset: DatasetKind,
        count: usize,
        message: String,
    },
}
