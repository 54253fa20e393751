use crate::dataset::error::LoadError;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BikeShareError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed processing DataFrame: {0}")]
    Polars(#[from] PolarsError),

    #[error("Column '{column}' has an unexpected type: {source}")]
    ColumnType {
        column: String,
        #[source]
        source: PolarsError,
    },

    #[error("Column '{column}' holds a value that cannot be converted: {message}")]
    InvalidValue { column: String, message: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse config file '{0}'")]
    Parse(PathBuf, #[source] serde_json::Error),
}
