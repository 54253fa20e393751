//! Dashboard configuration: where the datasets and the branding asset live, and
//! how strictly the loaded data is checked.

use crate::error::ConfigError;
use crate::types::dataset_kind::DatasetKind;
use bon::Builder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_daily_file() -> String {
    DatasetKind::Daily.default_file_name().to_string()
}

fn default_hourly_file() -> String {
    DatasetKind::Hourly.default_file_name().to_string()
}

fn default_logo_file() -> String {
    "Logo.png".to_string()
}

/// Locations and loading options for a [`crate::BikeShare`] dashboard.
///
/// Every field has a default, so an empty JSON object is a valid config that
/// reads `day_clean.csv` and `hour_clean.csv` from the working directory.
///
/// # Examples
///
/// ```
/// use bikeshare::DashboardConfig;
///
/// let config = DashboardConfig::builder()
///     .data_dir("data")
///     .strict_validation(true)
///     .build();
///
/// assert_eq!(config.daily_path(), std::path::Path::new("data/day_clean.csv"));
/// assert!(config.strict_validation);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct DashboardConfig {
    /// Directory the file names below are resolved against.
    #[serde(default = "default_data_dir")]
    #[builder(into, default = default_data_dir())]
    pub data_dir: PathBuf,

    #[serde(default = "default_daily_file")]
    #[builder(into, default = default_daily_file())]
    pub daily_file: String,

    #[serde(default = "default_hourly_file")]
    #[builder(into, default = default_hourly_file())]
    pub hourly_file: String,

    /// Branding image shown in the sidebar. A missing file is not an error.
    #[serde(default = "default_logo_file")]
    #[builder(into, default = default_logo_file())]
    pub logo_file: String,

    /// Fail loading when rows break the count or hour invariants.
    #[serde(default)]
    #[builder(default)]
    pub strict_validation: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig::builder().build()
    }
}

impl DashboardConfig {
    /// Reads a JSON config file. Missing keys take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<DashboardConfig, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        serde_json::from_str(&text).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    pub fn daily_path(&self) -> PathBuf {
        self.data_dir.join(&self.daily_file)
    }

    pub fn hourly_path(&self) -> PathBuf {
        self.data_dir.join(&self.hourly_file)
    }

    pub fn logo_path(&self) -> PathBuf {
        self.data_dir.join(&self.logo_file)
    }
}
