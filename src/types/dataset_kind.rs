//! Defines the two dataset granularities handled by the dashboard and the
//! column names each one is expected to carry.

use std::fmt;

/// Column names shared by the daily and hourly datasets, as written by the
/// cleaning step that produces `day_clean.csv` and `hour_clean.csv`.
pub mod columns {
    pub const DATE: &str = "Date";
    pub const HOUR: &str = "Hour";
    pub const TOTAL_USERS: &str = "Total Users";
    pub const REGISTERED_USERS: &str = "Registered Users";
    pub const CASUAL_USERS: &str = "Casual Users";
    pub const WEATHER_CONDITION: &str = "Weather Condition";
    pub const SEASON: &str = "Season";
}

/// Represents the time granularity of a bike-sharing dataset.
///
/// Determines which columns must be present when loading and how the
/// numeric and categorical columns are normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    /// One row per calendar day, with user counts split by type plus weather and season labels.
    Daily,
    /// One row per (calendar day, hour of day), with the total user count.
    Hourly,
}

impl DatasetKind {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            DatasetKind::Daily => "daily",
            DatasetKind::Hourly => "hourly",
        }
    }

    /// The conventional file name of this dataset inside the data directory.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            DatasetKind::Daily => "day_clean.csv",
            DatasetKind::Hourly => "hour_clean.csv",
        }
    }

    /// Columns that must be present for the dataset to load.
    pub fn required_columns(&self) -> Vec<&'static str> {
        match self {
            DatasetKind::Daily => vec![
                columns::DATE,
                columns::TOTAL_USERS,
                columns::REGISTERED_USERS,
                columns::CASUAL_USERS,
                columns::WEATHER_CONDITION,
                columns::SEASON,
            ],
            DatasetKind::Hourly => vec![columns::DATE, columns::HOUR, columns::TOTAL_USERS],
        }
    }

    /// Columns holding integer values that get cast to `Int64` on load.
    pub(crate) fn integer_columns(&self) -> Vec<&'static str> {
        match self {
            DatasetKind::Daily => vec![
                columns::TOTAL_USERS,
                columns::REGISTERED_USERS,
                columns::CASUAL_USERS,
            ],
            DatasetKind::Hourly => vec![columns::HOUR, columns::TOTAL_USERS],
        }
    }
}

/// Formats a `DatasetKind` by its lowercase name.
///
/// # Examples
///
/// ```
/// use bikeshare::DatasetKind;
///
/// assert_eq!(DatasetKind::Daily.to_string(), "daily");
/// assert_eq!(format!("{}", DatasetKind::Hourly), "hourly");
/// ```
impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
