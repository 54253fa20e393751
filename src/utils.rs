use chrono::NaiveDate;
use std::path::Path;

/// Days between 0001-01-01 (chrono's day 1 of the common era) and the Unix epoch.
/// Polars stores `Date` values as days since 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// On-disk format of a dataset file, picked from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputFormat {
    Csv,
    Parquet,
}

impl InputFormat {
    /// Anything that is not recognisably parquet is read as CSV.
    pub(crate) fn from_path(path: &Path) -> InputFormat {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "parquet" | "pq" => InputFormat::Parquet,
            _ => InputFormat::Csv,
        }
    }
}

/// Converts a polars physical `Date` value into a `NaiveDate`.
pub(crate) fn days_to_date(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?)
}

/// Rounds to two decimals, half away from zero.
pub(crate) fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
