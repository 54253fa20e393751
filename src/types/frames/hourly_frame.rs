// hourly_frame.rs

//! Contains the `HourlyLazyFrame` structure for lazy operations on the hourly bike-sharing dataset.

use crate::error::BikeShareError;
use crate::filtering::BikeFrameFilterExt;
use crate::types::dataset_kind::columns;
use crate::types::frames::{date_values, i64_values, u32_values};
use crate::types::records::HourlyRecord;
use chrono::NaiveDate;
use polars::prelude::{col, lit, DataFrame, Expr, LazyFrame};

/// A wrapper around a Polars `LazyFrame` holding the normalized hourly dataset.
///
/// The frame has a `Date` column of type `Date`, an `Int64` `Hour` column (0-23)
/// and an `Int64` `Total Users` column. Rows are ordered by date; rows of the
/// same date keep the order they had on disk.
///
/// Instances are obtained via [`crate::BikeShare::hourly`].
#[derive(Clone)]
pub struct HourlyLazyFrame {
    /// The underlying Polars LazyFrame containing the hourly data.
    pub frame: LazyFrame,
}

impl HourlyLazyFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Filters the hourly data based on a Polars predicate expression.
    pub fn filter(&self, predicate: Expr) -> HourlyLazyFrame {
        HourlyLazyFrame::new(self.frame.clone().filter(predicate))
    }

    /// Filters the hourly data to dates within `[start, end]` (inclusive on both ends),
    /// so every hour of the end date is included.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use bikeshare::BikeShare;
    /// use chrono::NaiveDate;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let dashboard = BikeShare::from_paths("day_clean.csv", "hour_clean.csv")?;
    /// let day = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
    ///
    /// // Up to 24 rows
    /// let hours = dashboard.hourly().get_range(day, day).collect_hourly()?;
    /// println!("{} hours recorded on {}", hours.len(), day);
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_range(&self, start: NaiveDate, end: NaiveDate) -> HourlyLazyFrame {
        HourlyLazyFrame::new(self.frame.clone().filter_date_range(start, end))
    }

    /// Filters the hourly data to the record of one hour on one date.
    pub fn get_at(&self, date: NaiveDate, hour: u32) -> HourlyLazyFrame {
        HourlyLazyFrame::new(
            self.frame
                .clone()
                .filter_on_date(date)
                .filter(col(columns::HOUR).eq(lit(hour as i64))),
        )
    }

    pub fn collect(&self) -> Result<DataFrame, BikeShareError> {
        Ok(self.frame.clone().collect()?)
    }

    /// Executes the query and converts every row into an [`HourlyRecord`].
    ///
    /// # Errors
    ///
    /// Returns [`BikeShareError::InvalidValue`] for null values or negative hours.
    pub fn collect_hourly(&self) -> Result<Vec<HourlyRecord>, BikeShareError> {
        let df = self.collect()?;
        let dates = date_values(&df, columns::DATE)?;
        let hours = u32_values(&df, columns::HOUR)?;
        let totals = i64_values(&df, columns::TOTAL_USERS)?;

        Ok(dates
            .into_iter()
            .zip(hours)
            .zip(totals)
            .map(|((date, hour), total_users)| HourlyRecord {
                date,
                hour,
                total_users,
            })
            .collect())
    }
}
