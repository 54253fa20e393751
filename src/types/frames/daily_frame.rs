// daily_frame.rs

//! Contains the `DailyLazyFrame` structure for lazy operations on the daily bike-sharing dataset.

use crate::error::BikeShareError;
use crate::filtering::BikeFrameFilterExt;
use crate::types::dataset_kind::columns;
use crate::types::frames::{date_values, i64_values, string_values};
use crate::types::records::DailyRecord;
use chrono::NaiveDate;
use polars::prelude::{DataFrame, Expr, LazyFrame};

/// A wrapper around a Polars `LazyFrame` holding the normalized daily dataset.
///
/// The frame always has a `Date` column of type `Date` plus the `Total Users`,
/// `Registered Users`, `Casual Users`, `Weather Condition` and `Season` columns.
/// Every method returns a *new* frame; the wrapped data is never modified.
///
/// Instances are obtained via [`crate::BikeShare::daily`].
///
/// # Errors
///
/// Operations that trigger computation (`collect`, `collect_daily`) can return a
/// [`BikeShareError`] if the query fails.
#[derive(Clone)]
pub struct DailyLazyFrame {
    /// The underlying Polars LazyFrame containing the daily data.
    pub frame: LazyFrame,
}

impl DailyLazyFrame {
    /// Creates a new `DailyLazyFrame` wrapping the given `LazyFrame`.
    ///
    /// The frame is assumed to already be normalized by [`crate::DatasetLoader`].
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Filters the daily data based on a Polars predicate expression.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use bikeshare::BikeShare;
    /// use polars::prelude::{col, lit};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let dashboard = BikeShare::from_paths("day_clean.csv", "hour_clean.csv")?;
    ///
    /// // Days with more than 5000 riders
    /// let busy = dashboard.daily().filter(col("Total Users").gt(lit(5000i64)));
    /// println!("{}", busy.collect()?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn filter(&self, predicate: Expr) -> DailyLazyFrame {
        DailyLazyFrame::new(self.frame.clone().filter(predicate))
    }

    /// Filters the daily data to dates within `[start, end]` (inclusive).
    ///
    /// Row order is preserved. A reversed range (`start > end`) yields an empty frame.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use bikeshare::BikeShare;
    /// use chrono::NaiveDate;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let dashboard = BikeShare::from_paths("day_clean.csv", "hour_clean.csv")?;
    /// let start = NaiveDate::from_ymd_opt(2012, 7, 1).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2012, 7, 7).unwrap();
    ///
    /// let week = dashboard.daily().get_range(start, end).collect()?;
    /// println!("First week of July 2012:\n{}", week);
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_range(&self, start: NaiveDate, end: NaiveDate) -> DailyLazyFrame {
        DailyLazyFrame::new(self.frame.clone().filter_date_range(start, end))
    }

    /// Filters the daily data to the record of a single date. Collecting yields zero
    /// or one row for a dataset with one row per day.
    pub fn get_at(&self, date: NaiveDate) -> DailyLazyFrame {
        DailyLazyFrame::new(self.frame.clone().filter_on_date(date))
    }

    /// Executes the query and returns the resulting `DataFrame`.
    pub fn collect(&self) -> Result<DataFrame, BikeShareError> {
        Ok(self.frame.clone().collect()?)
    }

    /// Executes the query and converts every row into a [`DailyRecord`].
    ///
    /// # Errors
    ///
    /// Returns [`BikeShareError::InvalidValue`] if a required column contains nulls.
    pub fn collect_daily(&self) -> Result<Vec<DailyRecord>, BikeShareError> {
        let df = self.collect()?;
        let dates = date_values(&df, columns::DATE)?;
        let total = i64_values(&df, columns::TOTAL_USERS)?;
        let registered = i64_values(&df, columns::REGISTERED_USERS)?;
        let casual = i64_values(&df, columns::CASUAL_USERS)?;
        let weather = string_values(&df, columns::WEATHER_CONDITION)?;
        let season = string_values(&df, columns::SEASON)?;

        Ok(dates
            .into_iter()
            .zip(total)
            .zip(registered)
            .zip(casual)
            .zip(weather)
            .zip(season)
            .map(|(((((date, total), registered), casual), weather), season)| DailyRecord {
                date,
                total_users: total,
                registered_users: registered,
                casual_users: casual,
                weather_condition: weather,
                season,
            })
            .collect())
    }
}
