use crate::types::dataset_kind::columns;
use chrono::NaiveDate;
use polars::prelude::{col, lit, LazyFrame};

pub trait BikeFrameFilterExt {
    /// Filters a LazyFrame to rows whose `Date` lies in `[start, end]` (inclusive).
    /// Assumes the `Date` column has already been normalized to `DataType::Date`.
    ///
    /// Row order is preserved. When `start > end` the result is empty.
    ///
    /// # Returns
    /// A new `LazyFrame` with the filter applied. Errors surface on `collect`.
    fn filter_date_range(self, start: NaiveDate, end: NaiveDate) -> LazyFrame;

    /// Filters a LazyFrame to the rows of a single date.
    fn filter_on_date(self, date: NaiveDate) -> LazyFrame;
}

impl BikeFrameFilterExt for LazyFrame {
    fn filter_date_range(self, start: NaiveDate, end: NaiveDate) -> LazyFrame {
        self.filter(
            col(columns::DATE)
                .gt_eq(lit(start))
                .and(col(columns::DATE).lt_eq(lit(end))),
        )
    }

    fn filter_on_date(self, date: NaiveDate) -> LazyFrame {
        self.filter(col(columns::DATE).eq(lit(date)))
    }
}
