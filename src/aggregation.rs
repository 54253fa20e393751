//! The transformations that turn a filtered dataset into the frames behind each
//! dashboard widget.
//!
//! Projections (`daily_users`, `registered_users`, `casual_users`) keep row order
//! and values. Groupings (`users_by_weather`, `users_by_season`, `users_by_hour`)
//! sum `Total Users` per key, divide by 1000 and sort by key. Keys absent from
//! the input are absent from the output.

use crate::error::BikeShareError;
use crate::types::dataset_kind::columns;
use crate::types::frames::daily_frame::DailyLazyFrame;
use crate::types::frames::hourly_frame::HourlyLazyFrame;
use crate::types::frames::{f64_values, string_values, u32_values};
use crate::types::records::{CategoryUsers, HourUsers};
use polars::prelude::*;

/// Grouped sums are reported in thousands of users.
pub const USERS_SCALE: f64 = 1_000.0;

/// `{Date, Total Users}` for the daily trend line.
pub fn daily_users(daily: &DailyLazyFrame) -> LazyFrame {
    project(daily, columns::TOTAL_USERS)
}

/// `{Date, Registered Users}`.
pub fn registered_users(daily: &DailyLazyFrame) -> LazyFrame {
    project(daily, columns::REGISTERED_USERS)
}

/// `{Date, Casual Users}`.
pub fn casual_users(daily: &DailyLazyFrame) -> LazyFrame {
    project(daily, columns::CASUAL_USERS)
}

/// `{Weather Condition, Total Users}` with totals in thousands.
pub fn users_by_weather(daily: &DailyLazyFrame) -> LazyFrame {
    scaled_sum_by(daily.frame.clone(), columns::WEATHER_CONDITION)
}

/// `{Season, Total Users}` with totals in thousands.
pub fn users_by_season(daily: &DailyLazyFrame) -> LazyFrame {
    scaled_sum_by(daily.frame.clone(), columns::SEASON)
}

/// `{Hour, Total Users}` with totals in thousands, hours ascending.
pub fn users_by_hour(hourly: &HourlyLazyFrame) -> LazyFrame {
    scaled_sum_by(hourly.frame.clone(), columns::HOUR)
}

fn project(daily: &DailyLazyFrame, column: &str) -> LazyFrame {
    daily
        .frame
        .clone()
        .select([col(columns::DATE), col(column)])
}

fn scaled_sum_by(frame: LazyFrame, key: &str) -> LazyFrame {
    frame
        .group_by([col(key)])
        .agg([col(columns::TOTAL_USERS).sum()])
        .with_column(
            (col(columns::TOTAL_USERS).cast(DataType::Float64) / lit(USERS_SCALE))
                .alias(columns::TOTAL_USERS),
        )
        .sort([key], SortMultipleOptions::default())
}

/// Reads a collected weather or season grouping into typed rows.
///
/// `key` is the category column of `grouped` ([`columns::WEATHER_CONDITION`] or
/// [`columns::SEASON`]).
pub fn category_users(
    grouped: &DataFrame,
    key: &str,
) -> Result<Vec<CategoryUsers>, BikeShareError> {
    let labels = string_values(grouped, key)?;
    let thousands = f64_values(grouped, columns::TOTAL_USERS)?;
    Ok(labels
        .into_iter()
        .zip(thousands)
        .map(|(label, thousands)| CategoryUsers { label, thousands })
        .collect())
}

/// Reads a collected hour grouping into typed rows.
pub fn hour_users(grouped: &DataFrame) -> Result<Vec<HourUsers>, BikeShareError> {
    let hours = u32_values(grouped, columns::HOUR)?;
    let thousands = f64_values(grouped, columns::TOTAL_USERS)?;
    Ok(hours
        .into_iter()
        .zip(thousands)
        .map(|(hour, thousands)| HourUsers { hour, thousands })
        .collect())
}
