pub mod daily_frame;
pub mod hourly_frame;

use crate::error::BikeShareError;
use crate::utils::days_to_date;
use chrono::NaiveDate;
use polars::prelude::{Column, DataFrame};

fn get_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, BikeShareError> {
    df.column(name).map_err(|e| BikeShareError::ColumnType {
        column: name.to_string(),
        source: e,
    })
}

fn null_in(name: &str) -> BikeShareError {
    BikeShareError::InvalidValue {
        column: name.to_string(),
        message: "null value".to_string(),
    }
}

pub(crate) fn date_values(df: &DataFrame, name: &str) -> Result<Vec<NaiveDate>, BikeShareError> {
    let ca = get_column(df, name)?
        .date()
        .map_err(|e| BikeShareError::ColumnType {
            column: name.to_string(),
            source: e,
        })?;
    ca.into_iter()
        .map(|days| {
            let days = days.ok_or_else(|| null_in(name))?;
            days_to_date(days).ok_or_else(|| BikeShareError::InvalidValue {
                column: name.to_string(),
                message: format!("{} days from epoch is not a valid date", days),
            })
        })
        .collect()
}

pub(crate) fn i64_values(df: &DataFrame, name: &str) -> Result<Vec<i64>, BikeShareError> {
    let ca = get_column(df, name)?
        .i64()
        .map_err(|e| BikeShareError::ColumnType {
            column: name.to_string(),
            source: e,
        })?;
    ca.into_iter()
        .map(|v| v.ok_or_else(|| null_in(name)))
        .collect()
}

pub(crate) fn u32_values(df: &DataFrame, name: &str) -> Result<Vec<u32>, BikeShareError> {
    i64_values(df, name)?
        .into_iter()
        .map(|v| {
            u32::try_from(v).map_err(|_| BikeShareError::InvalidValue {
                column: name.to_string(),
                message: format!("{} does not fit an hour of the day", v),
            })
        })
        .collect()
}

pub(crate) fn f64_values(df: &DataFrame, name: &str) -> Result<Vec<f64>, BikeShareError> {
    let ca = get_column(df, name)?
        .f64()
        .map_err(|e| BikeShareError::ColumnType {
            column: name.to_string(),
            source: e,
        })?;
    ca.into_iter()
        .map(|v| v.ok_or_else(|| null_in(name)))
        .collect()
}

pub(crate) fn string_values(df: &DataFrame, name: &str) -> Result<Vec<String>, BikeShareError> {
    let ca = get_column(df, name)?
        .str()
        .map_err(|e| BikeShareError::ColumnType {
            column: name.to_string(),
            source: e,
        })?;
    ca.into_iter()
        .map(|v| v.map(str::to_string).ok_or_else(|| null_in(name)))
        .collect()
}
