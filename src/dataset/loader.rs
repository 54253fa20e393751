use crate::dataset::error::LoadError;
use crate::types::dataset_kind::{columns, DatasetKind};
use crate::types::weather_condition::{Season, WeatherCondition};
use crate::utils::InputFormat;
use bon::Builder;
use log::{debug, info, warn};
use polars::prelude::*;
use std::path::Path;

/// Reads bike-sharing datasets from disk and normalizes them into the shape the
/// rest of the pipeline relies on: a `Date` column of type `Date`, `Int64` counts,
/// text category labels and rows sorted ascending by date.
#[derive(Debug, Clone, Default, Builder)]
pub struct DatasetLoader {
    /// Reject datasets whose rows break the count or hour invariants instead of
    /// only logging a warning.
    #[builder(default)]
    strict_validation: bool,
}

impl DatasetLoader {
    pub fn new() -> DatasetLoader {
        DatasetLoader::default()
    }

    pub fn is_strict(&self) -> bool {
        self.strict_validation
    }

    /// Loads and normalizes one dataset. The format is picked from the file extension
    /// (`.parquet`/`.pq` for parquet, CSV with a header row otherwise).
    pub fn load(&self, path: &Path, kind: DatasetKind) -> Result<DataFrame, LoadError> {
        if let Err(e) = std::fs::metadata(path) {
            return Err(if e.kind() == std::io::ErrorKind::NotFound {
                LoadError::FileNotFound(path.to_path_buf())
            } else {
                LoadError::FileMetadata(path.to_path_buf(), e)
            });
        }

        let raw = match InputFormat::from_path(path) {
            InputFormat::Csv => Self::read_csv(path)?,
            InputFormat::Parquet => Self::read_parquet(path)?,
        };
        info!(
            "Read {} rows of {} data from {:?}",
            raw.height(),
            kind,
            path
        );

        self.normalize(raw, kind)
    }

    fn read_csv(path: &Path) -> Result<DataFrame, LoadError> {
        CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .map_err(|e| LoadError::CsvRead {
                path: path.to_path_buf(),
                source: e,
            })?
            .finish()
            .map_err(|e| LoadError::CsvRead {
                path: path.to_path_buf(),
                source: e,
            })
    }

    fn read_parquet(path: &Path) -> Result<DataFrame, LoadError> {
        LazyFrame::scan_parquet(path, Default::default())
            .and_then(|frame| frame.collect())
            .map_err(|e| LoadError::ParquetScan(path.to_path_buf(), e))
    }

    /// Normalizes an in-memory frame the same way [`DatasetLoader::load`] does.
    ///
    /// Extra columns are kept untouched. The sort is stable, so rows sharing a date
    /// keep their relative order.
    ///
    /// # Errors
    ///
    /// * [`LoadError::MissingColumn`] if a column required for `kind` is absent.
    /// * [`LoadError::UnsupportedDateType`] if `Date` is neither a date, a datetime nor text.
    /// * [`LoadError::Normalization`] if casting or date parsing fails.
    /// * [`LoadError::NullValues`] if a required column has empty or unreadable cells.
    /// * [`LoadError::Validation`] if strict validation is enabled and a row breaks an invariant.
    pub fn normalize(&self, df: DataFrame, kind: DatasetKind) -> Result<DataFrame, LoadError> {
        for column in kind.required_columns() {
            if df.column(column).is_err() {
                warn!("Column '{}' missing from {} data", column, kind);
                return Err(LoadError::MissingColumn {
                    dataset: kind,
                    column: column.to_string(),
                });
            }
        }

        let mut exprs = vec![Self::date_expr(&df, kind)?];
        exprs.extend(
            kind.integer_columns()
                .into_iter()
                .map(|column| col(column).cast(DataType::Int64)),
        );
        if kind == DatasetKind::Daily {
            let weather_codes: Vec<(i64, &'static str)> = WeatherCondition::ALL
                .iter()
                .map(|c| (*c as i64, c.label()))
                .collect();
            let season_codes: Vec<(i64, &'static str)> =
                Season::ALL.iter().map(|s| (*s as i64, s.label())).collect();
            exprs.push(Self::label_expr(
                &df,
                columns::WEATHER_CONDITION,
                &weather_codes,
            ));
            exprs.push(Self::label_expr(&df, columns::SEASON, &season_codes));
        }

        let normalized = df
            .lazy()
            .with_columns(exprs)
            .sort(
                [columns::DATE],
                SortMultipleOptions::default().with_maintain_order(true),
            )
            .collect()
            .map_err(|e| LoadError::Normalization {
                dataset: kind,
                source: e,
            })?;

        self.validate(&normalized, kind)?;
        debug!("Normalized {} data: {:?}", kind, normalized.schema());
        Ok(normalized)
    }

    fn date_expr(df: &DataFrame, kind: DatasetKind) -> Result<Expr, LoadError> {
        let dtype = df
            .column(columns::DATE)
            .map_err(|_| LoadError::MissingColumn {
                dataset: kind,
                column: columns::DATE.to_string(),
            })?
            .dtype()
            .clone();

        match dtype {
            DataType::Date => Ok(col(columns::DATE)),
            DataType::Datetime(_, _) => Ok(col(columns::DATE).cast(DataType::Date)),
            DataType::String if Self::text_has_time(df) => Ok(col(columns::DATE)
                .str()
                .to_datetime(None, None, StrptimeOptions::default(), lit("raise"))
                .cast(DataType::Date)
                .alias(columns::DATE)),
            DataType::String => Ok(col(columns::DATE)
                .str()
                .to_date(StrptimeOptions::default())
                .alias(columns::DATE)),
            other => Err(LoadError::UnsupportedDateType {
                dataset: kind,
                dtype: other.to_string(),
            }),
        }
    }

    /// Format inference runs on the first non-null value, so a timestamp such as
    /// `2011-01-01 00:00:00` has to be parsed as a datetime and truncated.
    fn text_has_time(df: &DataFrame) -> bool {
        df.column(columns::DATE)
            .ok()
            .and_then(|c| c.str().ok())
            .and_then(|ca| ca.into_iter().flatten().next().map(|s| s.trim().len() > 10))
            .unwrap_or(false)
    }

    /// Integer category columns are mapped code -> label; unknown codes keep their
    /// decimal text. Text columns pass through.
    fn label_expr(df: &DataFrame, column: &str, codes: &[(i64, &'static str)]) -> Expr {
        let is_code = df
            .column(column)
            .map(|c| c.dtype().is_integer())
            .unwrap_or(false);
        let as_text = col(column).cast(DataType::String);
        if !is_code {
            return as_text;
        }

        codes
            .iter()
            .rev()
            .fold(as_text, |otherwise, (code, label)| {
                when(col(column).eq(lit(*code)))
                    .then(lit(*label))
                    .otherwise(otherwise)
            })
            .alias(column)
    }

    fn validate(&self, df: &DataFrame, kind: DatasetKind) -> Result<(), LoadError> {
        for column in kind.required_columns() {
            let count = df.column(column).map(|c| c.null_count()).unwrap_or(0);
            if count > 0 {
                warn!(
                    "{} empty or unreadable value(s) in column '{}' of {} data",
                    count, column, kind
                );
                return Err(LoadError::NullValues {
                    dataset: kind,
                    column: column.to_string(),
                    count,
                });
            }
        }

        let (predicate, message) = match kind {
            DatasetKind::Daily => (
                (col(columns::REGISTERED_USERS) + col(columns::CASUAL_USERS))
                    .neq(col(columns::TOTAL_USERS)),
                "have registered + casual users different from total users",
            ),
            DatasetKind::Hourly => (
                col(columns::HOUR)
                    .lt(lit(0i64))
                    .or(col(columns::HOUR).gt(lit(23i64))),
                "have an hour outside 0-23",
            ),
        };

        let count = df
            .clone()
            .lazy()
            .filter(predicate)
            .collect()
            .map_err(|e| LoadError::Normalization {
                dataset: kind,
                source: e,
            })?
            .height();

        if count == 0 {
            return Ok(());
        }
        if self.strict_validation {
            return Err(LoadError::Validation {
                dataset: kind,
                count,
                message: message.to_string(),
            });
        }
        warn!("{} row(s) of {} data {}", count, kind, message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{write_fixture, DAILY_CSV, HOURLY_CSV};
    use crate::utils::days_to_date;
    use chrono::NaiveDate;
    use std::fs::File;

    fn collect_dates(df: &DataFrame) -> Result<Vec<NaiveDate>, Box<dyn std::error::Error>> {
        let dates = df
            .column(columns::DATE)?
            .date()?
            .into_iter()
            .map(|days| days.and_then(days_to_date).expect("null date after load"))
            .collect();
        Ok(dates)
    }

    #[test]
    fn test_load_daily_sorts_and_parses_dates() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = write_fixture(dir.path(), "day_clean.csv", DAILY_CSV)?;

        let df = DatasetLoader::new().load(&path, DatasetKind::Daily)?;

        assert_eq!(df.height(), 5);
        assert_eq!(df.column(columns::DATE)?.dtype(), &DataType::Date);
        assert_eq!(df.column(columns::TOTAL_USERS)?.dtype(), &DataType::Int64);

        let dates = collect_dates(&df)?;
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted, "daily rows should be sorted by date");
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        Ok(())
    }

    #[test]
    fn test_load_hourly_keeps_order_within_a_day() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = write_fixture(dir.path(), "hour_clean.csv", HOURLY_CSV)?;

        let df = DatasetLoader::new().load(&path, DatasetKind::Hourly)?;

        let hours: Vec<Option<i64>> = df.column(columns::HOUR)?.i64()?.into_iter().collect();
        // 2011-01-01 rows appear before 2011-01-02 rows, each day in file order.
        assert_eq!(
            hours,
            vec![Some(0), Some(1), Some(13), Some(0), Some(13), Some(23)]
        );
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let result =
            DatasetLoader::new().load(Path::new("/nonexistent/day_clean.csv"), DatasetKind::Daily);
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_load_missing_column() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = write_fixture(
            dir.path(),
            "day_clean.csv",
            "Date,Total Users,Registered Users,Casual Users,Weather Condition\n\
             2011-01-01,10,6,4,Clear\n",
        )?;

        let result = DatasetLoader::new().load(&path, DatasetKind::Daily);
        match result {
            Err(LoadError::MissingColumn { dataset, column }) => {
                assert_eq!(dataset, DatasetKind::Daily);
                assert_eq!(column, "Season");
            }
            other => panic!("expected MissingColumn, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_integer_category_codes_become_labels() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = write_fixture(
            dir.path(),
            "day_raw.csv",
            "Date,Total Users,Registered Users,Casual Users,Weather Condition,Season\n\
             2011-01-01,10,6,4,1,1\n\
             2011-01-02,20,15,5,2,4\n\
             2011-01-03,30,20,10,9,3\n",
        )?;

        let df = DatasetLoader::new().load(&path, DatasetKind::Daily)?;

        let weather: Vec<Option<&str>> = df
            .column(columns::WEATHER_CONDITION)?
            .str()?
            .into_iter()
            .collect();
        assert_eq!(weather, vec![Some("Clear"), Some("Misty"), Some("9")]);
        let seasons: Vec<Option<&str>> = df.column(columns::SEASON)?.str()?.into_iter().collect();
        assert_eq!(seasons, vec![Some("Spring"), Some("Winter"), Some("Fall")]);
        Ok(())
    }

    #[test]
    fn test_strict_rejects_inconsistent_counts() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = write_fixture(
            dir.path(),
            "day_clean.csv",
            "Date,Total Users,Registered Users,Casual Users,Weather Condition,Season\n\
             2011-01-01,10,6,4,Clear,Spring\n\
             2011-01-02,99,15,5,Misty,Spring\n",
        )?;

        let lenient = DatasetLoader::new().load(&path, DatasetKind::Daily)?;
        assert_eq!(lenient.height(), 2);

        let strict = DatasetLoader::builder().strict_validation(true).build();
        assert!(strict.is_strict());
        match strict.load(&path, DatasetKind::Daily) {
            Err(LoadError::Validation { dataset, count, .. }) => {
                assert_eq!(dataset, DatasetKind::Daily);
                assert_eq!(count, 1);
            }
            other => panic!("expected Validation error, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_strict_rejects_hour_out_of_range() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = write_fixture(
            dir.path(),
            "hour_clean.csv",
            "Date,Hour,Total Users\n2011-01-01,0,16\n2011-01-01,24,3\n",
        )?;

        let strict = DatasetLoader::builder().strict_validation(true).build();
        assert!(matches!(
            strict.load(&path, DatasetKind::Hourly),
            Err(LoadError::Validation { count: 1, .. })
        ));
        Ok(())
    }

    #[test]
    fn test_load_parquet() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let csv_path = write_fixture(dir.path(), "hour_clean.csv", HOURLY_CSV)?;
        let mut df = DatasetLoader::new().load(&csv_path, DatasetKind::Hourly)?;

        let parquet_path = dir.path().join("hour_clean.parquet");
        ParquetWriter::new(File::create(&parquet_path)?).finish(&mut df)?;

        let reloaded = DatasetLoader::new().load(&parquet_path, DatasetKind::Hourly)?;
        assert!(reloaded.equals(&df));
        Ok(())
    }

    #[test]
    fn test_normalize_rejects_unsupported_date_type() -> Result<(), Box<dyn std::error::Error>> {
        let df = df!(
            "Date" => [1.5f64],
            "Hour" => [1i64],
            "Total Users" => [3i64]
        )?;
        assert!(matches!(
            DatasetLoader::new().normalize(df, DatasetKind::Hourly),
            Err(LoadError::UnsupportedDateType { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_load_timestamp_text_dates() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = write_fixture(
            dir.path(),
            "hour_clean.csv",
            "Date,Hour,Total Users\n2011-01-02 00:00:00,0,5\n2011-01-01 00:00:00,1,40\n",
        )?;

        let df = DatasetLoader::new().load(&path, DatasetKind::Hourly)?;

        assert_eq!(df.column(columns::DATE)?.dtype(), &DataType::Date);
        assert_eq!(
            collect_dates(&df)?,
            vec![
                NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2011, 1, 2).unwrap(),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_normalize_truncates_datetimes() -> Result<(), Box<dyn std::error::Error>> {
        let times = [
            NaiveDate::from_ymd_opt(2011, 1, 2)
                .and_then(|d| d.and_hms_opt(17, 45, 0))
                .unwrap(),
            NaiveDate::from_ymd_opt(2011, 1, 1)
                .and_then(|d| d.and_hms_opt(8, 30, 15))
                .unwrap(),
        ];
        let df = df!(
            "Date" => times,
            "Hour" => [17i64, 8],
            "Total Users" => [30i64, 12]
        )?;
        assert!(matches!(
            df.column(columns::DATE)?.dtype(),
            DataType::Datetime(_, _)
        ));

        let normalized = DatasetLoader::new().normalize(df, DatasetKind::Hourly)?;

        assert_eq!(normalized.column(columns::DATE)?.dtype(), &DataType::Date);
        assert_eq!(
            collect_dates(&normalized)?,
            vec![
                NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2011, 1, 2).unwrap(),
            ]
        );
        let hours: Vec<Option<i64>> = normalized
            .column(columns::HOUR)?
            .i64()?
            .into_iter()
            .collect();
        assert_eq!(hours, vec![Some(8), Some(17)]);
        Ok(())
    }

    #[test]
    fn test_load_rejects_empty_count_cells() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = write_fixture(
            dir.path(),
            "day_clean.csv",
            "Date,Total Users,Registered Users,Casual Users,Weather Condition,Season\n\
             2011-01-01,10,6,4,Clear,Spring\n\
             2011-01-02,,15,5,Misty,Spring\n",
        )?;

        match DatasetLoader::new().load(&path, DatasetKind::Daily) {
            Err(LoadError::NullValues {
                dataset,
                column,
                count,
            }) => {
                assert_eq!(dataset, DatasetKind::Daily);
                assert_eq!(column, "Total Users");
                assert_eq!(count, 1);
            }
            other => panic!("expected NullValues, got {:?}", other),
        }
        Ok(())
    }
}
