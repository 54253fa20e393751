//! This module provides the main entry point of the crate: [`BikeShare`], the
//! immutable context holding both loaded datasets, and [`DashboardView`], the
//! data behind every widget for one date selection.

use crate::aggregation;
use crate::config::DashboardConfig;
use crate::dataset::loader::DatasetLoader;
use crate::error::BikeShareError;
use crate::metrics::{SummaryMetrics, UserShare};
use crate::types::dataset_kind::{columns, DatasetKind};
use crate::types::frames::daily_frame::DailyLazyFrame;
use crate::types::frames::hourly_frame::HourlyLazyFrame;
use crate::types::records::{CategoryUsers, DateBounds, HourUsers};
use crate::utils::days_to_date;
use bon::bon;
use chrono::NaiveDate;
use log::{debug, info, warn};
use polars::prelude::{DataFrame, IntoLazy};
use std::path::{Path, PathBuf};

/// The dashboard context: both datasets, loaded and normalized once, then only read.
///
/// Construct it with [`BikeShare::from_config`], [`BikeShare::from_paths`] or
/// [`BikeShare::from_frames`], then call [`BikeShare::view`] for every date
/// selection. Each view owns its derived frames; the context is never modified.
///
/// # Examples
///
/// ```no_run
/// # use bikeshare::{BikeShare, DashboardConfig};
/// # fn main() -> Result<(), bikeshare::BikeShareError> {
/// let dashboard = BikeShare::from_config(&DashboardConfig::default())?;
/// let view = dashboard.view().call()?;
/// for widget in view.metrics.widgets() {
///     println!("{}", widget);
/// }
/// # Ok(())
/// # }
/// ```
pub struct BikeShare {
    daily: DataFrame,
    hourly: DataFrame,
    logo: Option<PathBuf>,
}

#[bon]
impl BikeShare {
    /// Loads both datasets and resolves the branding asset as described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`BikeShareError::Load`] if either dataset is missing, unreadable, lacks a
    /// required column or (with `strict_validation`) fails validation. A missing logo is
    /// only logged.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, BikeShareError> {
        let loader = DatasetLoader::builder()
            .strict_validation(config.strict_validation)
            .build();
        let daily = loader.load(&config.daily_path(), DatasetKind::Daily)?;
        let hourly = loader.load(&config.hourly_path(), DatasetKind::Hourly)?;
        info!(
            "Loaded {} daily and {} hourly rows from {:?}",
            daily.height(),
            hourly.height(),
            config.data_dir
        );

        Ok(Self {
            daily,
            hourly,
            logo: Self::resolve_logo(&config.logo_path()),
        })
    }

    /// Loads both datasets from explicit paths with lenient validation and no logo.
    pub fn from_paths(
        daily: impl AsRef<Path>,
        hourly: impl AsRef<Path>,
    ) -> Result<Self, BikeShareError> {
        let loader = DatasetLoader::new();
        Ok(Self {
            daily: loader.load(daily.as_ref(), DatasetKind::Daily)?,
            hourly: loader.load(hourly.as_ref(), DatasetKind::Hourly)?,
            logo: None,
        })
    }

    /// Builds a context from in-memory frames, normalizing them like loaded files.
    pub fn from_frames(daily: DataFrame, hourly: DataFrame) -> Result<Self, BikeShareError> {
        let loader = DatasetLoader::new();
        Ok(Self {
            daily: loader.normalize(daily, DatasetKind::Daily)?,
            hourly: loader.normalize(hourly, DatasetKind::Hourly)?,
            logo: None,
        })
    }

    fn resolve_logo(path: &Path) -> Option<PathBuf> {
        if path.is_file() {
            Some(path.to_path_buf())
        } else {
            warn!("Logo {:?} not found, dashboard is shown without it", path);
            None
        }
    }

    /// The full daily dataset as a lazy frame.
    pub fn daily(&self) -> DailyLazyFrame {
        DailyLazyFrame::new(self.daily.clone().lazy())
    }

    /// The full hourly dataset as a lazy frame.
    pub fn hourly(&self) -> HourlyLazyFrame {
        HourlyLazyFrame::new(self.hourly.clone().lazy())
    }

    pub fn logo(&self) -> Option<&Path> {
        self.logo.as_deref()
    }

    /// First and last date of the daily dataset: the bounds of the date picker.
    /// `None` when the daily dataset is empty.
    pub fn date_bounds(&self) -> Option<DateBounds> {
        bounds_of(&self.daily)
    }

    /// First and last date of the hourly dataset.
    pub fn hourly_date_bounds(&self) -> Option<DateBounds> {
        bounds_of(&self.hourly)
    }

    /// Computes every dashboard output for the inclusive range `[start, end]`.
    ///
    /// Both bounds default to the daily dataset's [`BikeShare::date_bounds`], so
    /// `view().call()` shows the full range. The range is not validated: a reversed
    /// range produces an empty view, as does a range without data.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use bikeshare::BikeShare;
    /// use chrono::NaiveDate;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let dashboard = BikeShare::from_paths("day_clean.csv", "hour_clean.csv")?;
    ///
    /// let view = dashboard
    ///     .view()
    ///     .start(NaiveDate::from_ymd_opt(2012, 1, 1).unwrap())
    ///     .end(NaiveDate::from_ymd_opt(2012, 12, 31).unwrap())
    ///     .call()?;
    ///
    /// println!("{} users in 2012", view.metrics.total_sum);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BikeShareError::Polars`] if executing one of the queries fails.
    #[builder]
    pub fn view(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<DashboardView, BikeShareError> {
        let fallback = self
            .date_bounds()
            .or_else(|| self.hourly_date_bounds());
        let start = start.or(fallback.map(|b| b.min)).unwrap_or_default();
        let end = end.or(fallback.map(|b| b.max)).unwrap_or_default();

        let daily = self.daily().get_range(start, end);
        let hourly = self.hourly().get_range(start, end);

        let daily_users = aggregation::daily_users(&daily).collect()?;
        let registered_users = aggregation::registered_users(&daily).collect()?;
        let casual_users = aggregation::casual_users(&daily).collect()?;
        let users_by_weather = aggregation::users_by_weather(&daily).collect()?;
        let users_by_season = aggregation::users_by_season(&daily).collect()?;
        let users_by_hour = aggregation::users_by_hour(&hourly).collect()?;
        let metrics = SummaryMetrics::from_frames(&daily_users, &registered_users, &casual_users)?;

        debug!(
            "View {}..={}: {} days, {} hour groups",
            start,
            end,
            daily_users.height(),
            users_by_hour.height()
        );

        Ok(DashboardView {
            start,
            end,
            daily_users,
            registered_users,
            casual_users,
            users_by_weather,
            users_by_season,
            users_by_hour,
            metrics,
        })
    }
}

fn bounds_of(df: &DataFrame) -> Option<DateBounds> {
    let days = df.column(columns::DATE).ok()?.date().ok()?;
    let min = days.into_iter().flatten().min()?;
    let max = days.into_iter().flatten().max()?;
    Some(DateBounds {
        min: days_to_date(min)?,
        max: days_to_date(max)?,
    })
}

/// Everything the presentation layer needs for one date selection.
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// Inclusive start of the selection.
    pub start: NaiveDate,
    /// Inclusive end of the selection.
    pub end: NaiveDate,
    /// `{Date, Total Users}`, one row per selected day.
    pub daily_users: DataFrame,
    /// `{Date, Registered Users}`.
    pub registered_users: DataFrame,
    /// `{Date, Casual Users}`.
    pub casual_users: DataFrame,
    /// `{Weather Condition, Total Users}` in thousands.
    pub users_by_weather: DataFrame,
    /// `{Season, Total Users}` in thousands.
    pub users_by_season: DataFrame,
    /// `{Hour, Total Users}` in thousands.
    pub users_by_hour: DataFrame,
    pub metrics: SummaryMetrics,
}

impl DashboardView {
    /// True when no day falls within the selection.
    pub fn is_empty(&self) -> bool {
        self.daily_users.height() == 0
    }

    pub fn user_share(&self) -> Option<UserShare> {
        self.metrics.user_share()
    }

    pub fn weather_users(&self) -> Result<Vec<CategoryUsers>, BikeShareError> {
        aggregation::category_users(&self.users_by_weather, columns::WEATHER_CONDITION)
    }

    pub fn season_users(&self) -> Result<Vec<CategoryUsers>, BikeShareError> {
        aggregation::category_users(&self.users_by_season, columns::SEASON)
    }

    pub fn hour_users(&self) -> Result<Vec<HourUsers>, BikeShareError> {
        aggregation::hour_users(&self.users_by_hour)
    }
}
