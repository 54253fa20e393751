pub mod aggregation;
mod config;
mod dashboard;
mod dataset;
mod error;
pub mod filtering;
mod metrics;
mod types;
mod utils;

#[cfg(test)]
mod test_support;

pub use config::DashboardConfig;
pub use dashboard::*;
pub use error::{BikeShareError, ConfigError};

pub use dataset::error::LoadError;
pub use dataset::loader::DatasetLoader;
pub use filtering::BikeFrameFilterExt;
pub use metrics::{MetricWidget, SummaryMetrics, UserShare};

pub use types::dataset_kind::{columns, DatasetKind};
pub use types::frames::daily_frame::DailyLazyFrame;
pub use types::frames::hourly_frame::HourlyLazyFrame;
pub use types::records::{CategoryUsers, DailyRecord, DateBounds, HourUsers, HourlyRecord};
pub use types::weather_condition::{Season, WeatherCondition};
