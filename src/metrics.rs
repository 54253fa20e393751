//! Scalar summary statistics shown above the dashboard charts.

use crate::error::BikeShareError;
use crate::types::dataset_kind::columns;
use crate::types::frames::i64_values;
use crate::utils::round_2dp;
use polars::prelude::DataFrame;
use std::fmt;

/// The four headline numbers of the dashboard for one date selection.
///
/// On an empty selection the sums are `0` and `avg_per_day` is `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryMetrics {
    pub total_sum: i64,
    pub registered_sum: i64,
    pub casual_sum: i64,
    /// Mean daily total, rounded to 2 decimals (half away from zero).
    /// `None` when the selection holds no days.
    pub avg_per_day: Option<f64>,
}

impl SummaryMetrics {
    /// Computes the metrics from the outputs of [`crate::aggregation::daily_users`],
    /// [`crate::aggregation::registered_users`] and [`crate::aggregation::casual_users`].
    ///
    /// # Errors
    ///
    /// Returns [`BikeShareError::ColumnType`] if a frame lacks its `Int64` user column,
    /// or [`BikeShareError::InvalidValue`] if it contains nulls.
    pub fn from_frames(
        daily_users: &DataFrame,
        registered_users: &DataFrame,
        casual_users: &DataFrame,
    ) -> Result<SummaryMetrics, BikeShareError> {
        let totals = i64_values(daily_users, columns::TOTAL_USERS)?;
        let total_sum: i64 = totals.iter().sum();
        let registered_sum = i64_values(registered_users, columns::REGISTERED_USERS)?
            .into_iter()
            .sum();
        let casual_sum = i64_values(casual_users, columns::CASUAL_USERS)?
            .into_iter()
            .sum();

        let avg_per_day = if totals.is_empty() {
            None
        } else {
            Some(round_2dp(total_sum as f64 / totals.len() as f64))
        };

        Ok(SummaryMetrics {
            total_sum,
            registered_sum,
            casual_sum,
            avg_per_day,
        })
    }

    /// Share of registered vs casual users, for the pie chart labels.
    pub fn user_share(&self) -> Option<UserShare> {
        UserShare::new(self.registered_sum, self.casual_sum)
    }

    /// Label/value pairs for the four metric widgets, in display order.
    ///
    /// ```
    /// use bikeshare::SummaryMetrics;
    ///
    /// let metrics = SummaryMetrics {
    ///     total_sum: 0,
    ///     registered_sum: 0,
    ///     casual_sum: 0,
    ///     avg_per_day: None,
    /// };
    /// let widgets = metrics.widgets();
    /// assert_eq!(widgets[3].label, "Rata-rata Users per Hari");
    /// assert_eq!(widgets[3].value, "N/A");
    /// ```
    pub fn widgets(&self) -> [MetricWidget; 4] {
        [
            MetricWidget::new("Total Users", self.total_sum.to_string()),
            MetricWidget::new("Registered Users", self.registered_sum.to_string()),
            MetricWidget::new("Casual Users", self.casual_sum.to_string()),
            MetricWidget::new(
                "Rata-rata Users per Hari",
                self.avg_per_day
                    .map(|avg| format!("{:.2}", avg))
                    .unwrap_or_else(|| "N/A".to_string()),
            ),
        ]
    }
}

/// One labelled scalar as displayed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricWidget {
    pub label: &'static str,
    pub value: String,
}

impl MetricWidget {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

impl fmt::Display for MetricWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Percentages of registered and casual users among all counted users.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserShare {
    pub registered_pct: f64,
    pub casual_pct: f64,
}

impl UserShare {
    /// Returns `None` when there are no users to share.
    pub fn new(registered: i64, casual: i64) -> Option<UserShare> {
        let total = registered + casual;
        if total == 0 {
            return None;
        }
        Some(UserShare {
            registered_pct: registered as f64 * 100.0 / total as f64,
            casual_pct: casual as f64 * 100.0 / total as f64,
        })
    }

    /// Pie labels formatted with one decimal, e.g. `"74.7%"`.
    pub fn labels(&self) -> (String, String) {
        (
            format!("{:.1}%", self.registered_pct),
            format!("{:.1}%", self.casual_pct),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn frames(
        dates: &[&str],
        total: &[i64],
        registered: &[i64],
        casual: &[i64],
    ) -> PolarsResult<(DataFrame, DataFrame, DataFrame)> {
        Ok((
            df!("Date" => dates, "Total Users" => total)?,
            df!("Date" => dates, "Registered Users" => registered)?,
            df!("Date" => dates, "Casual Users" => casual)?,
        ))
    }

    #[test]
    fn test_metrics_for_two_days() -> Result<(), Box<dyn std::error::Error>> {
        let (total, registered, casual) = frames(
            &["2021-01-01", "2021-01-02"],
            &[100, 200],
            &[70, 150],
            &[30, 50],
        )?;

        let metrics = SummaryMetrics::from_frames(&total, &registered, &casual)?;

        assert_eq!(metrics.total_sum, 300);
        assert_eq!(metrics.registered_sum, 220);
        assert_eq!(metrics.casual_sum, 80);
        assert_eq!(metrics.registered_sum + metrics.casual_sum, metrics.total_sum);
        assert_eq!(metrics.avg_per_day, Some(150.0));
        assert_eq!(metrics.widgets()[3].value, "150.00");
        Ok(())
    }

    #[test]
    fn test_average_is_rounded_to_two_decimals() -> Result<(), Box<dyn std::error::Error>> {
        let (total, registered, casual) = frames(
            &["2021-01-01", "2021-01-02", "2021-01-03"],
            &[100, 100, 101],
            &[100, 100, 101],
            &[0, 0, 0],
        )?;

        let metrics = SummaryMetrics::from_frames(&total, &registered, &casual)?;
        assert_eq!(metrics.avg_per_day, Some(100.33));
        Ok(())
    }

    #[test]
    fn test_empty_selection_uses_sentinels() -> Result<(), Box<dyn std::error::Error>> {
        let (total, registered, casual) = frames(&[], &[], &[], &[])?;

        let metrics = SummaryMetrics::from_frames(&total, &registered, &casual)?;

        assert_eq!(metrics.total_sum, 0);
        assert_eq!(metrics.registered_sum, 0);
        assert_eq!(metrics.casual_sum, 0);
        assert_eq!(metrics.avg_per_day, None);
        assert_eq!(metrics.user_share(), None);
        Ok(())
    }

    #[test]
    fn test_user_share_labels() {
        let share = UserShare::new(3, 1).unwrap();
        assert_eq!(share.registered_pct, 75.0);
        assert_eq!(share.labels(), ("75.0%".to_string(), "25.0%".to_string()));
    }

    #[test]
    fn test_widget_display() {
        let metrics = SummaryMetrics {
            total_sum: 1500,
            registered_sum: 1120,
            casual_sum: 380,
            avg_per_day: Some(300.0),
        };
        let rendered: Vec<String> = metrics.widgets().iter().map(|w| w.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "Total Users: 1500",
                "Registered Users: 1120",
                "Casual Users: 380",
                "Rata-rata Users per Hari: 300.00",
            ]
        );
    }
}
