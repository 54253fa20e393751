//! demos/dashboard.rs
//!
//! Renders the five dashboard charts for the full date range with `plotlars`.
//! Each chart opens in the browser.
//!
//! To run this example from a directory holding `day_clean.csv` and `hour_clean.csv`:
//! cargo run --example dashboard --features charts

use std::error::Error;

use bikeshare::{columns, BikeShare, DashboardConfig, DashboardView};
use plotlars::{BarPlot, LinePlot, Plot, Rgb, Text, TimeSeriesPlot};
use polars::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let dashboard = BikeShare::from_config(&DashboardConfig::default())?;
    let view = dashboard.view().call()?;

    for widget in view.metrics.widgets() {
        println!("{}", widget);
    }
    if view.is_empty() {
        println!("No data in the selected range, nothing to plot.");
        return Ok(());
    }

    plot_daily_trend(&view);
    plot_user_share(&view)?;
    plot_by_category(
        &view.users_by_weather,
        columns::WEATHER_CONDITION,
        "Perbedaan Jumlah Penyewa Sepeda Berdasarkan Kondisi Cuaca",
        "Kondisi Cuaca",
    );
    plot_by_category(
        &view.users_by_season,
        columns::SEASON,
        "Perbedaan Jumlah Penyewa Sepeda Berdasarkan Musim",
        "Musim",
    );
    plot_hourly_trend(&view);

    Ok(())
}

// --- Plotting Helper Functions ---

fn plot_daily_trend(view: &DashboardView) {
    TimeSeriesPlot::builder()
        .data(&view.daily_users)
        .x(columns::DATE)
        .y(columns::TOTAL_USERS)
        .colors(vec![Rgb(144, 202, 249)])
        .plot_title(Text::from("Tren Penyewaan Sepeda").size(24))
        .x_title("Periode")
        .y_title("Jumlah Penyewa")
        .build()
        .plot();
}

/// Registered vs casual users, with the share in each bar label.
fn plot_user_share(view: &DashboardView) -> Result<(), Box<dyn Error>> {
    let (registered_label, casual_label) = match view.user_share() {
        Some(share) => share.labels(),
        None => return Ok(()),
    };
    let data = df!(
        "User Type" => [
            format!("Registered Users ({})", registered_label),
            format!("Casual Users ({})", casual_label),
        ],
        "Users" => [
            view.metrics.registered_sum as f64,
            view.metrics.casual_sum as f64,
        ]
    )?;

    BarPlot::builder()
        .data(&data)
        .labels("User Type")
        .values("Users")
        .plot_title(Text::from("Registered vs Casual Users").size(18))
        .build()
        .plot();
    Ok(())
}

fn plot_by_category(data: &DataFrame, key: &str, title: &str, x_title: &str) {
    BarPlot::builder()
        .data(data)
        .labels(key)
        .values(columns::TOTAL_USERS)
        .plot_title(Text::from(title).size(20))
        .x_title(x_title)
        .y_title("Jumlah Penyewa (Ribuan)")
        .build()
        .plot();
}

fn plot_hourly_trend(view: &DashboardView) {
    LinePlot::builder()
        .data(&view.users_by_hour)
        .x(columns::HOUR)
        .y(columns::TOTAL_USERS)
        .plot_title(Text::from("Tren Penyewaan Sepeda Berdasarkan Jam").size(18))
        .x_title("Jam")
        .y_title("Jumlah Penyewa (Ribuan)")
        .build()
        .plot();
}
