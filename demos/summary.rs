//! Prints the dashboard for a date range to the terminal.
//!
//! To run this example from a directory holding `day_clean.csv` and `hour_clean.csv`:
//! RUST_LOG=info cargo run --example summary -- 2011-01-01 2011-12-31

use bikeshare::{BikeShare, DashboardConfig};
use chrono::NaiveDate;
use std::env;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    configure_polars_display();

    let args: Vec<String> = env::args().skip(1).collect();
    let start = args.first().map(|s| s.parse::<NaiveDate>()).transpose()?;
    let end = args.get(1).map(|s| s.parse::<NaiveDate>()).transpose()?;

    let dashboard = BikeShare::from_config(&DashboardConfig::default())?;
    if let Some(bounds) = dashboard.date_bounds() {
        println!("Data available from {} to {}", bounds.min, bounds.max);
    }

    let view = dashboard.view().maybe_start(start).maybe_end(end).call()?;

    println!("\nBike Sharing Dashboard ({} to {})", view.start, view.end);
    for widget in view.metrics.widgets() {
        println!("  {}", widget);
    }

    match view.user_share() {
        Some(share) => {
            let (registered, casual) = share.labels();
            println!("\nRegistered vs Casual Users: {} / {}", registered, casual);
        }
        None => println!("\nRegistered vs Casual Users: no users in range"),
    }

    println!("\nUsers by weather condition (thousands):");
    for row in view.weather_users()? {
        println!("  {:<12} {:>10.3}", row.label, row.thousands);
    }

    println!("\nUsers by season (thousands):");
    for row in view.season_users()? {
        println!("  {:<12} {:>10.3}", row.label, row.thousands);
    }

    println!("\nUsers by hour (thousands):");
    println!("{}", view.users_by_hour);

    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    // one row per hour of the day
    env::set_var("POLARS_FMT_MAX_ROWS", "24");
}
