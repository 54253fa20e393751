//! Shared fixtures for unit tests.

use std::io::Write;
use std::path::{Path, PathBuf};

/// Five days of daily data, deliberately out of date order.
///
/// Totals: 1500 users (1120 registered, 380 casual).
/// By weather: Clear 800, Misty 200, Light Rain 500.
/// By season: Spring 600, Summer 900.
pub(crate) const DAILY_CSV: &str = "\
Date,Total Users,Registered Users,Casual Users,Weather Condition,Season
2011-01-03,300,200,100,Clear,Spring
2011-01-01,100,70,30,Clear,Spring
2011-01-05,500,400,100,Light Rain,Summer
2011-01-02,200,150,50,Misty,Spring
2011-01-04,400,300,100,Clear,Summer
";

/// Six hourly rows over two days, out of date order.
///
/// By hour: 0 -> 21, 1 -> 40, 13 -> 200, 23 -> 10.
pub(crate) const HOURLY_CSV: &str = "\
Date,Hour,Total Users
2011-01-02,0,5
2011-01-01,0,16
2011-01-02,13,80
2011-01-01,1,40
2011-01-01,13,120
2011-01-02,23,10
";

pub(crate) fn write_fixture(dir: &Path, name: &str, contents: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(path)
}
