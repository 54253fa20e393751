use chrono::NaiveDate;

/// One row of the daily dataset.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub total_users: i64,
    pub registered_users: i64,
    pub casual_users: i64,
    pub weather_condition: String,
    pub season: String,
}

impl DailyRecord {
    /// Checks that registered and casual users add up to the total.
    pub fn is_consistent(&self) -> bool {
        self.registered_users + self.casual_users == self.total_users
    }
}

/// One row of the hourly dataset.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct HourlyRecord {
    pub date: NaiveDate,
    pub hour: u32,
    pub total_users: i64,
}

/// Users summed over one category (weather condition or season), in thousands.
#[derive(Debug, PartialEq, Clone)]
pub struct CategoryUsers {
    pub label: String,
    pub thousands: f64,
}

/// Users summed over one hour of the day, in thousands.
#[derive(Debug, PartialEq, Clone)]
pub struct HourUsers {
    pub hour: u32,
    pub thousands: f64,
}

/// Inclusive date range covered by a dataset.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateBounds {
    /// Checks whether `date` lies within the bounds (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_record_consistency() {
        let mut record = DailyRecord {
            date: NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
            total_users: 985,
            registered_users: 654,
            casual_users: 331,
            weather_condition: "Misty".to_string(),
            season: "Spring".to_string(),
        };
        assert!(record.is_consistent());
        record.casual_users = 0;
        assert!(!record.is_consistent());
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let bounds = DateBounds {
            min: NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
            max: NaiveDate::from_ymd_opt(2012, 12, 31).unwrap(),
        };
        assert!(bounds.contains(bounds.min));
        assert!(bounds.contains(bounds.max));
        assert!(!bounds.contains(NaiveDate::from_ymd_opt(2013, 1, 1).unwrap()));
    }
}
