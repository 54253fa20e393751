//! Defines the `WeatherCondition` enum, mapping the numeric weather situation codes of
//! the raw bike-sharing records to the labels shown on the dashboard.

/// Weather situation of a day, as encoded in the raw bike-sharing records.
///
/// Cleaned datasets already carry the label text; raw datasets carry the integer code.
/// The loader maps every code in [`WeatherCondition::ALL`] to its
/// [`WeatherCondition::label`] so grouping always happens on text keys.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum WeatherCondition {
    /// Code 1: clear, few clouds or partly cloudy.
    Clear = 1,
    /// Code 2: mist, possibly with clouds.
    Misty = 2,
    /// Code 3: light snow or light rain, possibly with thunderstorm.
    LightRain = 3,
    /// Code 4: heavy rain, ice pellets, thunderstorm or snow with fog.
    HeavyRain = 4,
}

impl WeatherCondition {
    /// All conditions in code order.
    pub const ALL: [WeatherCondition; 4] = [
        WeatherCondition::Clear,
        WeatherCondition::Misty,
        WeatherCondition::LightRain,
        WeatherCondition::HeavyRain,
    ];

    /// Attempts to convert a raw weather situation code into a `WeatherCondition`.
    ///
    /// # Returns
    ///
    /// * `Some(WeatherCondition)` for codes 1-4.
    /// * `None` for any other value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bikeshare::WeatherCondition;
    ///
    /// assert_eq!(WeatherCondition::from_i64(2), Some(WeatherCondition::Misty));
    /// assert_eq!(WeatherCondition::from_i64(0), None);
    /// ```
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            1 => Some(WeatherCondition::Clear),
            2 => Some(WeatherCondition::Misty),
            3 => Some(WeatherCondition::LightRain),
            4 => Some(WeatherCondition::HeavyRain),
            _ => None,
        }
    }

    /// The label used in cleaned datasets and on chart axes.
    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::Misty => "Misty",
            WeatherCondition::LightRain => "Light Rain",
            WeatherCondition::HeavyRain => "Heavy Rain",
        }
    }
}

/// Season of a day, as encoded in the raw bike-sharing records.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Season {
    Spring = 1,
    Summer = 2,
    Fall = 3,
    Winter = 4,
}

impl Season {
    /// All seasons in code order.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Attempts to convert a raw season code (1-4) into a `Season`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bikeshare::Season;
    ///
    /// assert_eq!(Season::from_i64(4), Some(Season::Winter));
    /// assert_eq!(Season::from_i64(5), None);
    /// ```
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            1 => Some(Season::Spring),
            2 => Some(Season::Summer),
            3 => Some(Season::Fall),
            4 => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_enum() {
        for condition in WeatherCondition::ALL {
            assert_eq!(WeatherCondition::from_i64(condition as i64), Some(condition));
        }
        for season in Season::ALL {
            assert_eq!(Season::from_i64(season as i64), Some(season));
        }
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels: Vec<&str> = WeatherCondition::ALL.iter().map(|c| c.label()).collect();
        for (i, label) in labels.iter().enumerate() {
            assert!(!labels[i + 1..].contains(label), "duplicate label {}", label);
        }
        assert_eq!(Season::Fall.label(), "Fall");
    }
}
