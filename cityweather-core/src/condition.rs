use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Bucket used to pick a weather icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayCategory {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Clouds,
}

impl DisplayCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayCategory::Thunderstorm => "thunderstorm",
            DisplayCategory::Drizzle => "drizzle",
            DisplayCategory::Rain => "rain",
            DisplayCategory::Snow => "snow",
            DisplayCategory::Atmosphere => "atmosphere",
            DisplayCategory::Clear => "clear",
            DisplayCategory::Clouds => "clouds",
        }
    }
}

impl std::fmt::Display for DisplayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const THUNDERSTORM: RangeInclusive<i64> = 200..=299;
const DRIZZLE: RangeInclusive<i64> = 300..=399;
const RAIN: RangeInclusive<i64> = 500..=599;
const SNOW: RangeInclusive<i64> = 600..=699;
const ATMOSPHERE: RangeInclusive<i64> = 700..=799;
const CLEAR_SKY: i64 = 800;
const CLOUDS: RangeInclusive<i64> = 800..=899;

/// Map an OpenWeatherMap condition code to its display category.
///
/// Checks run top to bottom and the first match wins, so 800 resolves to
/// `Clear` even though it also sits inside the clouds range. Codes outside
/// every range (400s, negatives, 900+) fall back to `Clear`.
pub fn classify(condition_id: i64) -> DisplayCategory {
    if THUNDERSTORM.contains(&condition_id) {
        DisplayCategory::Thunderstorm
    } else if DRIZZLE.contains(&condition_id) {
        DisplayCategory::Drizzle
    } else if RAIN.contains(&condition_id) {
        DisplayCategory::Rain
    } else if SNOW.contains(&condition_id) {
        DisplayCategory::Snow
    } else if ATMOSPHERE.contains(&condition_id) {
        DisplayCategory::Atmosphere
    } else if condition_id == CLEAR_SKY {
        DisplayCategory::Clear
    } else if CLOUDS.contains(&condition_id) {
        DisplayCategory::Clouds
    } else {
        DisplayCategory::Clear
    }
}
