use serde::{Deserialize, Serialize};

use crate::condition::{DisplayCategory, classify};

/// Current weather for a resolved location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherModel {
    /// Location name as the provider resolved it, not the query.
    pub name: String,
    pub temperature_celsius: i32,
    pub condition_id: i64,
    pub condition_description: String,
}

impl WeatherModel {
    pub fn category(&self) -> DisplayCategory {
        classify(self.condition_id)
    }

    /// `18°C`
    pub fn temperature_display(&self) -> String {
        format!("{}°C", self.temperature_celsius)
    }

    /// Description with each word capitalized, e.g. `Broken Clouds`.
    pub fn description_display(&self) -> String {
        self.condition_description
            .split(' ')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Upper-case the first character and leave the rest untouched.
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwMain {
    pub(crate) temp: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwWeather {
    pub(crate) id: i64,
    pub(crate) description: String,
}

/// Success body of `/data/2.5/weather`.
#[derive(Debug, Deserialize)]
pub(crate) struct OwCurrentResponse {
    pub(crate) name: String,
    pub(crate) main: OwMain,
    pub(crate) weather: Vec<OwWeather>,
}

/// Body the provider sends alongside a 404.
#[derive(Debug, Deserialize)]
pub(crate) struct OwFailure {
    pub(crate) message: String,
}

impl From<OwCurrentResponse> for WeatherModel {
    fn from(raw: OwCurrentResponse) -> Self {
        let (condition_id, condition_description) = raw
            .weather
            .into_iter()
            .next()
            .map(|w| (w.id, w.description))
            .unwrap_or_default();

        Self {
            name: raw.name,
            // `as` truncates toward zero and saturates out-of-range values.
            temperature_celsius: raw.main.temp as i32,
            condition_id,
            condition_description,
        }
    }
}
