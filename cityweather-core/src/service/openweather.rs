use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::instrument;

use crate::{
    cache::CityCache,
    config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS},
    error::WeatherError,
    model::{OwCurrentResponse, OwFailure, WeatherModel, capitalize},
};

use super::WeatherLookup;

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

/// Current-weather client for OpenWeatherMap.
///
/// Every successful lookup, by name or by coordinates, writes the resolved
/// location name to the [`CityCache`].
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
    cache: CityCache,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>, cache: CityCache) -> Result<Self, WeatherError> {
        Self::with_timeout(api_key, cache, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(
        api_key: impl Into<String>,
        cache: CityCache,
        timeout: Duration,
    ) -> Result<Self, WeatherError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http,
            cache,
        })
    }

    /// Point the client at another host, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Current weather for a city name. Emptiness is the caller's concern.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_by_city(&self, city: &str) -> Result<WeatherModel, WeatherError> {
        let query = format!("q={}", urlencoding::encode(city));
        self.handle_request(&query).await
    }

    /// Current weather for a coordinate pair, passed through unvalidated.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_by_coordinates(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<WeatherModel, WeatherError> {
        let query = format!("lat={lat:.6}&lon={lon:.6}");
        self.handle_request(&query).await
    }

    pub fn cached_city(&self) -> Option<String> {
        self.cache.get()
    }

    async fn handle_request(&self, location_query: &str) -> Result<WeatherModel, WeatherError> {
        let url = format!(
            "{}{CURRENT_WEATHER_PATH}?{location_query}&appid={}&units=metric",
            self.base_url,
            urlencoding::encode(&self.api_key),
        );
        tracing::debug!(
            url = %format!("{}{CURRENT_WEATHER_PATH}?{location_query}&appid=***&units=metric", self.base_url),
            "requesting current weather"
        );

        let res = self.http.get(&url).send().await?;

        let status = res.status();
        let status_error = res.error_for_status_ref().err();
        let body = res.bytes().await?;
        tracing::debug!(%status, bytes = body.len(), "provider responded");

        if let Some(err) = status_error {
            return Err(classify_failure(status, &body, err));
        }

        let parsed: OwCurrentResponse = serde_json::from_slice(&body)?;
        let model = WeatherModel::from(parsed);

        self.cache.set(&model.name);
        tracing::info!(
            name = %model.name,
            temperature = model.temperature_celsius,
            condition = model.condition_id,
            "weather resolved"
        );

        Ok(model)
    }
}

/// Only a 404 carrying the provider's `{"message": ...}` body becomes a
/// custom error; everything else keeps the HTTP layer's own error.
fn classify_failure(status: StatusCode, body: &[u8], err: reqwest::Error) -> WeatherError {
    if status == StatusCode::NOT_FOUND {
        if let Ok(failure) = serde_json::from_slice::<OwFailure>(body) {
            return WeatherError::Custom { description: capitalize(&failure.message) };
        }
    }

    WeatherError::from(err)
}

#[async_trait]
impl WeatherLookup for WeatherClient {
    async fn fetch_by_city(&self, city: &str) -> Result<WeatherModel, WeatherError> {
        WeatherClient::fetch_by_city(self, city).await
    }

    async fn fetch_by_coordinates(&self, lat: f64, lon: f64) -> Result<WeatherModel, WeatherError> {
        WeatherClient::fetch_by_coordinates(self, lat, lon).await
    }

    fn cached_city(&self) -> Option<String> {
        WeatherClient::cached_city(self)
    }
}
