use crate::{CityCache, Config, WeatherError, WeatherModel, service::openweather::WeatherClient};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// What a front end needs from the weather backend.
#[async_trait]
pub trait WeatherLookup: Send + Sync + Debug {
    async fn fetch_by_city(&self, city: &str) -> Result<WeatherModel, WeatherError>;

    async fn fetch_by_coordinates(&self, lat: f64, lon: f64) -> Result<WeatherModel, WeatherError>;

    /// Last location a successful lookup resolved to.
    fn cached_city(&self) -> Option<String>;
}

/// Construct the OpenWeatherMap client from config, caching into `cache`.
pub fn client_from_config(
    config: &Config,
    cache: CityCache,
) -> anyhow::Result<Box<dyn WeatherLookup>> {
    let api_key = config.api_key()?;

    let client = WeatherClient::with_timeout(api_key, cache, config.timeout())?
        .with_base_url(config.base_url());

    Ok(Box::new(client))
}
