//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - The OpenWeatherMap current-weather client
//! - Mapping of condition codes to display categories
//! - The durable "last city" cache
//! - Configuration handling
//!
//! It is used by `cityweather-cli`, but any other front end can drive it
//! through [`WeatherLookup`].

pub mod cache;
pub mod condition;
pub mod config;
pub mod error;
pub mod model;
pub mod service;

pub use cache::CityCache;
pub use condition::{DisplayCategory, classify};
pub use config::Config;
pub use error::WeatherError;
pub use model::WeatherModel;
pub use service::{WeatherLookup, client_from_config, openweather::WeatherClient};
