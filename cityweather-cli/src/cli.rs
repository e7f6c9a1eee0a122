use anyhow::Context;
use clap::{Parser, Subcommand};
use cityweather_core::{
    CityCache, Config, WeatherError, WeatherLookup, WeatherModel, client_from_config,
};
use inquire::{Password, PasswordDisplayMode, Text};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key and the default city.
    Configure,

    /// Show weather for a city.
    Show {
        /// City name. Without it the last looked-up city is used, then the
        /// configured default.
        city: Option<String>,
    },

    /// Show weather for a coordinate pair.
    Coords {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },

    /// Print the last looked-up city.
    Cached,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => {
                let config = Config::load()?;
                let lookup = client_from_config(&config, CityCache::new())?;

                let model = show(lookup.as_ref(), city.as_deref(), config.default_city()).await?;
                println!("{}", render(&model));
                Ok(())
            }
            Command::Coords { lat, lon } => {
                let config = Config::load()?;
                let lookup = client_from_config(&config, CityCache::new())?;

                let model = lookup.fetch_by_coordinates(lat, lon).await?;
                println!("{}", render(&model));
                Ok(())
            }
            Command::Cached => {
                match CityCache::new().get() {
                    Some(city) => println!("{city}"),
                    None => println!("No city cached yet."),
                }
                Ok(())
            }
        }
    }
}

/// Look up `city`, or the city to show on a cold start when none is given.
async fn show(
    lookup: &dyn WeatherLookup,
    city: Option<&str>,
    default_city: &str,
) -> Result<WeatherModel, WeatherError> {
    let city = match city {
        Some("") => return Err(WeatherError::EmptyCity),
        Some(city) => city.to_string(),
        None => lookup.cached_city().unwrap_or_else(|| default_city.to_string()),
    };

    tracing::debug!(%city, "searching");
    lookup.fetch_by_city(&city).await
}

fn render(model: &WeatherModel) -> String {
    format!(
        "{}\n{}  {} [{}]",
        model.name,
        model.temperature_display(),
        model.description_display(),
        model.category(),
    )
}

/// Text shown to the user for a failed command.
pub fn error_message(err: &anyhow::Error) -> String {
    if let Some(weather_err) = err.downcast_ref::<WeatherError>() {
        return weather_err.to_string();
    }

    let message = format!("{err:#}");
    if message.trim().is_empty() { WeatherError::Unknown.to_string() } else { message }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;
    let current_city = config.default_city().to_string();

    let api_key = Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;

    let default_city = Text::new("Default city:")
        .with_default(&current_city)
        .prompt()
        .context("Failed to read default city")?;

    config.set_api_key(api_key.trim().to_string());
    config.default_city = Some(default_city);
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
