//! Failures a weather lookup can end with.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    /// Network failure, timeout, or a non-2xx status that was not a
    /// recognised provider 404.
    #[error("{0}")]
    Transport(reqwest::Error),

    /// The success body did not match the expected schema.
    #[error("The weather data couldn't be read because it isn't in the correct format: {0}")]
    Decode(#[from] serde_json::Error),

    /// Message supplied by the provider on a 404, already capitalized.
    #[error("{description}")]
    Custom { description: String },

    /// Raised by callers that validate input before looking anything up.
    #[error("City is empty!\nPlease try again")]
    EmptyCity,

    #[error("Hey, this is an unknown error!")]
    Unknown,
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs carry the API key.
        Self::Transport(err.without_url())
    }
}

impl WeatherError {
    /// Whether the provider itself explained the failure.
    pub fn is_provider_message(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_error_displays_description_verbatim() {
        let err = WeatherError::Custom { description: "City not found".into() };
        assert_eq!(err.to_string(), "City not found");
        assert!(err.is_provider_message());
    }

    #[test]
    fn caller_side_errors_have_friendly_text() {
        assert_eq!(WeatherError::EmptyCity.to_string(), "City is empty!\nPlease try again");
        assert!(WeatherError::Unknown.to_string().contains("unknown error"));
        assert!(!WeatherError::EmptyCity.is_provider_message());
    }

    #[test]
    fn decode_error_wraps_serde_failure() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = WeatherError::from(serde_err);
        assert!(matches!(err, WeatherError::Decode(_)));
        assert!(err.to_string().contains("correct format"));
    }
}
