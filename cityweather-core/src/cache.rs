//! Durable slot holding the last city a lookup resolved to.
//!
//! Values live in a small TOML key-value file. Storage problems are logged and
//! swallowed: a failed write leaves the previous value in place and a failed
//! read behaves as if nothing was ever stored.

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use std::{collections::BTreeMap, fs, path::PathBuf};

const CITY_KEY: &str = "city";

#[derive(Debug, Clone)]
pub struct CityCache {
    path: Option<PathBuf>,
}

impl CityCache {
    /// Cache stored in the platform data directory.
    pub fn new() -> Self {
        match Self::default_file_path() {
            Ok(path) => Self { path: Some(path) },
            Err(err) => {
                tracing::warn!(error = %err, "city cache disabled");
                Self { path: None }
            }
        }
    }

    /// Cache stored in an explicit file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()) }
    }

    pub fn default_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "cityweather", "cityweather")
            .ok_or_else(|| anyhow!("Could not determine platform data directory"))?;

        Ok(dirs.data_dir().join("defaults.toml"))
    }

    /// Overwrite the cached city. Empty strings are stored as given.
    pub fn set(&self, city: &str) {
        if let Err(err) = self.write(CITY_KEY, city) {
            tracing::warn!(error = %format!("{err:#}"), "failed to cache city");
        }
    }

    pub fn get(&self) -> Option<String> {
        match self.read_all() {
            Ok(mut values) => values.remove(CITY_KEY),
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "failed to read cached city");
                None
            }
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let Some(path) = &self.path else {
            return Ok(BTreeMap::new());
        };
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read cache file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse cache file: {}", path.display()))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path.as_ref().ok_or_else(|| anyhow!("No cache location available"))?;

        // A corrupt file is replaced rather than blocking every later write.
        let mut values = self.read_all().unwrap_or_default();
        values.insert(key.to_owned(), value.to_owned());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create cache directory: {}", parent.display())
            })?;
        }

        let toml = toml::to_string(&values).context("Failed to serialize cache")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write cache file: {}", path.display()))?;

        Ok(())
    }
}

impl Default for CityCache {
    fn default() -> Self {
        Self::new()
    }
}
