//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional TOML
//! file, then `FORECAST_DIGEST_*` environment variables. Nested keys use a
//! double underscore, e.g. `FORECAST_DIGEST_OPENWEATHER__API_KEY`.

use std::path::{Path, PathBuf};

use integration_weather::WeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{retry::RetryConfig, telemetry::LoggingConfig};

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "forecast-digest";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "FORECAST_DIGEST";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// OpenWeatherMap client settings
    #[serde(default)]
    pub openweather: OpenWeatherAppConfig,

    /// Backoff for upstream calls
    #[serde(default)]
    pub retry: RetryConfig,

    /// Report output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// OpenWeatherMap settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenWeatherAppConfig {
    /// API key (sensitive; never serialized)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// 3-hour samples requested per call
    #[serde(default = "default_sample_count")]
    pub sample_count: u8,
}

fn default_base_url() -> String {
    WeatherConfig::default().base_url
}

fn default_timeout_secs() -> u64 {
    WeatherConfig::default().timeout_secs
}

fn default_sample_count() -> u8 {
    WeatherConfig::default().sample_count
}

impl Default for OpenWeatherAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            sample_count: default_sample_count(),
        }
    }
}

impl OpenWeatherAppConfig {
    /// Client configuration derived from these settings
    #[must_use]
    pub fn weather_config(&self) -> WeatherConfig {
        WeatherConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            sample_count: self.sample_count,
            ..WeatherConfig::default()
        }
    }

    /// Configured API key, if non-blank
    #[must_use]
    pub fn api_key(&self) -> Option<SecretString> {
        self.api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .cloned()
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// JSON Lines dataset every report is appended to
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    /// Pretty-print stdout output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

const fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            pretty: default_pretty(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, file and environment
    ///
    /// With `path`, that file must exist. Without it, `forecast-digest.toml`
    /// in the working directory is used when present.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a source cannot be read or a value has the
    /// wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::file_layers(path)?
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    fn file_layers(
        path: Option<&Path>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("openweather.base_url", default_base_url())?
            .set_default("output.pretty", default_pretty())?;

        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Ok(builder.add_source(file))
    }
}
