//! Configuration management for the `current-temp` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::CurrentTempError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix for environment variable overrides, e.g. `CURRENT_TEMP_HTTP__ON_ERROR`
pub const ENV_PREFIX: &str = "CURRENT_TEMP";

/// Root configuration structure for the `current-temp` application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentTempConfig {
    /// URL templates of the scraped sites
    #[serde(default)]
    pub sites: SitesConfig,
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,
    /// City name clean-up
    #[serde(default)]
    pub normalization: NormalizationConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// URL templates; `{zip}`, `{lat}` and `{lon}` are substituted per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitesConfig {
    /// Latitude/longitude lookup, keyed by `{zip}`
    #[serde(default = "default_geocoder_url")]
    pub geocoder_url: String,
    /// City/state lookup, keyed by `{zip}`
    #[serde(default = "default_locality_url")]
    pub locality_url: String,
    /// Forecast page, keyed by `{lat}` and `{lon}`
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
}

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// What to do with a non-success HTTP status
    #[serde(default)]
    pub on_error: HttpErrorPolicy,
}

/// Handling of non-success HTTP statuses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HttpErrorPolicy {
    /// Log a warning and extract from whatever body came back
    #[default]
    Continue,
    /// Stop the run with a network error
    FailFast,
}

/// City name clean-up settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizationConfig {
    #[serde(default)]
    pub city_words: CityWords,
    #[serde(default)]
    pub city_case: CityCase,
}

/// Which words of a multi-word city name are kept
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CityWords {
    /// Keep only the first whitespace separated word (`Los Angeles` -> `Los`)
    #[default]
    FirstWord,
    /// Keep every word
    AllWords,
}

/// How the city name is re-cased
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CityCase {
    /// Uppercase the first letter of each word, lowercase the rest
    #[default]
    Capitalize,
    /// Drop every occurrence of the first letter, lowercase, then re-prepend it
    Legacy,
}

/// Logging configuration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_geocoder_url() -> String {
    "https://www.melissadata.com/lookups/GeoCoder.asp?InData={zip}&submit=Search".to_string()
}

fn default_locality_url() -> String {
    "https://www.melissadata.com/lookups/ZipCityPhone.asp?InData={zip}".to_string()
}

fn default_forecast_url() -> String {
    "http://forecast.weather.gov/MapClick.php?lat={lat}&lon={lon}".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_user_agent() -> String {
    format!("current-temp/{}", env!("CARGO_PKG_VERSION"))
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for SitesConfig {
    fn default() -> Self {
        Self {
            geocoder_url: default_geocoder_url(),
            locality_url: default_locality_url(),
            forecast_url: default_forecast_url(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
            on_error: HttpErrorPolicy::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl CurrentTempConfig {
    /// Load configuration from the default file location and environment variables
    pub fn load() -> crate::Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> crate::Result<Self> {
        Self::load_with_environment(config_path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Load configuration from a file plus the given environment source
    pub fn load_with_environment(
        config_path: Option<PathBuf>,
        environment: Environment,
    ) -> crate::Result<Self> {
        let mut builder = Config::builder();

        // An explicit path must exist; the default location is optional
        let config_file = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(CurrentTempError::config(format!(
                        "Configuration file '{}' not found",
                        path.display()
                    )));
                }
                Some(File::from(path).required(true))
            }
            None => Some(Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml")))
                .filter(|path| path.exists())
                .map(|path| File::from(path).required(false)),
        };

        if let Some(file) = config_file {
            builder = builder.add_source(file.format(config::FileFormat::Toml));
        }

        builder = builder.add_source(
            environment
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| CurrentTempError::config(format!("Failed to build configuration: {e}")))?;

        let mut config: CurrentTempConfig = settings.try_deserialize().map_err(|e| {
            CurrentTempError::config(format!("Failed to deserialize configuration: {e}"))
        })?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("current-temp").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.sites.geocoder_url.is_empty() {
            self.sites.geocoder_url = default_geocoder_url();
        }
        if self.sites.locality_url.is_empty() {
            self.sites.locality_url = default_locality_url();
        }
        if self.sites.forecast_url.is_empty() {
            self.sites.forecast_url = default_forecast_url();
        }
        if self.http.timeout_seconds == 0 {
            self.http.timeout_seconds = default_timeout();
        }
        if self.http.user_agent.is_empty() {
            self.http.user_agent = default_user_agent();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        self.validate_site_templates()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate URL templates and their placeholders
    fn validate_site_templates(&self) -> crate::Result<()> {
        let templates: [(&str, &str, &[&str]); 3] = [
            ("geocoder_url", self.sites.geocoder_url.as_str(), &["{zip}"]),
            ("locality_url", self.sites.locality_url.as_str(), &["{zip}"]),
            ("forecast_url", self.sites.forecast_url.as_str(), &["{lat}", "{lon}"]),
        ];

        for (name, template, placeholders) in templates {
            if !template.starts_with("http://") && !template.starts_with("https://") {
                return Err(CurrentTempError::config(format!(
                    "sites.{name} must be a valid HTTP or HTTPS URL"
                )));
            }

            if let Some(missing) = placeholders.iter().find(|p| !template.contains(**p)) {
                return Err(CurrentTempError::config(format!(
                    "sites.{name} is missing the {missing} placeholder"
                )));
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> crate::Result<()> {
        if self.http.timeout_seconds > 300 {
            return Err(CurrentTempError::config(
                "HTTP timeout cannot exceed 300 seconds",
            ));
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> crate::Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(CurrentTempError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(CurrentTempError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            )));
        }

        Ok(())
    }
}
