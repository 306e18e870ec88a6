//! Error types and handling for the `current-temp` application

use thiserror::Error;

/// Main error type for the `current-temp` application
#[derive(Error, Debug)]
pub enum CurrentTempError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Transport failures, or non-success statuses under the fail-fast policy
    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    /// A scraped page did not have the expected shape
    #[error("Extraction error ({site}/{field}): {message}")]
    Extraction {
        site: &'static str,
        field: &'static str,
        message: String,
    },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl CurrentTempError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<U: Into<String>, S: Into<String>>(url: U, message: S) -> Self {
        Self::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a new extraction error for a field of a scraped site
    pub fn extraction<S: Into<String>>(site: &'static str, field: &'static str, message: S) -> Self {
        Self::Extraction {
            site,
            field,
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CurrentTempError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            CurrentTempError::Network { .. } => {
                "Unable to reach the lookup sites. Please check your internet connection."
                    .to_string()
            }
            CurrentTempError::Extraction { site, .. } => {
                format!("The {site} page did not contain the expected data. The site layout may have changed.")
            }
            CurrentTempError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            CurrentTempError::Io { .. } => "Reading from the terminal failed.".to_string(),
        }
    }
}
