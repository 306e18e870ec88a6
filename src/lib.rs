//! `current-temp` - current temperature for a US zip code
//!
//! Scrapes a geocoder page for the zip code's coordinates, a forecast page
//! for the temperature at those coordinates, and a lookup page for the city
//! and state, then reports them in one sentence.

pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod prompt;
pub mod scrape;
pub mod sites;

// Re-export core types for public API
pub use config::{CityCase, CityWords, CurrentTempConfig, HttpErrorPolicy};
pub use error::CurrentTempError;
pub use fetch::{HttpFetcher, Page, PageFetcher};
pub use models::{
    Coordinates, CurrentConditions, InvalidZipCode, Locality, TemperatureReading, ZipCode,
    is_valid_zip_code,
};
pub use pipeline::Pipeline;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, CurrentTempError>;
