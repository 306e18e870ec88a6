//! Data models for the current-temp application
//!
//! This module contains the domain models organized by concern:
//! - Zip code: validated user input
//! - Location: scraped coordinates and locality
//! - Weather: temperature reading and the final report

pub mod location;
pub mod weather;
pub mod zip_code;

// Re-export all public types for convenient access
pub use location::{Coordinates, Locality};
pub use weather::{CurrentConditions, TemperatureReading};
pub use zip_code::{InvalidZipCode, ZipCode, is_valid_zip_code};
