//! Temperature reading and the final report

use std::fmt;

use super::{Coordinates, Locality, ZipCode};

/// Current temperature text as shown on the forecast page, e.g. `75°F`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemperatureReading(pub String);

impl TemperatureReading {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemperatureReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything gathered for one zip code.
///
/// Its `Display` form is the sentence printed by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentConditions {
    pub zip_code: ZipCode,
    pub coordinates: Coordinates,
    pub locality: Locality,
    pub temperature: TemperatureReading,
}

impl fmt::Display for CurrentConditions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The current temperature for {}, {} is {}.",
            self.locality.city, self.locality.state, self.temperature
        )
    }
}
