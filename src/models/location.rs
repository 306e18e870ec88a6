//! Location models scraped from the lookup sites

use std::fmt;

/// Latitude/longitude pair as scraped text.
///
/// The tokens are kept verbatim (minus surrounding whitespace) and are only
/// ever substituted into the forecast URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    /// Latitude text, e.g. `34.0901`
    pub latitude: String,
    /// Longitude text, e.g. `-118.4065`
    pub longitude: String,
}

impl Coordinates {
    /// Create a new coordinate pair
    #[must_use]
    pub fn new<S: Into<String>>(latitude: S, longitude: S) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// City and state for a zip code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locality {
    /// Normalized city name
    pub city: String,
    /// Full state name, e.g. `California`
    pub state: String,
    /// State abbreviation, e.g. `CA`
    pub state_abbreviation: String,
}

impl fmt::Display for Locality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.state)
    }
}
