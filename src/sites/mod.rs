//! Adapters for the scraped sites
//!
//! One adapter per external page:
//! - Geocoder: zip code to latitude/longitude
//! - Locality: zip code to city and state
//! - Forecast: coordinates to the current temperature
//!
//! Each adapter owns its URL template and page layout, so a change on one
//! site is fixed in one file.

pub mod forecast;
pub mod geocoder;
pub mod locality;

pub use forecast::ForecastClient;
pub use geocoder::GeocoderClient;
pub use locality::LocalityClient;

/// Substitute `{name}` placeholders in a URL template with URL-encoded values
#[must_use]
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |url, (name, value)| {
            url.replace(&format!("{{{name}}}"), &urlencoding::encode(value))
        })
}
