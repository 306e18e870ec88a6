//! Current temperature from the forecast page

use crate::Result;
use crate::config::{CurrentTempConfig, HttpErrorPolicy};
use crate::fetch::{PageFetcher, fetch_page};
use crate::models::{Coordinates, TemperatureReading};
use crate::scrape::first_match_text;
use tracing::{info, instrument};

use super::fill_template;

/// Element holding the large current-temperature text
pub const TEMPERATURE_SELECTOR: &str = ".myforecast-current-lrg";

/// Client for the forecast page
#[derive(Debug, Clone)]
pub struct ForecastClient {
    url_template: String,
    on_error: HttpErrorPolicy,
}

impl ForecastClient {
    #[must_use]
    pub fn new(config: &CurrentTempConfig) -> Self {
        Self {
            url_template: config.sites.forecast_url.clone(),
            on_error: config.http.on_error,
        }
    }

    /// Forecast URL for `coordinates`
    #[must_use]
    pub fn url(&self, coordinates: &Coordinates) -> String {
        fill_template(
            &self.url_template,
            &[
                ("lat", coordinates.latitude.as_str()),
                ("lon", coordinates.longitude.as_str()),
            ],
        )
    }

    /// Fetch the forecast page and read the current temperature off it
    #[instrument(skip(self, fetcher), fields(coordinates = %coordinates))]
    pub fn current_temperature<F: PageFetcher + ?Sized>(
        &self,
        fetcher: &F,
        coordinates: &Coordinates,
    ) -> Result<TemperatureReading> {
        let html = fetch_page(fetcher, &self.url(coordinates), self.on_error)?;
        let reading = Self::parse(&html)?;

        info!("Current temperature at {} is {}", coordinates, reading);
        Ok(reading)
    }

    /// Extract the temperature text from a forecast page
    pub fn parse(html: &str) -> Result<TemperatureReading> {
        first_match_text(html, TEMPERATURE_SELECTOR, "forecast", "temperature")
            .map(TemperatureReading)
    }
}
