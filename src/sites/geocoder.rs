//! Zip code to latitude/longitude lookup

use crate::Result;
use crate::config::{CurrentTempConfig, HttpErrorPolicy};
use crate::fetch::{PageFetcher, fetch_page};
use crate::models::{Coordinates, ZipCode};
use crate::scrape::{CellLayout, extract_cells};
use tracing::{info, instrument};

use super::fill_template;

/// Cell positions on the geocoder result page
pub const LAYOUT: CellLayout = CellLayout {
    site: "geocoder",
    fields: &[("latitude", 13), ("longitude", 15)],
};

/// Client for the geocoder lookup page
#[derive(Debug, Clone)]
pub struct GeocoderClient {
    url_template: String,
    on_error: HttpErrorPolicy,
}

impl GeocoderClient {
    #[must_use]
    pub fn new(config: &CurrentTempConfig) -> Self {
        Self {
            url_template: config.sites.geocoder_url.clone(),
            on_error: config.http.on_error,
        }
    }

    /// Lookup URL for `zip_code`
    #[must_use]
    pub fn url(&self, zip_code: &ZipCode) -> String {
        fill_template(&self.url_template, &[("zip", zip_code.as_str())])
    }

    /// Fetch the lookup page and read the coordinates off it
    #[instrument(skip(self, fetcher), fields(zip = %zip_code))]
    pub fn lookup<F: PageFetcher + ?Sized>(
        &self,
        fetcher: &F,
        zip_code: &ZipCode,
    ) -> Result<Coordinates> {
        let html = fetch_page(fetcher, &self.url(zip_code), self.on_error)?;
        let coordinates = Self::parse(&html)?;

        info!("Geocoded {} to {}", zip_code, coordinates);
        Ok(coordinates)
    }

    /// Extract the coordinates from a geocoder page
    pub fn parse(html: &str) -> Result<Coordinates> {
        let fields = extract_cells(html, &LAYOUT)?;
        Ok(Coordinates::new(
            fields.get("latitude")?,
            fields.get("longitude")?,
        ))
    }
}
