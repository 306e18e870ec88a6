//! Zip code to current conditions
//!
//! Runs the three site lookups in order: geocoder, forecast (using the
//! geocoded coordinates), then locality. Each step blocks until its page is
//! fetched and parsed; the first error ends the run.

use crate::Result;
use crate::config::CurrentTempConfig;
use crate::fetch::PageFetcher;
use crate::models::{CurrentConditions, ZipCode};
use crate::sites::{ForecastClient, GeocoderClient, LocalityClient};
use tracing::{debug, instrument};

/// The lookup pipeline over some [`PageFetcher`]
#[derive(Debug)]
pub struct Pipeline<F> {
    fetcher: F,
    geocoder: GeocoderClient,
    forecast: ForecastClient,
    locality: LocalityClient,
}

impl<F: PageFetcher> Pipeline<F> {
    /// Build the site clients from `config`
    pub fn new(config: &CurrentTempConfig, fetcher: F) -> Self {
        Self {
            fetcher,
            geocoder: GeocoderClient::new(config),
            forecast: ForecastClient::new(config),
            locality: LocalityClient::new(config),
        }
    }

    /// Look up the current conditions for `zip_code`
    #[instrument(skip(self), fields(zip = %zip_code))]
    pub fn run(&self, zip_code: &ZipCode) -> Result<CurrentConditions> {
        debug!("Starting lookup");

        let coordinates = self.geocoder.lookup(&self.fetcher, zip_code)?;
        let temperature = self
            .forecast
            .current_temperature(&self.fetcher, &coordinates)?;
        let locality = self.locality.lookup(&self.fetcher, zip_code)?;

        Ok(CurrentConditions {
            zip_code: zip_code.clone(),
            coordinates,
            locality,
            temperature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CurrentTempError;
    use crate::fetch::Page;
    use std::cell::RefCell;

    /// Records requested URLs and serves a single canned page for all of them
    struct RecordingFetcher {
        urls: RefCell<Vec<String>>,
    }

    impl PageFetcher for RecordingFetcher {
        fn fetch(&self, url: &str) -> Result<Page> {
            self.urls.borrow_mut().push(url.to_string());
            let cells: String = (0..20).map(|i| format!("<td>{i}</td>")).collect();
            Ok(Page::ok(format!(
                r#"<table><tr>{cells}</tr></table><p class="myforecast-current-lrg">50°F</p>"#
            )))
        }
    }

    #[test]
    fn test_lookup_order_and_urls() {
        let fetcher = RecordingFetcher {
            urls: RefCell::new(Vec::new()),
        };
        let config = CurrentTempConfig::default();
        let pipeline = Pipeline::new(&config, &fetcher);

        // cell 13 ("13") has no space, so the state split fails after all fetches
        let err = pipeline.run(&ZipCode::parse("90210").unwrap()).unwrap_err();
        assert!(matches!(err, CurrentTempError::Extraction { field: "state", .. }));

        let urls = fetcher.urls.borrow();
        assert_eq!(urls.len(), 3);
        assert!(urls[0].contains("GeoCoder.asp?InData=90210"));
        assert!(urls[1].contains("MapClick.php?lat=13&lon=15"));
        assert!(urls[2].contains("ZipCityPhone.asp?InData=90210"));
    }
}
