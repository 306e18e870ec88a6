//! Zip code to city/state lookup

use crate::Result;
use crate::config::{CurrentTempConfig, HttpErrorPolicy, NormalizationConfig};
use crate::fetch::{PageFetcher, fetch_page};
use crate::models::{Locality, ZipCode};
use crate::normalize::{normalize_city, split_state};
use crate::scrape::{CellLayout, extract_cells};
use tracing::{debug, info, instrument};

use super::fill_template;

/// Cell positions on the city/state result page.
///
/// `state` holds `"FullStateName ABBR"`, `city` the raw city text.
pub const LAYOUT: CellLayout = CellLayout {
    site: "locality",
    fields: &[("state", 13), ("city", 17)],
};

/// Client for the city/state lookup page
#[derive(Debug, Clone)]
pub struct LocalityClient {
    url_template: String,
    on_error: HttpErrorPolicy,
    normalization: NormalizationConfig,
}

impl LocalityClient {
    #[must_use]
    pub fn new(config: &CurrentTempConfig) -> Self {
        Self {
            url_template: config.sites.locality_url.clone(),
            on_error: config.http.on_error,
            normalization: config.normalization.clone(),
        }
    }

    /// Lookup URL for `zip_code`
    #[must_use]
    pub fn url(&self, zip_code: &ZipCode) -> String {
        fill_template(&self.url_template, &[("zip", zip_code.as_str())])
    }

    /// Fetch the lookup page and read the locality off it
    #[instrument(skip(self, fetcher), fields(zip = %zip_code))]
    pub fn lookup<F: PageFetcher + ?Sized>(
        &self,
        fetcher: &F,
        zip_code: &ZipCode,
    ) -> Result<Locality> {
        let html = fetch_page(fetcher, &self.url(zip_code), self.on_error)?;
        let locality = self.parse(&html)?;

        info!("Resolved {} to {}", zip_code, locality);
        Ok(locality)
    }

    /// Extract and normalize the locality from a city/state page
    pub fn parse(&self, html: &str) -> Result<Locality> {
        let fields = extract_cells(html, &LAYOUT)?;
        let raw_state = fields.get("state")?;
        let raw_city = fields.get("city")?;
        debug!(raw_state, raw_city, "Normalizing locality");

        let (state, state_abbreviation) = split_state(raw_state)?;
        let city = normalize_city(raw_city, &self.normalization)?;

        Ok(Locality {
            city,
            state,
            state_abbreviation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CurrentTempError;
    use crate::config::{CityCase, CityWords};

    fn page(state: &str, city: &str) -> String {
        let cells: String = (0..20)
            .map(|index| match index {
                13 => format!("<td>{state}</td>"),
                17 => format!("<td>{city}</td>"),
                _ => format!("<td>filler {index}</td>"),
            })
            .collect();
        format!("<table><tr>{cells}</tr></table>")
    }

    fn client(city_words: CityWords, city_case: CityCase) -> LocalityClient {
        let mut config = CurrentTempConfig::default();
        config.normalization = NormalizationConfig {
            city_words,
            city_case,
        };
        LocalityClient::new(&config)
    }

    #[test]
    fn test_url_substitutes_zip() {
        let client = LocalityClient::new(&CurrentTempConfig::default());
        let zip = ZipCode::parse("02134").unwrap();
        assert_eq!(
            client.url(&zip),
            "https://www.melissadata.com/lookups/ZipCityPhone.asp?InData=02134"
        );
    }

    #[test]
    fn test_parse_reads_cells_13_and_17() {
        let client = LocalityClient::new(&CurrentTempConfig::default());
        let locality = client.parse(&page("California CA", "BeverlyHills")).unwrap();
        assert_eq!(
            locality,
            Locality {
                city: "Beverlyhills".to_string(),
                state: "California".to_string(),
                state_abbreviation: "CA".to_string(),
            }
        );
    }

    #[test]
    fn test_multi_word_city_is_truncated_by_default() {
        let client = LocalityClient::new(&CurrentTempConfig::default());
        let locality = client.parse(&page("California CA", "LOS ANGELES")).unwrap();
        assert_eq!(locality.city, "Los");
    }

    #[test]
    fn test_multi_word_city_kept_with_all_words() {
        let client = client(CityWords::AllWords, CityCase::Capitalize);
        let locality = client.parse(&page("California CA", "LOS ANGELES")).unwrap();
        assert_eq!(locality.city, "Los Angeles");
    }

    #[test]
    fn test_legacy_case_strips_recurring_first_letter() {
        let legacy = client(CityWords::FirstWord, CityCase::Legacy);
        let locality = legacy.parse(&page("Massachusetts MA", "ANNA")).unwrap();
        assert_eq!(locality.city, "Ann");

        let capitalized = client(CityWords::FirstWord, CityCase::Capitalize);
        let locality = capitalized.parse(&page("Massachusetts MA", "ANNA")).unwrap();
        assert_eq!(locality.city, "Anna");
    }

    #[test]
    fn test_unsplittable_state_is_extraction_error() {
        let client = LocalityClient::new(&CurrentTempConfig::default());
        let err = client.parse(&page("California", "Fresno")).unwrap_err();
        assert!(matches!(
            err,
            CurrentTempError::Extraction {
                site: "locality",
                field: "state",
                ..
            }
        ));
    }

    #[test]
    fn test_short_page_is_extraction_error() {
        let client = LocalityClient::new(&CurrentTempConfig::default());
        let html = "<table><tr><td>only</td></tr></table>";
        assert!(matches!(
            client.parse(html).unwrap_err(),
            CurrentTempError::Extraction { .. }
        ));
    }
}
