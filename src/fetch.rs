//! HTTP page fetching
//!
//! Every scraped site goes through the [`PageFetcher`] seam so the pipeline
//! can be driven by canned pages in tests. Transport failures are errors;
//! a non-success status is returned as a [`Page`] and judged by
//! [`fetch_page`] according to the configured [`HttpErrorPolicy`].

use crate::config::{HttpConfig, HttpErrorPolicy};
use crate::{CurrentTempError, Result};
use reqwest::blocking::Client;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

/// A fetched page: status code plus body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

impl Page {
    /// A 200 page with the given body
    #[must_use]
    pub fn ok<S: Into<String>>(body: S) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// True for 2xx statuses
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can GET a URL
pub trait PageFetcher {
    /// Fetch `url`. Only transport failures are errors.
    fn fetch(&self, url: &str) -> Result<Page>;
}

impl<F: PageFetcher + ?Sized> PageFetcher for &F {
    fn fetch(&self, url: &str) -> Result<Page> {
        (**self).fetch(url)
    }
}

/// Blocking `reqwest` implementation of [`PageFetcher`]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher from the HTTP settings
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| CurrentTempError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    #[instrument(skip(self))]
    fn fetch(&self, url: &str) -> Result<Page> {
        let start_time = Instant::now();

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| CurrentTempError::network(url, e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| CurrentTempError::network(url, format!("Failed to read body: {e}")))?;

        debug!(
            "HTTP {} ({} bytes) in {:.3}s",
            status,
            body.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(Page { status, body })
    }
}

/// Fetch `url` and apply the non-success status policy.
///
/// Under [`HttpErrorPolicy::Continue`] a failed status is logged and the
/// (possibly empty) body is still returned for extraction.
pub fn fetch_page<F: PageFetcher + ?Sized>(
    fetcher: &F,
    url: &str,
    policy: HttpErrorPolicy,
) -> Result<String> {
    let page = fetcher.fetch(url)?;

    if page.is_success() {
        return Ok(page.body);
    }

    match policy {
        HttpErrorPolicy::Continue => {
            warn!(
                status = page.status,
                "There was a problem: HTTP {} for url: {}", page.status, url
            );
            Ok(page.body)
        }
        HttpErrorPolicy::FailFast => Err(CurrentTempError::network(
            url,
            format!("HTTP {}", page.status),
        )),
    }
}
