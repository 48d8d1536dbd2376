//! Bounded-concurrency fetching of product pages.

use std::time::Duration;

use futures::stream::{self, StreamExt, TryStreamExt};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;

use wrp_core::ScrapeConfig;

use crate::error::ScraperError;

/// A fetched page body plus its status. Transient: discarded as soon as the
/// embedded payload has been extracted.
#[derive(Debug, Clone)]
pub struct RawPage {
    pub url: String,
    pub status: u16,
    pub body: String,
}

/// HTTP client for product pages.
///
/// Owns the shared connection pool for one orchestrator run; the pool is
/// torn down when the client is dropped. Requests carry the configured
/// browser-identifying header set and are throttled to the configured
/// ceiling, both in-flight and kept-alive.
#[derive(Debug)]
pub struct PageClient {
    client: Client,
    max_concurrency: usize,
}

impl PageClient {
    /// Builds a `PageClient` from the scrape configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidHeader`] if a configured header name
    /// or value is not representable on the wire, or
    /// [`ScraperError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(config: &ScrapeConfig) -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| ScraperError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| ScraperError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .pool_max_idle_per_host(config.max_connections)
            .build()?;

        Ok(Self {
            client,
            max_concurrency: config.max_connections.max(1),
        })
    }

    /// Fetches every URL in the batch, all requests logically concurrent
    /// under the connection ceiling, and returns the pages in input order.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::BlockedRequest`] — any response has a non-success
    ///   status; the whole batch fails, no pages are returned.
    /// - [`ScraperError::Http`] — network or body-read failure.
    pub async fn fetch_pages(&self, urls: &[String]) -> Result<Vec<RawPage>, ScraperError> {
        stream::iter(urls)
            .map(|url| self.fetch_page(url))
            .buffered(self.max_concurrency)
            .try_collect()
            .await
    }

    async fn fetch_page(&self, url: &str) -> Result<RawPage, ScraperError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ScraperError::BlockedRequest {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(RawPage {
            url: url.to_owned(),
            status: status.as_u16(),
            body,
        })
    }
}
