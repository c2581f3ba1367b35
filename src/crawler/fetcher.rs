//! HTTP fetcher implementation
//!
//! One GET per listing page. Transport failures and non-success statuses are
//! returned as errors; nothing is retried.

use crate::ScrapeError;
use reqwest::Client;
use url::Url;

/// Builds the HTTP client used for every page request
///
/// The client keeps reqwest's defaults (no timeout, default headers) apart
/// from transparent gzip/brotli decoding.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder().gzip(true).brotli(true).build()
}

/// Fetches listing pages with a shared client
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher around an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches a page and returns its body
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The decoded response body
    /// * `Err(ScrapeError::Http)` - The request could not be completed
    /// * `Err(ScrapeError::Status)` - The server answered with a non-2xx status
    pub async fn fetch(&self, url: &Url) -> Result<String, ScrapeError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|source| ScrapeError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;

        tracing::trace!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
