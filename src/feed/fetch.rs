//! HTTP access to the published feed.

use crate::error::FetchError;
use colored::Colorize;
use reqwest::Client;
use std::time::Duration;

/// Single-shot HTTP client for the provider endpoint.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("zscaler-egress-ips/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Fetcher { client })
    }

    /// GET `url` once and return the body.
    ///
    /// The URL is stripped from reqwest errors since [`FetchError`] carries it.
    ///
    /// # Returns
    /// * `Ok(String)` - The body of a 2xx response
    /// * `Err` - On network failure, timeout, non-2xx status or empty body
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        log::info!("Fetching from: {}", url.on_blue());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source: source.without_url(),
            })?;

        let status = response.status();
        log::debug!("HTTP {status} from {url}");
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source: source.without_url(),
        })?;
        if body.trim().is_empty() {
            return Err(FetchError::EmptyBody {
                url: url.to_string(),
            });
        }

        log::debug!("Received {} bytes", body.len());
        Ok(body)
    }
}
