//! HTTP fetcher implementation
//!
//! One GET request per document, no retries. Failures are classified into
//! network errors (retryable by the caller) and parse errors.

use crate::config::{Config, HttpConfig};
use crate::fetcher::{CancelSignal, ParsedDocument};
use crate::HarvestError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use prd_harvest::config::HttpConfig;
/// use prd_harvest::fetcher::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Retrieves documents relative to a fixed base URL
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    base_url: Url,
    cancel: Option<CancelSignal>,
}

impl Fetcher {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self {
            client,
            base_url,
            cancel: None,
        }
    }

    /// Builds a fetcher from the `[site]` and `[http]` configuration
    pub fn from_config(config: &Config) -> Result<Self, HarvestError> {
        let base_url = config.site.parsed_base_url()?;
        let client = build_http_client(&config.http)?;
        Ok(Self::new(client, base_url))
    }

    /// Makes every fetch observe `signal`
    pub fn with_cancel_signal(mut self, signal: CancelSignal) -> Self {
        self.cancel = Some(signal);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Path component of the base URL, e.g. `/pathfinderRPG/prd/`
    pub fn base_path(&self) -> &str {
        self.base_url.path()
    }

    /// Resolves a document path against the base URL
    pub fn resolve(&self, relative_path: &str) -> Result<Url, HarvestError> {
        Ok(self.base_url.join(relative_path)?)
    }

    /// Fetches and parses the document at `relative_path`
    ///
    /// # Errors
    ///
    /// * `HarvestError::Network` - DNS/connect failure, timeout, non-2xx status
    /// * `HarvestError::Cancelled` - the cancel signal fired before completion
    /// * `HarvestError::Parse` - the response is not an HTML document
    pub async fn fetch(&self, relative_path: &str) -> Result<ParsedDocument, HarvestError> {
        let url = self.resolve(relative_path)?;

        let Some(signal) = &self.cancel else {
            return self.fetch_url(url).await;
        };

        if signal.is_cancelled() {
            return Err(HarvestError::Cancelled {
                url: url.to_string(),
            });
        }

        let cancelled_url = url.to_string();
        tokio::select! {
            biased;
            _ = signal.cancelled() => {
                tracing::debug!("Fetch of {} cancelled", cancelled_url);
                Err(HarvestError::Cancelled { url: cancelled_url })
            }
            result = self.fetch_url(url) => result,
        }
    }

    async fn fetch_url(&self, url: Url) -> Result<ParsedDocument, HarvestError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| network_error(&url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::Network {
                url: url.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        // A missing header is tolerated; an explicit non-HTML type is not.
        if !content_type.is_empty() && !content_type.contains("html") {
            return Err(HarvestError::Parse {
                url: url.to_string(),
                message: format!("Expected HTML, got '{}'", content_type),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| network_error(&url, &e))?;

        tracing::debug!("Fetched {} ({} bytes)", url, body.len());
        ParsedDocument::parse(url, &body)
    }
}

/// Maps a transport failure onto `HarvestError::Network`
fn network_error(url: &Url, error: &reqwest::Error) -> HarvestError {
    let message = if error.is_timeout() {
        "Request timeout".to_string()
    } else if error.is_connect() {
        format!("Connection failed: {}", error)
    } else {
        error.to_string()
    };

    HarvestError::Network {
        url: url.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_fetcher() -> Fetcher {
        Fetcher::from_config(&Config::default()).unwrap()
    }

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client(&HttpConfig::default()).is_ok());
    }

    #[test]
    fn test_base_path() {
        assert_eq!(test_fetcher().base_path(), "/pathfinderRPG/prd/");
    }

    #[test]
    fn test_resolve_relative_paths() {
        let fetcher = test_fetcher();
        assert_eq!(
            fetcher.resolve("").unwrap().as_str(),
            "http://paizo.com/pathfinderRPG/prd/"
        );
        assert_eq!(
            fetcher.resolve("indices/feats.html").unwrap().as_str(),
            "http://paizo.com/pathfinderRPG/prd/indices/feats.html"
        );
    }

    #[tokio::test]
    async fn test_already_cancelled_fetch_fails_fast() {
        let (handle, signal) = crate::fetcher::cancel_pair();
        handle.cancel();
        let fetcher = test_fetcher().with_cancel_signal(signal);

        let err = fetcher.fetch("indices/feats.html").await.unwrap_err();
        assert!(matches!(err, HarvestError::Cancelled { .. }));
        assert!(err.is_retryable());
    }
}
