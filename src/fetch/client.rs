//! Text fetchers for dataset sources.

use super::DatasetSource;
use crate::error::{ExplorerError, Result};
use std::fs;
use std::time::Duration;

/// User agent sent with every HTTP request unless configured otherwise.
pub const DEFAULT_USER_AGENT: &str = concat!("c2pa-explorer/", env!("CARGO_PKG_VERSION"));

/// Reads the full text of a dataset source.
///
/// Implementations must be shareable across the loader threads.
pub trait TextFetcher: Send + Sync {
    /// Fetch `source` as UTF-8 text.
    fn fetch_text(&self, source: &DatasetSource) -> Result<String>;

    /// Short name for log lines.
    fn name(&self) -> &'static str;
}

/// HTTP client settings.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Whole-request timeout
    pub timeout: Duration,
    /// `User-Agent` header value
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Production fetcher: blocking HTTP for URLs, filesystem reads for paths.
pub struct HttpFetcher {
    config: FetcherConfig,
    #[cfg(feature = "remote")]
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Build the fetcher and its HTTP client.
    pub fn new(config: FetcherConfig) -> Result<Self> {
        #[cfg(feature = "remote")]
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            config,
            #[cfg(feature = "remote")]
            client,
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(FetcherConfig::default())
    }

    #[must_use]
    pub const fn config(&self) -> &FetcherConfig {
        &self.config
    }

    #[cfg(feature = "remote")]
    fn fetch_url(&self, url: &str) -> Result<String> {
        use crate::error::FetchErrorKind;

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ExplorerError::fetch(url, FetchErrorKind::Status(status.as_u16())));
        }
        Ok(response.text()?)
    }

    /// Fetch URL (stub for builds without the `remote` feature)
    #[cfg(not(feature = "remote"))]
    fn fetch_url(&self, url: &str) -> Result<String> {
        Err(ExplorerError::fetch(
            url,
            crate::error::FetchErrorKind::RemoteDisabled,
        ))
    }
}

impl TextFetcher for HttpFetcher {
    fn fetch_text(&self, source: &DatasetSource) -> Result<String> {
        match source {
            DatasetSource::Url(url) => {
                tracing::debug!(url = %url, timeout = ?self.config.timeout, "requesting dataset");
                self.fetch_url(url)
            }
            DatasetSource::File(path) => {
                tracing::debug!(path = %path.display(), "reading dataset from disk");
                fs::read_to_string(path).map_err(|e| ExplorerError::io(path, e))
            }
        }
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
