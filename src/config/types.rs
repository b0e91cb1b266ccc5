//! Configuration types.

use crate::fetch::{DatasetSource, DatasetSources, FetcherConfig, DEFAULT_USER_AGENT};
use crate::model::DatasetKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Dataset locations
    pub sources: SourcesConfig,
    /// HTTP client settings
    pub fetch: FetchConfig,
    /// Terminal UI settings
    pub tui: TuiConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Where each dataset is read from: an `http(s)://` URL or a local path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SourcesConfig {
    /// Conforming-products JSON list
    pub products: String,
    /// C2PA trust list (PEM bundle)
    pub trust_list: String,
    /// C2PA TSA trust list (PEM bundle)
    pub tsa_trust_list: String,
}

impl SourcesConfig {
    #[must_use]
    pub fn get(&self, kind: DatasetKind) -> &str {
        match kind {
            DatasetKind::Products => &self.products,
            DatasetKind::TrustList => &self.trust_list,
            DatasetKind::TsaTrustList => &self.tsa_trust_list,
        }
    }

    pub fn set(&mut self, kind: DatasetKind, location: impl Into<String>) {
        let location = location.into();
        match kind {
            DatasetKind::Products => self.products = location,
            DatasetKind::TrustList => self.trust_list = location,
            DatasetKind::TsaTrustList => self.tsa_trust_list = location,
        }
    }

    #[must_use]
    pub fn to_dataset_sources(&self) -> DatasetSources {
        DatasetSources {
            products: DatasetSource::from(self.products.as_str()),
            trust_list: DatasetSource::from(self.trust_list.as_str()),
            tsa_trust_list: DatasetSource::from(self.tsa_trust_list.as_str()),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            products: DatasetKind::Products.default_url(),
            trust_list: DatasetKind::TrustList.default_url(),
            tsa_trust_list: DatasetKind::TsaTrustList.default_url(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FetchConfig {
    /// Whole-request timeout in seconds
    #[schemars(range(min = 1))]
    pub timeout_secs: u64,
    /// `User-Agent` header sent with each request
    pub user_agent: String,
}

impl FetchConfig {
    #[must_use]
    pub fn to_fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Redraw tick in milliseconds
    #[schemars(range(min = 1))]
    pub tick_rate_ms: u64,
    /// Enable mouse scrolling
    pub mouse_enabled: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            mouse_enabled: true,
        }
    }
}
