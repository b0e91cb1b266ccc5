//! Configuration validation.

use super::types::{AppConfig, FetchConfig, SourcesConfig, TuiConfig};
use crate::model::DatasetKind;

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// Dotted path of the offending field
    pub field: String,
    /// What is wrong with it
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.sources.validate());
        errors.extend(self.fetch.validate());
        errors.extend(self.tui.validate());
        errors
    }
}

impl Validatable for SourcesConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (kind, key) in DatasetKind::ALL
            .into_iter()
            .zip(["products", "trust_list", "tsa_trust_list"])
        {
            let field = format!("sources.{key}");
            let location = self.get(kind).trim();
            if location.is_empty() {
                errors.push(ConfigError::new(field, "Location must not be empty"));
                continue;
            }
            if let Some((scheme, _)) = location.split_once("://") {
                let scheme = scheme.to_ascii_lowercase();
                if !matches!(scheme.as_str(), "http" | "https" | "file") {
                    errors.push(ConfigError::new(
                        field,
                        format!("Unsupported scheme '{scheme}'. Use http(s):// or a local path"),
                    ));
                }
            }
        }
        errors
    }
}

impl Validatable for FetchConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.timeout_secs == 0 {
            errors.push(ConfigError::new(
                "fetch.timeout_secs",
                "Timeout must be at least 1 second",
            ));
        }
        if self.user_agent.trim().is_empty() {
            errors.push(ConfigError::new(
                "fetch.user_agent",
                "User agent must not be empty",
            ));
        }
        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        if self.tick_rate_ms == 0 {
            vec![ConfigError::new(
                "tui.tick_rate_ms",
                "Tick rate must be at least 1 ms",
            )]
        } else {
            Vec::new()
        }
    }
}
