//! The three published datasets.

use serde::{Deserialize, Serialize};

const UPSTREAM_BASE: &str =
    "https://raw.githubusercontent.com/c2pa-org/conformance-public/refs/heads/main";

/// Which upstream dataset a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetKind {
    /// Conforming-products list (JSON)
    Products,
    /// C2PA signing trust list (PEM)
    TrustList,
    /// C2PA timestamp-authority trust list (PEM)
    TsaTrustList,
}

impl DatasetKind {
    /// All datasets, in tab order.
    pub const ALL: [Self; 3] = [Self::Products, Self::TrustList, Self::TsaTrustList];

    /// Default published location.
    #[must_use]
    pub fn default_url(self) -> String {
        let path = match self {
            Self::Products => "conforming-products/conforming-products-list.json",
            Self::TrustList => "trust-list/C2PA-TRUST-LIST.pem",
            Self::TsaTrustList => "trust-list/C2PA-TSA-TRUST-LIST.pem",
        };
        format!("{UPSTREAM_BASE}/{path}")
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Products => "Conforming Products",
            Self::TrustList => "C2PA Trust List",
            Self::TsaTrustList => "C2PA TSA Trust List",
        }
    }

    /// Public page describing the dataset, shown as the data-source note.
    #[must_use]
    pub const fn browse_url(self) -> &'static str {
        match self {
            Self::Products => "https://github.com/c2pa-org/conformance-public/blob/main/conforming-products/conforming-products-list.json",
            Self::TrustList => "https://github.com/c2pa-org/conformance-public/blob/main/trust-list/C2PA-TRUST-LIST.pem",
            Self::TsaTrustList => "https://github.com/c2pa-org/conformance-public/blob/main/trust-list/C2PA-TSA-TRUST-LIST.pem",
        }
    }
}

impl std::fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls_point_at_upstream() {
        assert!(DatasetKind::Products.default_url().ends_with("conforming-products-list.json"));
        assert!(DatasetKind::TsaTrustList.default_url().ends_with("C2PA-TSA-TRUST-LIST.pem"));
        assert_ne!(
            DatasetKind::TrustList.default_url(),
            DatasetKind::TsaTrustList.default_url()
        );
    }
}
