//! Dataset locations.

use crate::model::DatasetKind;
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Where a dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// An `http://` or `https://` URL
    Url(String),
    /// A local copy of the file
    File(PathBuf),
}

impl DatasetSource {
    /// The published location of `kind`.
    #[must_use]
    pub fn upstream(kind: DatasetKind) -> Self {
        Self::Url(kind.default_url())
    }

    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

impl FromStr for DatasetSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Self::Url(s.to_string()))
        } else {
            let path = s.strip_prefix("file://").unwrap_or(s);
            Ok(Self::File(PathBuf::from(path)))
        }
    }
}

impl From<&str> for DatasetSource {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(source) => source,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Locations of all three datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSources {
    pub products: DatasetSource,
    pub trust_list: DatasetSource,
    pub tsa_trust_list: DatasetSource,
}

impl DatasetSources {
    #[must_use]
    pub const fn get(&self, kind: DatasetKind) -> &DatasetSource {
        match kind {
            DatasetKind::Products => &self.products,
            DatasetKind::TrustList => &self.trust_list,
            DatasetKind::TsaTrustList => &self.tsa_trust_list,
        }
    }

    pub fn set(&mut self, kind: DatasetKind, source: DatasetSource) {
        match kind {
            DatasetKind::Products => self.products = source,
            DatasetKind::TrustList => self.trust_list = source,
            DatasetKind::TsaTrustList => self.tsa_trust_list = source,
        }
    }
}

impl Default for DatasetSources {
    fn default() -> Self {
        Self {
            products: DatasetSource::upstream(DatasetKind::Products),
            trust_list: DatasetSource::upstream(DatasetKind::TrustList),
            tsa_trust_list: DatasetSource::upstream(DatasetKind::TsaTrustList),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source() {
        assert!(DatasetSource::from("https://example.com/list.json").is_remote());
        assert!(DatasetSource::from("HTTP://example.com/list.json").is_remote());
        assert_eq!(
            DatasetSource::from("./mirror/list.pem"),
            DatasetSource::File(PathBuf::from("./mirror/list.pem"))
        );
        assert_eq!(
            DatasetSource::from("file:///tmp/list.pem"),
            DatasetSource::File(PathBuf::from("/tmp/list.pem"))
        );
    }

    #[test]
    fn test_default_sources_are_upstream() {
        let sources = DatasetSources::default();
        for kind in DatasetKind::ALL {
            assert_eq!(
                sources.get(kind),
                &DatasetSource::Url(kind.default_url())
            );
        }
    }

    #[test]
    fn test_set_overrides_one_dataset() {
        let mut sources = DatasetSources::default();
        sources.set(DatasetKind::TrustList, DatasetSource::from("local.pem"));
        assert!(!sources.trust_list.is_remote());
        assert!(sources.tsa_trust_list.is_remote());
    }
}
