//! The process-wide dataset store.

use super::{DatasetSource, DatasetSources, SharedDataset, TextFetcher};
use crate::error::{ErrorContext, Result};
use crate::model::{Certificate, DatasetKind, Product};
use crate::parsers::{parse_pem_bundle, parse_products_str};
use std::sync::Arc;

/// A dataset handed from a loader thread to its consumer.
#[derive(Debug, Clone)]
pub enum LoadedDataset {
    Products(Arc<Vec<Product>>),
    Certificates(DatasetKind, Arc<Vec<Certificate>>),
}

impl LoadedDataset {
    #[must_use]
    pub const fn kind(&self) -> DatasetKind {
        match self {
            Self::Products(_) => DatasetKind::Products,
            Self::Certificates(kind, _) => *kind,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Products(products) => products.len(),
            Self::Certificates(_, certificates) => certificates.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Owns the fetcher and one memoized slot per dataset.
///
/// Each dataset is fetched at most once for the lifetime of the store,
/// whether the fetch succeeds or not. A failed fetch or parse is logged and
/// yields an empty collection.
pub struct DatasetStore {
    fetcher: Box<dyn TextFetcher>,
    sources: DatasetSources,
    products: SharedDataset<Vec<Product>>,
    trust_list: SharedDataset<Vec<Certificate>>,
    tsa_trust_list: SharedDataset<Vec<Certificate>>,
}

impl DatasetStore {
    #[must_use]
    pub fn new(fetcher: Box<dyn TextFetcher>, sources: DatasetSources) -> Self {
        Self {
            fetcher,
            sources,
            products: SharedDataset::new(),
            trust_list: SharedDataset::new(),
            tsa_trust_list: SharedDataset::new(),
        }
    }

    #[must_use]
    pub const fn sources(&self) -> &DatasetSources {
        &self.sources
    }

    /// Normalized conforming products.
    pub fn products(&self) -> Arc<Vec<Product>> {
        self.products.get_or_load(|| {
            self.load_or_empty(DatasetKind::Products, |text| parse_products_str(text))
        })
    }

    /// Certificates of the signing trust list.
    pub fn trust_list(&self) -> Arc<Vec<Certificate>> {
        self.trust_list.get_or_load(|| {
            self.load_or_empty(DatasetKind::TrustList, |text| Ok(parse_pem_bundle(text)))
        })
    }

    /// Certificates of the timestamp-authority trust list.
    pub fn tsa_trust_list(&self) -> Arc<Vec<Certificate>> {
        self.tsa_trust_list.get_or_load(|| {
            self.load_or_empty(DatasetKind::TsaTrustList, |text| Ok(parse_pem_bundle(text)))
        })
    }

    /// Certificates for either trust list. `Products` yields an empty list.
    pub fn certificates(&self, kind: DatasetKind) -> Arc<Vec<Certificate>> {
        match kind {
            DatasetKind::TrustList => self.trust_list(),
            DatasetKind::TsaTrustList => self.tsa_trust_list(),
            DatasetKind::Products => Arc::new(Vec::new()),
        }
    }

    /// Load `kind`, wrapped for delivery over a channel.
    pub fn load(&self, kind: DatasetKind) -> LoadedDataset {
        match kind {
            DatasetKind::Products => LoadedDataset::Products(self.products()),
            other => LoadedDataset::Certificates(other, self.certificates(other)),
        }
    }

    fn load_or_empty<T>(
        &self,
        kind: DatasetKind,
        parse: impl FnOnce(&str) -> Result<Vec<T>>,
    ) -> Vec<T> {
        let source = self.sources.get(kind);
        match self.fetch_and_parse(kind, source, parse) {
            Ok(items) => {
                tracing::info!(dataset = %kind, count = items.len(), "dataset loaded");
                items
            }
            Err(e) => {
                tracing::warn!(dataset = %kind, source = %source, error = %e, "failed to load dataset");
                Vec::new()
            }
        }
    }

    fn fetch_and_parse<T>(
        &self,
        kind: DatasetKind,
        source: &DatasetSource,
        parse: impl FnOnce(&str) -> Result<Vec<T>>,
    ) -> Result<Vec<T>> {
        tracing::debug!(dataset = %kind, fetcher = self.fetcher.name(), "fetching dataset");
        let text = self
            .fetcher
            .fetch_text(source)
            .with_context(|| format!("loading {kind}"))?;
        parse(&text).with_context(|| format!("loading {kind}"))
    }
}

impl std::fmt::Debug for DatasetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatasetStore")
            .field("fetcher", &self.fetcher.name())
            .field("sources", &self.sources)
            .field("products", &self.products)
            .field("trust_list", &self.trust_list)
            .field("tsa_trust_list", &self.tsa_trust_list)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExplorerError, FetchErrorKind};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const PRODUCTS: &str = r#"[{"recordId": "r1", "applicant": "Acme", "product": {"productType": "generatorProduct", "DN": {"CN": "Cam"}}}]"#;
    const PEM: &str = "CN=Root, O=Org\n-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----\n";

    struct CountingFetcher {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl TextFetcher for CountingFetcher {
        fn fetch_text(&self, source: &DatasetSource) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ExplorerError::fetch(source.to_string(), FetchErrorKind::Status(503)));
            }
            let text = if source.to_string().ends_with(".json") { PRODUCTS } else { PEM };
            Ok(text.to_string())
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    fn store(fail: bool) -> (DatasetStore, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let fetcher = CountingFetcher {
            calls: Arc::clone(&calls),
            fail,
        };
        (DatasetStore::new(Box::new(fetcher), DatasetSources::default()), calls)
    }

    #[test]
    fn test_fetches_each_dataset_once() {
        let (store, calls) = store(false);

        let first = store.products();
        let second = store.products();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].vendor_name, "Acme");
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert_eq!(store.trust_list().len(), 1);
        assert_eq!(store.tsa_trust_list().len(), 1);
        store.trust_list();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_concurrent_callers_share_one_fetch() {
        let (store, calls) = store(false);

        let results: Vec<Arc<Vec<Certificate>>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8).map(|_| scope.spawn(|| store.trust_list())).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(results.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[test]
    fn test_failure_degrades_to_empty_without_retry() {
        let (store, calls) = store(true);

        assert!(store.products().is_empty());
        assert!(store.products().is_empty());
        assert!(store.tsa_trust_list().is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_load_wraps_by_kind() {
        let (store, _) = store(false);
        let loaded = store.load(DatasetKind::TsaTrustList);
        assert_eq!(loaded.kind(), DatasetKind::TsaTrustList);
        assert_eq!(loaded.len(), 1);
        assert!(matches!(store.load(DatasetKind::Products), LoadedDataset::Products(_)));
    }
}
