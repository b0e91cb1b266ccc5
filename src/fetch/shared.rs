//! A lazily-initialized value shared by every consumer.

use std::fmt;
use std::sync::{Arc, OnceLock};

/// Runs its loader at most once; every caller gets the same `Arc`.
///
/// Callers arriving while the loader runs block until it finishes.
pub struct SharedDataset<T> {
    cell: OnceLock<Arc<T>>,
}

impl<T> SharedDataset<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Return the cached value, running `load` if this is the first call.
    pub fn get_or_load(&self, load: impl FnOnce() -> T) -> Arc<T> {
        Arc::clone(self.cell.get_or_init(|| Arc::new(load())))
    }

    /// The cached value, if a load has completed.
    #[must_use]
    pub fn get(&self) -> Option<Arc<T>> {
        self.cell.get().map(Arc::clone)
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for SharedDataset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SharedDataset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedDataset")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_loader_runs_once() {
        let shared = SharedDataset::new();
        let calls = AtomicUsize::new(0);

        let first = shared.get_or_load(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            vec![1, 2, 3]
        });
        let second = shared.get_or_load(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            Vec::new()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*second, [1, 2, 3]);
    }

    #[test]
    fn test_get_before_load() {
        let shared: SharedDataset<u8> = SharedDataset::default();
        assert!(shared.get().is_none());
        assert!(!shared.is_loaded());
        shared.get_or_load(|| 7);
        assert_eq!(shared.get().as_deref(), Some(&7));
    }
}
