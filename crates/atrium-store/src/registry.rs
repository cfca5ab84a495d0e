//! Type-erased registry of per-page stores

use crate::store::{Identified, RecordStore};
use dashmap::DashMap;
use std::any::Any;
use std::sync::Arc;

/// Holds one [`RecordStore`] per console page
///
/// Pages are keyed by an arbitrary string (typically the resource path).
/// Stores are type-erased internally and downcast on access; asking for the
/// wrong type at a key yields a fresh independent store rather than a panic.
#[derive(Default)]
pub struct StoreRegistry {
    stores: DashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl StoreRegistry {
    /// Empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            stores: DashMap::new(),
        }
    }

    /// Get the store for a page, creating it on first access
    #[must_use]
    pub fn store<T>(&self, key: &str) -> Arc<RecordStore<T>>
    where
        T: Identified + Clone + Send + Sync + 'static,
    {
        if let Some(existing) = self.stores.get(key) {
            if let Ok(store) = Arc::clone(existing.value()).downcast::<RecordStore<T>>() {
                return store;
            }
        }

        let store = Arc::new(RecordStore::<T>::new());
        self.stores
            .insert(key.to_string(), Arc::clone(&store) as Arc<dyn Any + Send + Sync>);
        store
    }

    /// Number of registered stores
    #[must_use]
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    /// Whether any store is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}
