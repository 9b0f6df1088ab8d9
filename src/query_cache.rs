//! Query Cache
//!
//! Keyed store of fetched results. Values are immutable `Arc` snapshots:
//! every write builds a new value from the old one and swaps it in, so a
//! snapshot taken earlier is never affected by later writes.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use crate::models::ListProductsPayload;

/// Feature identifier of the board's list queries
pub const PRODUCT_STATUS_BOARD_QUERY_KEY: &str = "list-product-status-board";

/// Composite cache key: feature identifier plus filter/pagination payload
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub feature: &'static str,
    pub payload: ListProductsPayload,
}

impl QueryKey {
    pub fn product_list(payload: ListProductsPayload) -> Self {
        Self { feature: PRODUCT_STATUS_BOARD_QUERY_KEY, payload }
    }
}

#[derive(Debug, Clone)]
pub struct QueryCache<K, V> {
    entries: HashMap<K, Arc<V>>,
}

impl<K, V> Default for QueryCache<K, V> {
    fn default() -> Self {
        Self { entries: HashMap::new() }
    }
}

impl<K: Eq + Hash, V> QueryCache<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot for `key`
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.entries.get(key).cloned()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Replace the entry with a fresh value
    pub fn set(&mut self, key: K, value: V) {
        self.entries.insert(key, Arc::new(value));
    }

    /// Derive a new value from the current one. No-op when the key is absent.
    pub fn update<F>(&mut self, key: &K, f: F) -> bool
    where
        F: FnOnce(&V) -> V,
    {
        match self.entries.get_mut(key) {
            Some(current) => {
                let next = f(current.as_ref());
                *current = Arc::new(next);
                true
            }
            None => false,
        }
    }

    /// Put back a snapshot taken with `get`. `None` removes the entry.
    pub fn restore(&mut self, key: K, snapshot: Option<Arc<V>>) {
        match snapshot {
            Some(value) => {
                self.entries.insert(key, value);
            }
            None => {
                self.entries.remove(&key);
            }
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<Arc<V>> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cache of board list results
pub type ProductListCache = QueryCache<QueryKey, crate::models::ProductList>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Pagination, ProductFilter, StatusFilter};

    fn key(page: u32, status: Option<StatusFilter>) -> QueryKey {
        QueryKey::product_list(ListProductsPayload {
            filter: ProductFilter { search: None, status },
            pagination: Pagination { page, per_page: 24 },
        })
    }

    #[test]
    fn test_keys_differ_by_payload() {
        let mut cache: QueryCache<QueryKey, u32> = QueryCache::new();
        cache.set(key(1, None), 1);
        cache.set(key(2, None), 2);
        cache.set(key(1, Some(StatusFilter::Enabled)), 3);

        assert_eq!(cache.len(), 3);
        assert_eq!(*cache.get(&key(1, None)).unwrap(), 1);
        assert_eq!(*cache.get(&key(1, Some(StatusFilter::Enabled))).unwrap(), 3);
    }

    #[test]
    fn test_update_is_copy_on_write() {
        let mut cache: QueryCache<QueryKey, Vec<u32>> = QueryCache::new();
        cache.set(key(1, None), vec![1, 2, 3]);
        let before = cache.get(&key(1, None)).unwrap();

        assert!(cache.update(&key(1, None), |v| v.iter().map(|n| n * 10).collect()));

        assert_eq!(*before, vec![1, 2, 3]);
        assert_eq!(*cache.get(&key(1, None)).unwrap(), vec![10, 20, 30]);
    }

    #[test]
    fn test_update_missing_key_is_noop() {
        let mut cache: QueryCache<QueryKey, u32> = QueryCache::new();
        assert!(!cache.update(&key(1, None), |v| v + 1));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_restore_snapshot_and_absence() {
        let mut cache: QueryCache<QueryKey, u32> = QueryCache::new();
        cache.set(key(1, None), 1);
        let snapshot = cache.get(&key(1, None));
        cache.set(key(1, None), 2);

        cache.restore(key(1, None), snapshot.clone());
        assert!(Arc::ptr_eq(&cache.get(&key(1, None)).unwrap(), snapshot.as_ref().unwrap()));

        let absent = cache.get(&key(2, None));
        cache.set(key(2, None), 5);
        cache.restore(key(2, None), absent);
        assert!(!cache.contains(&key(2, None)));
    }
}
