//! Optimistic Enabled Toggle
//!
//! A toggle snapshots the cached list entry, flips the product locally, and
//! later either keeps the server-confirmed value or restores the snapshot.
//! Completions whose view is gone leave the cache untouched.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::BoardError;
use crate::lifetime::LifetimeToken;
use crate::models::{ProductEnabledUpdate, ProductList, UpdateProductEnabledInput};
use crate::query_cache::{ProductListCache, QueryKey};

/// Copy of `list` with one product's `enabled` replaced. Order and all other
/// fields are preserved.
pub fn with_product_enabled(list: &ProductList, product_id: &str, enabled: bool) -> ProductList {
    ProductList {
        items: list
            .items
            .iter()
            .map(|product| {
                if product.id == product_id {
                    let mut updated = product.clone();
                    updated.enabled = enabled;
                    updated
                } else {
                    product.clone()
                }
            })
            .collect(),
        total_items: list.total_items,
    }
}

/// Products with a toggle in flight
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingToggles {
    ids: HashSet<String>,
}

impl PendingToggles {
    /// Idle -> Pending. Returns false if the product is already pending.
    pub fn try_start(&mut self, product_id: &str) -> bool {
        self.ids.insert(product_id.to_string())
    }

    /// Back to Idle
    pub fn finish(&mut self, product_id: &str) {
        self.ids.remove(product_id);
    }

    pub fn is_pending(&self, product_id: &str) -> bool {
        self.ids.contains(product_id)
    }
}

/// How a toggle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleResolution {
    Committed,
    RolledBack,
    /// The requesting view was torn down; nothing was applied
    Discarded,
}

/// One in-flight toggle
#[derive(Debug)]
pub struct EnabledToggle {
    key: QueryKey,
    product_id: String,
    target: bool,
    snapshot: Option<Arc<ProductList>>,
}

impl EnabledToggle {
    /// Snapshot the entry for `key`, then apply the optimistic flip
    pub fn begin(
        cache: &mut ProductListCache,
        key: QueryKey,
        product_id: &str,
        current_enabled: bool,
    ) -> Self {
        let snapshot = cache.get(&key);
        let target = !current_enabled;
        cache.update(&key, |list| with_product_enabled(list, product_id, target));
        Self {
            key,
            product_id: product_id.to_string(),
            target,
            snapshot,
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Mutation input: the negation of the enabled value seen at `begin`
    pub fn input(&self) -> UpdateProductEnabledInput {
        UpdateProductEnabledInput {
            id: self.product_id.clone(),
            enabled: self.target,
        }
    }

    /// Keep the server-confirmed value
    pub fn commit(self, cache: &mut ProductListCache, confirmed: &ProductEnabledUpdate) {
        cache.update(&self.key, |list| {
            with_product_enabled(list, &self.product_id, confirmed.enabled)
        });
    }

    /// Restore the entry exactly as it was before `begin`
    pub fn rollback(self, cache: &mut ProductListCache) {
        cache.restore(self.key, self.snapshot);
    }

    /// Apply the mutation outcome unless the requesting view is gone
    pub fn settle(
        self,
        cache: &mut ProductListCache,
        result: &Result<ProductEnabledUpdate, BoardError>,
        token: &LifetimeToken,
    ) -> ToggleResolution {
        if !token.is_active() {
            return ToggleResolution::Discarded;
        }
        match result {
            Ok(confirmed) => {
                self.commit(cache, confirmed);
                ToggleResolution::Committed
            }
            Err(_) => {
                self.rollback(cache);
                ToggleResolution::RolledBack
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifetime::ViewLifetime;
    use crate::models::{ListProductsPayload, Pagination, Product, ProductFilter};

    fn make_product(id: &str, enabled: bool) -> Product {
        Product {
            id: id.to_string(),
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
            featured_asset: None,
            name: format!("Product {}", id),
            slug: format!("product-{}", id),
            enabled,
            description: "desc".to_string(),
            variants: vec![],
        }
    }

    fn board_key() -> QueryKey {
        QueryKey::product_list(ListProductsPayload {
            filter: ProductFilter::default(),
            pagination: Pagination { page: 1, per_page: 24 },
        })
    }

    fn seeded_cache() -> ProductListCache {
        let mut cache = ProductListCache::new();
        cache.set(
            board_key(),
            ProductList {
                items: vec![make_product("1", true), make_product("2", false), make_product("3", true)],
                total_items: 3,
            },
        );
        cache
    }

    #[test]
    fn test_begin_applies_optimistic_flip() {
        let mut cache = seeded_cache();

        let toggle = EnabledToggle::begin(&mut cache, board_key(), "2", false);

        assert_eq!(toggle.input(), UpdateProductEnabledInput { id: "2".to_string(), enabled: true });
        assert!(cache.get(&board_key()).unwrap().items[1].enabled);
    }

    #[test]
    fn test_success_flips_only_target() {
        let mut cache = seeded_cache();
        let before = cache.get(&board_key()).unwrap();
        let lifetime = ViewLifetime::new();

        let toggle = EnabledToggle::begin(&mut cache, board_key(), "2", false);
        let confirmed = ProductEnabledUpdate { id: "2".to_string(), enabled: true };
        let resolution = toggle.settle(&mut cache, &Ok(confirmed), &lifetime.token());

        assert_eq!(resolution, ToggleResolution::Committed);
        let after = cache.get(&board_key()).unwrap();
        assert_eq!(after.items.len(), before.items.len());
        for (old, new) in before.items.iter().zip(after.items.iter()) {
            assert_eq!(old.id, new.id);
            if old.id == "2" {
                assert!(new.enabled);
                let mut expected = old.clone();
                expected.enabled = true;
                assert_eq!(new, &expected);
            } else {
                assert_eq!(old, new);
            }
        }
        assert_eq!(after.total_items, 3);
    }

    #[test]
    fn test_server_value_wins_on_commit() {
        let mut cache = seeded_cache();
        let toggle = EnabledToggle::begin(&mut cache, board_key(), "1", true);

        toggle.commit(&mut cache, &ProductEnabledUpdate { id: "1".to_string(), enabled: true });

        assert!(cache.get(&board_key()).unwrap().items[0].enabled);
    }

    #[test]
    fn test_failure_restores_snapshot_exactly() {
        let mut cache = seeded_cache();
        let snapshot = cache.get(&board_key()).unwrap();
        let lifetime = ViewLifetime::new();

        let toggle = EnabledToggle::begin(&mut cache, board_key(), "1", true);
        assert!(!cache.get(&board_key()).unwrap().items[0].enabled);

        let failed = Err(BoardError::RemoteMutation("timeout".to_string()));
        let resolution = toggle.settle(&mut cache, &failed, &lifetime.token());

        assert_eq!(resolution, ToggleResolution::RolledBack);
        let restored = cache.get(&board_key()).unwrap();
        assert!(Arc::ptr_eq(&restored, &snapshot));
        assert_eq!(*restored, *snapshot);
    }

    #[test]
    fn test_rollback_without_entry_leaves_cache_empty() {
        let mut cache = ProductListCache::new();

        let toggle = EnabledToggle::begin(&mut cache, board_key(), "1", true);
        assert!(cache.is_empty());
        cache.set(board_key(), ProductList { items: vec![make_product("1", false)], total_items: 1 });

        toggle.rollback(&mut cache);

        assert!(!cache.contains(&board_key()));
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut cache = seeded_cache();
        let lifetime = ViewLifetime::new();
        let token = lifetime.token();

        let toggle = EnabledToggle::begin(&mut cache, board_key(), "1", true);
        let optimistic = cache.get(&board_key()).unwrap();
        lifetime.end();

        let failed = Err(BoardError::RemoteMutation("timeout".to_string()));
        let resolution = toggle.settle(&mut cache, &failed, &token);

        assert_eq!(resolution, ToggleResolution::Discarded);
        assert!(Arc::ptr_eq(&cache.get(&board_key()).unwrap(), &optimistic));
    }

    #[test]
    fn test_only_one_pending_toggle_per_product() {
        let mut pending = PendingToggles::default();

        assert!(pending.try_start("1"));
        assert!(!pending.try_start("1"));
        assert!(pending.try_start("2"));
        assert!(pending.is_pending("1"));

        pending.finish("1");

        assert!(!pending.is_pending("1"));
        assert!(pending.try_start("1"));
    }

    #[test]
    fn test_toggle_targets_other_keys_untouched() {
        let mut cache = seeded_cache();
        let other_key = QueryKey::product_list(ListProductsPayload {
            filter: ProductFilter::default(),
            pagination: Pagination { page: 2, per_page: 24 },
        });
        cache.set(other_key.clone(), ProductList { items: vec![make_product("1", true)], total_items: 25 });

        let _toggle = EnabledToggle::begin(&mut cache, board_key(), "1", true);

        assert!(cache.get(&other_key).unwrap().items[0].enabled);
    }
}
