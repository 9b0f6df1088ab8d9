//! Global Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The query cache
//! is only written through the helpers below.

use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::error::BoardError;
use crate::lifetime::LifetimeToken;
use crate::models::{BoardSettings, ProductEnabledUpdate, ProductList};
use crate::optimistic::{EnabledToggle, PendingToggles, ToggleResolution};
use crate::query_cache::{ProductListCache, QueryKey};

/// How long a toast stays on screen
const TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Global board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Fetched list pages keyed by filter/pagination
    pub cache: ProductListCache,
    /// Products with a toggle in flight
    pub pending: PendingToggles,
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
    pub settings: BoardSettings,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Current cached page for `key`
pub fn store_cached_list(store: &BoardStore, key: &QueryKey) -> Option<Arc<ProductList>> {
    store.cache().read().get(key)
}

/// Replace the cached page for `key` with a fresh server result
pub fn store_set_list(store: &BoardStore, key: QueryKey, list: ProductList) {
    store.cache().write().set(key, list);
}

/// Start a toggle: mark pending, snapshot, flip optimistically.
/// Returns None if the product already has a toggle in flight.
pub fn store_begin_toggle(
    store: &BoardStore,
    key: QueryKey,
    product_id: &str,
    current_enabled: bool,
) -> Option<EnabledToggle> {
    if !store.pending().write().try_start(product_id) {
        return None;
    }
    let cache_field = store.cache();
    let mut cache = cache_field.write();
    Some(EnabledToggle::begin(&mut cache, key, product_id, current_enabled))
}

/// Finish a toggle and clear its pending flag
pub fn store_settle_toggle(
    store: &BoardStore,
    toggle: EnabledToggle,
    result: &Result<ProductEnabledUpdate, BoardError>,
    token: &LifetimeToken,
) -> ToggleResolution {
    let product_id = toggle.product_id().to_string();
    let resolution = {
        let cache_field = store.cache();
        let mut cache = cache_field.write();
        toggle.settle(&mut cache, result, token)
    };
    store.pending().write().finish(&product_id);
    resolution
}

/// Show a toast and schedule its removal
pub fn store_push_toast(store: &BoardStore, kind: ToastKind, message: impl Into<String>) {
    let id = {
        let next_field = store.next_toast_id();
        let mut next = next_field.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast { id, kind, message: message.into() });

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
        store_dismiss_toast(&store, id);
    });
}

pub fn store_dismiss_toast(store: &BoardStore, id: u32) {
    store.toasts().write().retain(|toast| toast.id != id);
}
