//! Board List Query
//!
//! Fetches the page for the active query key into the store's cache and
//! exposes loading/error state. Cached pages render immediately and are
//! refreshed in the background.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::BoardContext;
use crate::error::BoardError;
use crate::models::ProductList;
use crate::query_cache::QueryKey;
use crate::store::{store_cached_list, store_set_list, BoardStore};

#[derive(Clone, Copy)]
pub struct ProductListQuery {
    pub key: Memo<QueryKey>,
    pub data: Signal<Option<Arc<ProductList>>>,
    /// No data and no error yet for the active key
    pub is_pending: Signal<bool>,
    pub is_fetching: ReadSignal<bool>,
    pub error: ReadSignal<Option<BoardError>>,
}

pub fn use_product_list(store: BoardStore, ctx: BoardContext) -> ProductListQuery {
    let key = Memo::new(move |_| QueryKey::product_list(ctx.search.get().payload()));
    let (is_fetching, set_is_fetching) = signal(false);
    let (error, set_error) = signal::<Option<BoardError>>(None);

    Effect::new(move |previous: Option<QueryKey>| {
        let _ = ctx.refetch_trigger.get();
        let requested = key.get();
        let token = ctx.lifetime_token();

        set_is_fetching.set(true);
        // A retry of the same key keeps showing the error until it resolves
        if previous.as_ref() != Some(&requested) {
            set_error.set(None);
        }

        let in_flight = requested.clone();

        spawn_local(async move {
            let requested = in_flight;
            let result = commands::list_products(&requested.payload).await;
            if !token.is_active() {
                return;
            }
            let is_current = key.get_untracked() == requested;
            match result {
                Ok(list) => {
                    web_sys::console::log_1(
                        &format!("[BOARD] Loaded {} of {} products", list.items.len(), list.total_items).into(),
                    );
                    if is_current {
                        set_error.set(None);
                    }
                    store_set_list(&store, requested, list);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[BOARD] Error fetching products: {}", e).into());
                    if is_current {
                        set_error.set(Some(e));
                    }
                }
            }
            if is_current {
                set_is_fetching.set(false);
            }
        });

        requested
    });

    let data = Signal::derive(move || store_cached_list(&store, &key.get()));
    let is_pending = Signal::derive(move || data.with(Option::is_none) && error.with(Option::is_none));

    ProductListQuery { key, data, is_pending, is_fetching, error }
}
