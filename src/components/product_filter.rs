//! Product Filter Bar Component
//!
//! Search box (debounced) and status select. Both write through the board
//! context so the URL stays in sync.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_board_context;
use crate::models::StatusFilter;
use crate::store::{use_board_store, BoardStateStoreFields};

/// Delay between the last keystroke and the query update
const SEARCH_DEBOUNCE_MS: u32 = 500;

#[component]
pub fn ProductFilterBar() -> impl IntoView {
    let store = use_board_store();
    let ctx = use_board_context();

    let (search_text, set_search_text) =
        signal(ctx.search.get_untracked().search.unwrap_or_default());
    // Bumped on every keystroke; a debounced update only fires if still current
    let generation = StoredValue::new(0u32);

    // Back/forward navigation replaces the committed search
    Effect::new(move |_| {
        let committed = ctx.search.with(|s| s.search.clone().unwrap_or_default());
        set_search_text.set(committed);
    });

    let on_search_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        set_search_text.set(text.clone());
        generation.update_value(|g| *g += 1);
        let ticket = generation.get_value();
        let token = ctx.lifetime_token();

        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if !token.is_active() || generation.try_get_value() != Some(ticket) {
                return;
            }
            let current = ctx.search.get_untracked();
            if current.search.as_deref().unwrap_or_default() != text.as_str() {
                ctx.navigate(current.with_search(&text));
            }
        });
    };

    let on_clear = move |_: web_sys::MouseEvent| {
        generation.update_value(|g| *g += 1);
        set_search_text.set(String::new());
        let default_per_page = store.settings().read_untracked().default_per_page;
        ctx.navigate(ctx.search.get_untracked().cleared_search(default_per_page));
    };

    let on_status_change = move |ev: web_sys::Event| {
        if let Some(status) = StatusFilter::parse(&event_target_value(&ev)) {
            ctx.navigate(ctx.search.get_untracked().with_status(status));
        }
    };

    view! {
        <div class="filter-bar">
            <div class="search-box">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search products..."
                    prop:value=move || search_text.get()
                    on:input=on_search_input
                />
                <Show when=move || !search_text.with(String::is_empty)>
                    <button class="search-clear-btn" title="Clear search" on:click=on_clear>
                        "×"
                    </button>
                </Show>
            </div>
            <select class="status-select" on:change=on_status_change>
                {StatusFilter::ALL_OPTIONS
                    .into_iter()
                    .map(|status| {
                        view! {
                            <option
                                value=status.as_str()
                                prop:selected=move || ctx.search.with(|s| s.status_or_all() == status)
                            >
                                {status.as_str()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
