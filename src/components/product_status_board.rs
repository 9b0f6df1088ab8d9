//! Product Status Board Component
//!
//! The board page: filter bar, product grid, pagination. A failed list
//! query replaces the page content with the error view.

use leptos::prelude::*;

use crate::components::{BoardPagination, LoadErrorView, ProductFilterBar, ProductGrid};
use crate::context::{current_location_search, BoardContext};
use crate::lifetime::ViewLifetime;
use crate::queries::use_product_list;
use crate::query_params::BoardSearch;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn ProductStatusBoard() -> impl IntoView {
    let store = use_board_store();
    let default_per_page = move || store.settings().read().default_per_page;

    let (search, set_search) = signal(BoardSearch::from_query_str_with_default(
        &current_location_search(),
        default_per_page(),
    ));
    let refetch_trigger = signal(0u32);
    let lifetime = ViewLifetime::new();

    let ctx = BoardContext::new((search, set_search), refetch_trigger, lifetime.clone());
    provide_context(ctx);

    // Completion handlers check this before touching shared state
    on_cleanup(move || lifetime.end());

    // Back/forward navigation
    let popstate = window_event_listener(leptos::ev::popstate, move |_| {
        ctx.sync_from_location(default_per_page());
    });
    on_cleanup(move || popstate.remove());

    let query = use_product_list(store, ctx);

    view! {
        {move || {
            if query.error.with(Option::is_some) {
                view! { <LoadErrorView is_fetching=query.is_fetching /> }.into_any()
            } else {
                view! {
                    <div class="board-page">
                        <h1 class="board-title">"Product Status Board"</h1>
                        <section class="board-block">
                            <ProductFilterBar />
                            {move || if query.is_pending.get() {
                                view! {
                                    <div class="board-loading">
                                        <span class="spinner"></span>
                                    </div>
                                }.into_any()
                            } else {
                                view! {
                                    <ProductGrid data=query.data query_key=query.key />
                                }.into_any()
                            }}
                            <BoardPagination data=query.data />
                        </section>
                    </div>
                }.into_any()
            }
        }}
    }
}
