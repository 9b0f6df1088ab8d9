//! Load Error View Component

use leptos::prelude::*;

use crate::context::use_board_context;

/// Shown instead of the board when the list query fails
#[component]
pub fn LoadErrorView(is_fetching: ReadSignal<bool>) -> impl IntoView {
    let ctx = use_board_context();

    let on_reload = move |_: web_sys::MouseEvent| {
        if let Err(e) = window().location().reload() {
            web_sys::console::error_1(&format!("[BOARD] Reload failed: {:?}", e).into());
        }
    };

    view! {
        <div class="board-error">
            <h2>"Failed to load products"</h2>
            <p>"Something went wrong while loading the product list."</p>
            <div class="board-error-actions">
                <button
                    class="retry-btn"
                    disabled=move || is_fetching.get()
                    on:click=move |_| ctx.refetch()
                >
                    {move || if is_fetching.get() { "Retrying…" } else { "Retry" }}
                </button>
                <button class="reload-btn" on:click=on_reload>
                    "Reload page"
                </button>
            </div>
        </div>
    }
}
