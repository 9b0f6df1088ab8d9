//! Product Status Board Frontend App
//!
//! Root component: creates the global store, loads the backend settings,
//! then mounts the board and the toast stack.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{ProductStatusBoard, ToastStack};
use crate::store::{BoardState, BoardStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(BoardState::default());
    provide_context(store);

    // The board reads its default page size from the settings
    let (settings_loaded, set_settings_loaded) = signal(false);

    spawn_local(async move {
        match commands::get_board_settings().await {
            Ok(settings) => {
                web_sys::console::log_1(
                    &format!(
                        "[APP] Settings: low stock <= {}, {} per page",
                        settings.low_stock_threshold, settings.default_per_page
                    )
                    .into(),
                );
                store.settings().set(settings);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[APP] Failed to load settings, using defaults: {}", e).into());
            }
        }
        set_settings_loaded.set(true);
    });

    view! {
        <main class="app-layout">
            <Show
                when=move || settings_loaded.get()
                fallback=|| view! {
                    <div class="board-loading">
                        <span class="spinner"></span>
                    </div>
                }
            >
                <ProductStatusBoard />
            </Show>
            <ToastStack />
        </main>
    }
}
