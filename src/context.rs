//! Board Context
//!
//! Shared view state provided via Leptos Context API: the URL-backed board
//! search, the refetch trigger and the board's lifetime.

use leptos::prelude::*;

use crate::lifetime::{LifetimeToken, ViewLifetime};
use crate::query_params::BoardSearch;

/// Current `location.search` of the window
pub fn current_location_search() -> String {
    window().location().search().unwrap_or_default()
}

/// Board-wide signals provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Filter/pagination state mirrored in the URL - read
    pub search: ReadSignal<BoardSearch>,
    /// Filter/pagination state mirrored in the URL - write
    set_search: WriteSignal<BoardSearch>,
    /// Trigger to re-issue the list query - read
    pub refetch_trigger: ReadSignal<u32>,
    /// Trigger to re-issue the list query - write
    set_refetch_trigger: WriteSignal<u32>,
    lifetime: StoredValue<ViewLifetime>,
}

impl BoardContext {
    pub fn new(
        search: (ReadSignal<BoardSearch>, WriteSignal<BoardSearch>),
        refetch_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        lifetime: ViewLifetime,
    ) -> Self {
        Self {
            search: search.0,
            set_search: search.1,
            refetch_trigger: refetch_trigger.0,
            set_refetch_trigger: refetch_trigger.1,
            lifetime: StoredValue::new(lifetime),
        }
    }

    /// Push new board state to the URL and the search signal
    pub fn navigate(&self, next: BoardSearch) {
        let url = next.to_query_string();
        match window().history() {
            Ok(history) => {
                if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url)) {
                    web_sys::console::error_1(&format!("[BOARD] pushState failed: {:?}", e).into());
                }
            }
            Err(e) => web_sys::console::error_1(&format!("[BOARD] no history: {:?}", e).into()),
        }
        self.set_search.set(next);
    }

    /// Replace the search state without adding a history entry
    pub fn sync_from_location(&self, default_per_page: u32) {
        let parsed =
            BoardSearch::from_query_str_with_default(&current_location_search(), default_per_page);
        self.set_search.set(parsed);
    }

    /// Re-issue the list query for the current key
    pub fn refetch(&self) {
        self.set_refetch_trigger.update(|v| *v += 1);
    }

    /// Token that stays active while the board view is mounted
    pub fn lifetime_token(&self) -> LifetimeToken {
        self.lifetime.with_value(|lifetime| lifetime.token())
    }
}

/// Get the board context
pub fn use_board_context() -> BoardContext {
    expect_context::<BoardContext>()
}
