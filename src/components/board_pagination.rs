//! Board Pagination Component
//!
//! Page-size select plus previous/next and numbered page links.

use std::sync::Arc;

use leptos::prelude::*;

use crate::context::use_board_context;
use crate::models::ProductList;
use crate::pagination::{go_to_page, page_links, total_pages, PageLink, PAGE_SIZE_OPTIONS};

#[component]
pub fn BoardPagination(data: Signal<Option<Arc<ProductList>>>) -> impl IntoView {
    let ctx = use_board_context();

    let page = move || ctx.search.with(|s| s.page);
    let per_page = move || ctx.search.with(|s| s.per_page);
    let pages = Memo::new(move |_| {
        data.with(|list| list.as_ref().map_or(0, |list| total_pages(list.total_items, per_page())))
    });

    let navigate_to = move |target: i64| {
        if let Some(page) = go_to_page(target, pages.get_untracked()) {
            ctx.navigate(ctx.search.get_untracked().with_page(page));
        }
    };

    let on_per_page_change = move |ev: web_sys::Event| {
        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
            ctx.navigate(ctx.search.get_untracked().with_per_page(size));
        }
    };

    view! {
        <div class="board-pagination">
            <label class="page-size">
                "Per page "
                <select on:change=on_per_page_change>
                    {PAGE_SIZE_OPTIONS
                        .into_iter()
                        .map(|size| view! {
                            <option value=size.to_string() prop:selected=move || per_page() == size>
                                {size}
                            </option>
                        })
                        .collect_view()}
                </select>
            </label>
            <Show when=move || { pages.get() > 1 }>
                <nav class="page-links">
                    <button
                        class="page-btn"
                        disabled=move || page() <= 1
                        on:click=move |_| navigate_to(i64::from(page()) - 1)
                    >
                        "‹"
                    </button>
                    {move || {
                        page_links(page(), pages.get())
                            .into_iter()
                            .map(|link| match link {
                                PageLink::Page { number, active } => view! {
                                    <button
                                        class="page-btn"
                                        class:active=active
                                        on:click=move |_| navigate_to(i64::from(number))
                                    >
                                        {number}
                                    </button>
                                }
                                .into_any(),
                                PageLink::Ellipsis => {
                                    view! { <span class="page-ellipsis">"…"</span> }.into_any()
                                }
                            })
                            .collect_view()
                    }}
                    <button
                        class="page-btn"
                        disabled=move || page() >= pages.get()
                        on:click=move |_| navigate_to(i64::from(page()) + 1)
                    >
                        "›"
                    </button>
                </nav>
            </Show>
        </div>
    }
}
