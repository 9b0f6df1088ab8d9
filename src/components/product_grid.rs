//! Product Grid Component

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::ProductCard;
use crate::models::ProductList;
use crate::query_cache::QueryKey;

/// Cards for the current page, or the empty state
#[component]
pub fn ProductGrid(
    data: Signal<Option<Arc<ProductList>>>,
    query_key: Memo<QueryKey>,
) -> impl IntoView {
    view! {
        {move || {
            let key = query_key.get();
            match data.get() {
                Some(list) if !list.items.is_empty() => view! {
                    <div class="product-grid">
                        {list
                            .items
                            .iter()
                            .cloned()
                            .map(|product| view! { <ProductCard product=product query_key=key.clone() /> })
                            .collect_view()}
                    </div>
                }
                .into_any(),
                _ => view! {
                    <div class="board-empty">
                        <p>"No results"</p>
                    </div>
                }
                .into_any(),
            }
        }}
    }
}
