//! Product Card Component
//!
//! One product on the board: image, name, creation date, status switch and
//! stock figures. Toggling the switch updates the cached page optimistically
//! and reconciles with the server result.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_board_context;
use crate::models::Product;
use crate::optimistic::ToggleResolution;
use crate::query_cache::QueryKey;
use crate::stock::{
    compute_available_stock, compute_status, compute_total_on_hand, stock_tone, StockMeter,
};
use crate::store::{
    store_begin_toggle, store_push_toast, store_settle_toggle, use_board_store,
    BoardStateStoreFields, ToastKind,
};

#[component]
pub fn ProductCard(product: Product, query_key: QueryKey) -> impl IntoView {
    let store = use_board_store();
    let ctx = use_board_context();

    let levels = product.board_stock_levels();
    let available = compute_available_stock(levels);
    let on_hand = compute_total_on_hand(levels);
    let meter = StockMeter::new(available);

    let threshold = move || store.settings().read().low_stock_threshold;
    let status = {
        let product = product.clone();
        Memo::new(move |_| compute_status(&product, threshold()))
    };
    let tone = move || stock_tone(available, threshold());

    let product_id = product.id.clone();
    let enabled = product.enabled;
    let is_pending = {
        let product_id = product_id.clone();
        move || store.pending().read().is_pending(&product_id)
    };

    let on_toggle = {
        let product_id = product_id.clone();
        move |_: web_sys::Event| {
            let Some(toggle) = store_begin_toggle(&store, query_key.clone(), &product_id, enabled)
            else {
                return;
            };
            let token = ctx.lifetime_token();
            let input = toggle.input();

            spawn_local(async move {
                let result = commands::update_product_enabled(&input).await;
                if let Err(e) = &result {
                    web_sys::console::error_1(&format!("[BOARD] Toggle {} failed: {}", input.id, e).into());
                }
                match store_settle_toggle(&store, toggle, &result, &token) {
                    ToggleResolution::Committed => {
                        store_push_toast(&store, ToastKind::Success, "Product status updated");
                    }
                    ToggleResolution::RolledBack => {
                        store_push_toast(&store, ToastKind::Error, "Could not update product status");
                    }
                    ToggleResolution::Discarded => {
                        web_sys::console::log_1(
                            &format!("[BOARD] Toggle {} finished after the board closed", input.id).into(),
                        );
                    }
                }
            });
        }
    };

    let on_open_detail = {
        let product_id = product_id.clone();
        move |_: web_sys::MouseEvent| {
            let product_id = product_id.clone();
            spawn_local(async move {
                if let Err(e) = commands::open_product_detail(&product_id).await {
                    web_sys::console::error_1(&format!("[BOARD] Open detail failed: {}", e).into());
                    store_push_toast(&store, ToastKind::Error, "Could not open product detail");
                }
            });
        }
    };

    let image = match product.featured_asset.as_ref() {
        Some(asset) => view! {
            <img class="product-image" src=asset.preview.clone() alt=product.name.clone() />
        }
        .into_any(),
        None => view! { <div class="product-image placeholder">"No image"</div> }.into_any(),
    };

    view! {
        <div class="product-card" class:disabled=!enabled>
            {image}
            <div class="product-card-body">
                <div class="product-card-header">
                    <h3 class="product-name" title=product.name.clone()>{product.name.clone()}</h3>
                    <span class=move || status.get().css_class()>
                        {move || status.get().label()}
                    </span>
                </div>
                <p class="product-created">"Created " {product.created_date().to_string()}</p>

                <div class="product-switch-row">
                    <span class=if enabled { "pill pill-enabled" } else { "pill pill-disabled" }>
                        {if enabled { "Enabled" } else { "Disabled" }}
                    </span>
                    <label class="switch">
                        <input
                            type="checkbox"
                            prop:checked=enabled
                            prop:disabled=is_pending
                            on:change=on_toggle
                        />
                        <span class="switch-slider"></span>
                    </label>
                </div>

                <div class="product-stock">
                    <div class="stock-row">
                        <span class="stock-available">{available} " available"</span>
                        <span class=move || tone().badge_class()>
                            {move || tone().label()}
                        </span>
                    </div>
                    <div class="stock-meter" title=format!("{} / {}", available, meter.cap)>
                        <div
                            class=move || tone().bar_class()
                            style=format!("width: {}%", meter.percent)
                        ></div>
                    </div>
                    <span class="stock-on-hand">"On hand: " {on_hand}</span>
                </div>

                <button class="open-detail-btn" on:click=on_open_detail>
                    "Open in product detail"
                </button>
            </div>
        </div>
    }
}
