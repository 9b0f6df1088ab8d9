//! Tauri Commands for the Product Status Board
//!
//! Exposes the remote list/update operations to the frontend via Tauri IPC.

use tauri::State;

use crate::domain::{
    ListProductsPayload, ProductEnabledUpdate, ProductList, UpdateProductEnabledInput,
};
use crate::AppState;

/// Fetch one page of products for the board
#[tauri::command]
pub async fn list_products(
    state: State<'_, AppState>,
    payload: ListProductsPayload,
) -> Result<ProductList, String> {
    state.products.list_products(&payload).await.map_err(|e| e.to_string())
}

/// Set a product's enabled flag
#[tauri::command]
pub async fn update_product_enabled(
    state: State<'_, AppState>,
    input: UpdateProductEnabledInput,
) -> Result<ProductEnabledUpdate, String> {
    state.products.update_product_enabled(&input).await.map_err(|e| e.to_string())
}

/// Open a product in the web admin
#[tauri::command]
pub async fn open_product_detail(
    state: State<'_, AppState>,
    product_id: String,
) -> Result<(), String> {
    let url = state.config.product_detail_url(&product_id).map_err(|e| e.to_string())?;
    open::that(url.as_str()).map_err(|e| {
        log::error!("Failed to open {}: {}", url, e);
        format!("Failed to open product detail: {}", e)
    })
}
