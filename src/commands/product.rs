//! Product Commands
//!
//! Frontend bindings for the board's backend commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{invoke, rejection_message};
use crate::error::BoardError;
use crate::models::{
    BoardSettings, ListProductsPayload, ProductEnabledUpdate, ProductList,
    UpdateProductEnabledInput,
};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct ListProductsArgs<'a> {
    payload: &'a ListProductsPayload,
}

#[derive(Serialize)]
struct UpdateProductEnabledArgs<'a> {
    input: &'a UpdateProductEnabledInput,
}

#[derive(Serialize)]
struct ProductIdArgs<'a> {
    #[serde(rename = "productId")]
    product_id: &'a str,
}

fn to_args<T: Serialize>(args: &T) -> Result<JsValue, BoardError> {
    serde_wasm_bindgen::to_value(args).map_err(|e| BoardError::Decode(e.to_string()))
}

// ========================
// Commands
// ========================

pub async fn list_products(payload: &ListProductsPayload) -> Result<ProductList, BoardError> {
    let js_args = to_args(&ListProductsArgs { payload })?;
    let result = invoke("list_products", js_args)
        .await
        .map_err(|e| BoardError::RemoteFetch(rejection_message(e)))?;
    serde_wasm_bindgen::from_value(result).map_err(|e| BoardError::Decode(e.to_string()))
}

pub async fn update_product_enabled(
    input: &UpdateProductEnabledInput,
) -> Result<ProductEnabledUpdate, BoardError> {
    let js_args = to_args(&UpdateProductEnabledArgs { input })?;
    let result = invoke("update_product_enabled", js_args)
        .await
        .map_err(|e| BoardError::RemoteMutation(rejection_message(e)))?;
    serde_wasm_bindgen::from_value(result).map_err(|e| BoardError::Decode(e.to_string()))
}

pub async fn get_board_settings() -> Result<BoardSettings, BoardError> {
    let result = invoke("get_board_settings", JsValue::NULL)
        .await
        .map_err(|e| BoardError::Ipc(rejection_message(e)))?;
    serde_wasm_bindgen::from_value(result).map_err(|e| BoardError::Decode(e.to_string()))
}

pub async fn open_product_detail(product_id: &str) -> Result<(), BoardError> {
    let js_args = to_args(&ProductIdArgs { product_id })?;
    invoke("open_product_detail", js_args)
        .await
        .map_err(|e| BoardError::Ipc(rejection_message(e)))?;
    Ok(())
}
