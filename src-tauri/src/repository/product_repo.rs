//! Product Repository
//!
//! Board-facing operations on top of a `ProductApi`: payload translation,
//! response validation and failure logging.

use std::sync::Arc;

use super::traits::ProductApi;
use crate::domain::{
    DomainError, DomainResult, ListProductsPayload, ProductEnabledUpdate, ProductList,
    ProductListOptions, UpdateProductEnabledInput,
};

#[derive(Clone)]
pub struct ProductRepository {
    api: Arc<dyn ProductApi>,
}

impl ProductRepository {
    pub fn new(api: Arc<dyn ProductApi>) -> Self {
        Self { api }
    }

    /// Fetch the page described by `payload`
    pub async fn list_products(&self, payload: &ListProductsPayload) -> DomainResult<ProductList> {
        let options = ProductListOptions::from_payload(payload)?;
        log::debug!("Fetching products with options {:?}", options);

        let result = match self.api.fetch_products(&options).await {
            Ok(list) => list
                .validate()
                .map(|_| list)
                .map_err(|e| DomainError::RemoteFetch(e.to_string())),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            log::error!("Error fetching products: {}", e);
        }
        result
    }

    /// Set `enabled` on one product, returning the server-confirmed value
    pub async fn update_product_enabled(
        &self,
        input: &UpdateProductEnabledInput,
    ) -> DomainResult<ProductEnabledUpdate> {
        if input.id.is_empty() {
            return Err(DomainError::InvalidInput("product id is empty".to_string()));
        }

        let result = match self.api.set_product_enabled(input).await {
            Ok(update) if update.id != input.id => Err(DomainError::RemoteMutation(format!(
                "API updated product {} instead of {}",
                update.id, input.id
            ))),
            other => other,
        };

        match &result {
            Ok(update) => log::info!("Product {} enabled={}", update.id, update.enabled),
            Err(e) => log::error!("Error updating product enabled status: {}", e),
        }
        result
    }
}
