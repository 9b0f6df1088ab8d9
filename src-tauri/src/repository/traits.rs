//! Repository Layer - Core Traits
//!
//! Abstract access to the remote catalogue. The GraphQL implementation talks
//! to the admin API; tests plug in an in-memory catalogue.

use async_trait::async_trait;

use crate::domain::{
    DomainResult, ProductEnabledUpdate, ProductList, ProductListOptions, UpdateProductEnabledInput,
};

/// Remote list and update operations
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// Fetch one page of products matching `options`
    async fn fetch_products(&self, options: &ProductListOptions) -> DomainResult<ProductList>;

    /// Set a product's enabled flag
    async fn set_product_enabled(
        &self,
        input: &UpdateProductEnabledInput,
    ) -> DomainResult<ProductEnabledUpdate>;
}
