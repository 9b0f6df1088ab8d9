//! GraphQL-backed ProductApi

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::traits::ProductApi;
use crate::domain::{
    DomainError, DomainResult, ProductEnabledUpdate, ProductList, ProductListOptions,
    UpdateProductEnabledInput,
};
use crate::graphql::documents::{PRODUCT_LIST_QUERY, UPDATE_PRODUCT_ENABLED_MUTATION};
use crate::graphql::GraphQlClient;

#[derive(Deserialize)]
struct ProductListData {
    products: ProductList,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateProductData {
    update_product: Option<ProductEnabledUpdate>,
}

pub struct GraphQlProductApi {
    client: GraphQlClient,
}

impl GraphQlProductApi {
    pub fn new(client: GraphQlClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductApi for GraphQlProductApi {
    async fn fetch_products(&self, options: &ProductListOptions) -> DomainResult<ProductList> {
        log::debug!("ProductList -> {}", self.client.endpoint());
        let data: ProductListData = self
            .client
            .execute(PRODUCT_LIST_QUERY, json!({ "options": options }))
            .await
            .map_err(|e| DomainError::RemoteFetch(e.to_string()))?;
        Ok(data.products)
    }

    async fn set_product_enabled(
        &self,
        input: &UpdateProductEnabledInput,
    ) -> DomainResult<ProductEnabledUpdate> {
        log::debug!("UpdateProductEnabled -> {}", self.client.endpoint());
        let data: UpdateProductData = self
            .client
            .execute(UPDATE_PRODUCT_ENABLED_MUTATION, json!({ "input": input }))
            .await
            .map_err(|e| DomainError::RemoteMutation(e.to_string()))?;
        data.update_product
            .ok_or_else(|| DomainError::RemoteMutation("No response from API".to_string()))
    }
}
