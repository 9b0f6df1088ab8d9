//! Product Entity
//!
//! Read-only projection of a catalogue product as returned by the admin API.

use chrono::{DateTime, Utc};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};

/// Featured image reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub preview: String,
}

/// Stock record for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevel {
    pub id: String,
    #[serde(default)]
    pub stock_on_hand: i64,
    #[serde(default)]
    pub stock_allocated: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    #[serde(default)]
    pub stock_levels: Vec<StockLevel>,
}

/// A product row on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub featured_asset: Option<Asset>,
    pub name: String,
    pub slug: String,
    pub enabled: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Check the fields the board relies on beyond what deserialization enforces
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.is_empty() {
            return Err(DomainError::InvalidInput("product id is empty".to_string()));
        }
        if let Some(asset) = &self.featured_asset {
            Url::parse(&asset.preview).map_err(|e| {
                DomainError::InvalidInput(format!(
                    "product {} has invalid preview url '{}': {}",
                    self.id, asset.preview, e
                ))
            })?;
        }
        Ok(())
    }
}

/// One page of products plus the total match count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductList {
    pub items: Vec<Product>,
    pub total_items: u64,
}

impl ProductList {
    pub fn validate(&self) -> DomainResult<()> {
        self.items.iter().try_for_each(Product::validate)
    }
}

/// Input of the enabled-toggle mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProductEnabledInput {
    pub id: String,
    pub enabled: bool,
}

/// Server-confirmed result of the enabled-toggle mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEnabledUpdate {
    pub id: String,
    pub enabled: bool,
}
