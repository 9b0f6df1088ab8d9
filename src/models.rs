//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub preview: String,
}

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

/// Product data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    /// RFC 3339 timestamp
    pub created_at: String,
    pub updated_at: String,
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
    /// Stock levels used for board display. Only the first variant counts.
    pub fn board_stock_levels(&self) -> Option<&[StockLevel]> {
        self.variants.first().map(|v| v.stock_levels.as_slice())
    }

    /// Date part of `created_at` (YYYY-MM-DD)
    pub fn created_date(&self) -> &str {
        self.created_at.get(..10).unwrap_or(&self.created_at)
    }
}

/// One page of products plus the total match count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductList {
    pub items: Vec<Product>,
    pub total_items: u64,
}

/// Enabled filter offered by the board (coarser than ProductStatus)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Enabled,
    Disabled,
}

impl StatusFilter {
    pub const ALL_OPTIONS: [StatusFilter; 3] =
        [StatusFilter::All, StatusFilter::Enabled, StatusFilter::Disabled];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Enabled => "Enabled",
            StatusFilter::Disabled => "Disabled",
        }
    }

    /// Parse a query-string value; unknown values yield None
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Some(StatusFilter::All),
            "enabled" => Some(StatusFilter::Enabled),
            "disabled" => Some(StatusFilter::Disabled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub status: Option<StatusFilter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

/// Filter/pagination payload sent with every list query
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListProductsPayload {
    pub filter: ProductFilter,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProductEnabledInput {
    pub id: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEnabledUpdate {
    pub id: String,
    pub enabled: bool,
}

/// Backend-provided board settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSettings {
    pub low_stock_threshold: u64,
    pub default_per_page: u32,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            low_stock_threshold: crate::stock::DEFAULT_LOW_STOCK_THRESHOLD,
            default_per_page: crate::query_params::DEFAULT_PER_PAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_from_backend_json() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": "7",
                "createdAt": "2025-03-01T10:00:00Z",
                "updatedAt": "2025-03-01T10:00:00Z",
                "featuredAsset": null,
                "name": "Mug",
                "slug": "mug",
                "enabled": false,
                "description": "",
                "variants": [
                    { "id": "v1", "stockLevels": [{ "id": "s1", "stockOnHand": 4 }] },
                    { "id": "v2", "stockLevels": [] }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(product.created_date(), "2025-03-01");
        let levels = product.board_stock_levels().unwrap();
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].stock_allocated, 0);
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!(StatusFilter::parse("Enabled"), Some(StatusFilter::Enabled));
        assert_eq!(StatusFilter::parse("disabled"), Some(StatusFilter::Disabled));
        assert_eq!(StatusFilter::parse("ALL"), Some(StatusFilter::All));
        assert_eq!(StatusFilter::parse("archived"), None);
    }
}
