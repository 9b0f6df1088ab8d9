//! List Payload and Query Options
//!
//! The board sends a filter/pagination payload; the admin API expects
//! `ProductListOptions`. This module translates one into the other.

use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};

/// Coarse enabled filter offered by the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub search: Option<String>,
    pub status: Option<StatusFilter>,
}

/// 1-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsPayload {
    #[serde(default)]
    pub filter: ProductFilter,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringOperators {
    pub contains: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BooleanOperators {
    pub eq: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ProductFilterParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<StringOperators>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<BooleanOperators>,
}

impl ProductFilterParameter {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.enabled.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortOrder {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSortParameter {
    pub created_at: SortOrder,
}

/// `ProductListOptions` input of the admin API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductListOptions {
    pub skip: u64,
    pub take: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ProductFilterParameter>,
    pub sort: ProductSortParameter,
}

impl ProductListOptions {
    /// Translate a board payload, newest products first
    pub fn from_payload(payload: &ListProductsPayload) -> DomainResult<Self> {
        let Pagination { page, per_page } = payload.pagination;
        if page < 1 {
            return Err(DomainError::InvalidInput(format!("page must be >= 1, got {}", page)));
        }
        if per_page < 1 {
            return Err(DomainError::InvalidInput(format!(
                "perPage must be >= 1, got {}",
                per_page
            )));
        }

        let mut filter = ProductFilterParameter::default();

        if let Some(search) = payload.filter.search.as_deref().filter(|s| !s.is_empty()) {
            filter.name = Some(StringOperators { contains: search.to_string() });
        }

        match payload.filter.status {
            Some(StatusFilter::Enabled) => filter.enabled = Some(BooleanOperators { eq: true }),
            Some(StatusFilter::Disabled) => filter.enabled = Some(BooleanOperators { eq: false }),
            Some(StatusFilter::All) | None => {}
        }

        Ok(Self {
            skip: u64::from(page - 1) * u64::from(per_page),
            take: per_page,
            filter: if filter.is_empty() { None } else { Some(filter) },
            sort: ProductSortParameter { created_at: SortOrder::Desc },
        })
    }
}
