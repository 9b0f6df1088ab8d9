//! Domain Layer
//!
//! Board entities, the list payload translation and error types.
//! No IO happens here.

mod error;
mod list_options;
mod product;

pub use error::{DomainError, DomainResult};
pub use list_options::{
    ListProductsPayload, Pagination, ProductFilter, ProductListOptions, StatusFilter,
};
pub use product::{
    Asset, Product, ProductEnabledUpdate, ProductList, ProductVariant, StockLevel,
    UpdateProductEnabledInput,
};
