//! Repository Layer
//!
//! Remote catalogue access behind the `ProductApi` seam.

mod graphql_api;
mod product_repo;
mod traits;


pub use graphql_api::GraphQlProductApi;
pub use product_repo::ProductRepository;
pub use traits::ProductApi;
