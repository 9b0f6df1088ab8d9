//! GraphQL Layer
//!
//! Documents and the HTTP client used to talk to the admin API.

mod client;
pub mod documents;

pub use client::{parse_response, ClientError, GraphQlClient};
