//! Domain Layer - Errors
//!
//! Error kinds surfaced by the board backend. Commands flatten these into
//! strings for the frontend.

use serde::{Deserialize, Serialize};

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    /// List query failed or returned nothing
    RemoteFetch(String),
    /// Enabled-toggle mutation failed
    RemoteMutation(String),
    InvalidInput(String),
    Config(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::RemoteFetch(msg) => write!(f, "Failed to fetch products: {}", msg),
            DomainError::RemoteMutation(msg) => {
                write!(f, "Failed to update product status: {}", msg)
            }
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
