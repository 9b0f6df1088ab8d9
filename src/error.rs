//! Frontend Errors
//!
//! Failures of backend calls as seen by the board.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// List query failed or returned nothing
    RemoteFetch(String),
    /// Enabled-toggle mutation failed
    RemoteMutation(String),
    /// Any other backend command failure
    Ipc(String),
    /// Arguments or response could not cross the IPC boundary
    Decode(String),
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::RemoteFetch(msg) => write!(f, "Failed to load products: {}", msg),
            BoardError::RemoteMutation(msg) => write!(f, "Could not update product status: {}", msg),
            BoardError::Ipc(msg) => write!(f, "{}", msg),
            BoardError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for BoardError {}
