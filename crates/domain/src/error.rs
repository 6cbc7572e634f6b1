//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RoomDeskError`] via `#[from]` / `From` impls.

/// Client input that cannot be accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required room field is absent or falsy.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The `id` query parameter is absent or empty.
    #[error("missing room id")]
    MissingId,
}

/// Returned for operations that are routed but intentionally not served.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{operation} is not implemented")]
pub struct NotImplementedError {
    pub operation: &'static str,
}

/// Workspace-wide error.
#[derive(Debug, thiserror::Error)]
pub enum RoomDeskError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotImplemented(#[from] NotImplementedError),

    /// A request payload that could not be decoded at all.
    #[error("{0}")]
    Malformed(Box<dyn std::error::Error + Send + Sync>),

    /// Any failure reported by the storage backend.
    #[error("{0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}
