//! Storage-specific error type wrapping sqlx errors.

use roomdesk_domain::error::RoomDeskError;
use roomdesk_domain::id::RoomId;

/// Errors originating from the `SQLite` storage layer.
///
/// Messages carry the underlying cause because they are echoed to API
/// clients verbatim.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored document could not be encoded or decoded.
    #[error("invalid room document: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to run migrations.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// An update targeted a room that does not exist.
    #[error("no room to update: {0}")]
    RoomNotFound(RoomId),
}

impl From<StorageError> for RoomDeskError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
