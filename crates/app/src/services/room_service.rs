//! Room service: use-cases for managing rooms.

use roomdesk_domain::error::{NotImplementedError, RoomDeskError};
use roomdesk_domain::id::RoomId;
use roomdesk_domain::room::{Document, Room, RoomPatch};

use crate::ports::RoomRepository;

/// Application service for room CRUD operations.
pub struct RoomService<R> {
    repo: R,
}

impl<R: RoomRepository> RoomService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all rooms.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_rooms(&self) -> Result<Vec<Room>, RoomDeskError> {
        self.repo.get_all().await
    }

    /// Look up a single room.
    ///
    /// Lookup by identifier is not supported, so this yields the
    /// [`RoomDeskError::NotImplemented`] to report instead of a room.
    #[tracing::instrument(skip(self))]
    pub async fn find_room(&self, id: &str) -> RoomDeskError {
        tracing::debug!("room lookup requested");
        NotImplementedError {
            operation: "room lookup by id",
        }
        .into()
    }

    /// Create a new room from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`RoomDeskError::Validation`] if a required field is missing,
    /// or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, document))]
    pub async fn create_room(&self, document: Document) -> Result<Room, RoomDeskError> {
        let room = Room::builder().document(document).build()?;
        let created = self.repo.create(room).await?;
        tracing::info!(room_id = %created.id, "room created");
        Ok(created)
    }

    /// Merge the fields of `document` into an existing room.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository, including
    /// when the room does not exist.
    #[tracing::instrument(skip(self, document))]
    pub async fn update_room(&self, id: RoomId, document: Document) -> Result<Room, RoomDeskError> {
        let patch = RoomPatch::from_document(document);
        let updated = self.repo.update(id, patch).await?;
        tracing::info!(room_id = %updated.id, "room updated");
        Ok(updated)
    }

    /// Delete a room by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_room(&self, id: RoomId) -> Result<(), RoomDeskError> {
        self.repo.delete(id).await
    }
}
