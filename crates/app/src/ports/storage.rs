//! Storage port: repository trait for room persistence.

use std::future::Future;

use roomdesk_domain::error::RoomDeskError;
use roomdesk_domain::id::RoomId;
use roomdesk_domain::room::{Room, RoomPatch};

/// Repository for persisting and querying [`Room`]s.
///
/// Any failure of the backing store is reported as
/// [`RoomDeskError::Storage`].
pub trait RoomRepository {
    /// Get all rooms.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, RoomDeskError>> + Send;

    /// Persist a new room and return it as stored.
    fn create(&self, room: Room) -> impl Future<Output = Result<Room, RoomDeskError>> + Send;

    /// Merge `patch` into the room identified by `id` and return the result.
    ///
    /// Fails when no room with `id` exists.
    fn update(
        &self,
        id: RoomId,
        patch: RoomPatch,
    ) -> impl Future<Output = Result<Room, RoomDeskError>> + Send;

    /// Delete a room. Deleting an unknown id is not an error.
    fn delete(&self, id: RoomId) -> impl Future<Output = Result<(), RoomDeskError>> + Send;
}
