//! `SQLite` implementation of [`RoomRepository`].
//!
//! Each row holds the room id, its JSON document and two RFC 3339
//! timestamps. Updates read the document, merge the patch in Rust and
//! write it back inside one transaction.

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use roomdesk_app::ports::RoomRepository;
use roomdesk_domain::error::RoomDeskError;
use roomdesk_domain::id::RoomId;
use roomdesk_domain::room::{Document, Room, RoomPatch};
use roomdesk_domain::time::{now, parse_rfc3339, to_rfc3339};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Room`].
struct Wrapper(Room);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let document: String = row.try_get("document")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        let id = RoomId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let document: Document =
            serde_json::from_str(&document).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let created_at =
            parse_rfc3339(&created_at).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let updated_at =
            parse_rfc3339(&updated_at).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Room {
            id,
            document,
            created_at,
            updated_at,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO rooms (id, document, created_at, updated_at) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM rooms WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM rooms ORDER BY created_at, id";
const UPDATE: &str = "UPDATE rooms SET document = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM rooms WHERE id = ?";

/// `SQLite`-backed room repository.
pub struct SqliteRoomRepository {
    pool: SqlitePool,
}

impl SqliteRoomRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RoomRepository for SqliteRoomRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, RoomDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn create(&self, room: Room) -> impl Future<Output = Result<Room, RoomDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let document = serde_json::to_string(&room.document).map_err(StorageError::from)?;

            sqlx::query(INSERT)
                .bind(room.id.as_str())
                .bind(document)
                .bind(to_rfc3339(&room.created_at))
                .bind(to_rfc3339(&room.updated_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(room)
        }
    }

    fn update(
        &self,
        id: RoomId,
        patch: RoomPatch,
    ) -> impl Future<Output = Result<Room, RoomDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_str())
                .fetch_optional(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            let Wrapper(mut room) =
                row.ok_or_else(|| RoomDeskError::from(StorageError::RoomNotFound(id.clone())))?;

            room.apply(patch, now());
            let document = serde_json::to_string(&room.document).map_err(StorageError::from)?;

            sqlx::query(UPDATE)
                .bind(document)
                .bind(to_rfc3339(&room.updated_at))
                .bind(room.id.as_str())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            tx.commit().await.map_err(StorageError::from)?;

            Ok(room)
        }
    }

    fn delete(&self, id: RoomId) -> impl Future<Output = Result<(), RoomDeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_str())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                tracing::debug!(room_id = %id, "delete matched no room");
            }

            Ok(())
        }
    }
}
