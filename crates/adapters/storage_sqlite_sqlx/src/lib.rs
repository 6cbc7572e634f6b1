//! # roomdesk-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `RoomRepository` port defined in `roomdesk-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Keep each room as a JSON document next to its id and timestamps
//!
//! ## Dependency rule
//! Depends on `roomdesk-app` (for port traits) and `roomdesk-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod pool;
pub mod room_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use room_repo::SqliteRoomRepository;
