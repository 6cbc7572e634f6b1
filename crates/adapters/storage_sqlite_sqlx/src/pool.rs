//! `SQLite` connection pool setup and migration runner.

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::StorageError;

/// Configuration for the `SQLite` storage adapter.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:roomdesk.db` or `sqlite::memory:`).
    pub database_url: String,
}

impl Config {
    fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }

    /// Build a [`Database`] from this configuration.
    ///
    /// Creates the connection pool, creates the database file if missing,
    /// and runs all pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or migrations fail.
    pub async fn build(self) -> Result<Database, StorageError> {
        let options = SqliteConnectOptions::from_str(&self.database_url)?.create_if_missing(true);

        // Every connection to an in-memory database sees its own empty
        // database, so the pool must hold exactly one and never recycle it.
        let pool_options = if self.is_in_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new()
        };

        let pool = pool_options.connect_with(options).await?;
        Database::initialize(pool).await
    }
}

/// Holds the `SQLite` connection pool and provides access to it.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Run migrations against a freshly opened pool.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if migrations fail.
    async fn initialize(pool: SqlitePool) -> Result<Self, StorageError> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!("room store migrations applied");

        Ok(Self { pool })
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
