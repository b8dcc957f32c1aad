//! The shared SQLite handle.
//!
//! [`Database`] wraps a `SqlitePool`. It is opened once at startup and
//! cloned into whatever needs it; connections are acquired and released
//! per query by the pool.

use std::str::FromStr;

use rolodex_core::config::DatabaseConfig;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::Result;

/// Schema for the `contact` table. Safe to run repeatedly.
pub const CONTACT_SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS contact (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    uname VARCHAR(100) NOT NULL UNIQUE,
    fname VARCHAR(100) NOT NULL,
    lname VARCHAR(100) NOT NULL,
    email VARCHAR(100) NOT NULL,
    phone VARCHAR(50) NOT NULL,
    notes TEXT NOT NULL,
    timestamp DATETIME NOT NULL
)";

/// Pooled SQLite connection handle.
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if missing) the database file named in `config`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        tracing::info!("Opening SQLite database at {}", config.path.display());
        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Open a private in-memory database.
    ///
    /// Each SQLite memory connection is its own database, so the pool is
    /// pinned to a single connection that is never recycled.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Create the `contact` table if it does not exist.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(CONTACT_SCHEMA).execute(&self.pool).await?;
        tracing::debug!("Schema ready");
        Ok(())
    }

    /// The underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
