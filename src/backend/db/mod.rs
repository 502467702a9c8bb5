//! # Database Module
//!
//! SQLite persistence for users, favorites and login history.
//!
//! ## Key Components
//!
//! - `Database`: connection pool wrapper and schema migration
//! - `users.rs`: user records and lookups
//! - `favorites.rs`: per-user favorite movies
//! - `login_logs.rs`: login history written on successful login
//!
//! Records are plain structs carrying their owner's `user_id`; all queries
//! are methods on `Database`. Each query checks a connection out of the pool
//! for its own duration, so no connection outlives a request.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cinescope::backend::db::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("sqlite://cinescope.db?mode=rwc").await?;
//! db.migrate().await?;
//! let user = db.get_user_by_username("alice").await?;
//! # Ok(())
//! # }
//! ```

pub mod favorites;
pub mod login_logs;
pub mod users;

pub use favorites::{FavoriteMovie, NewFavorite};
pub use users::User;

use std::str::FromStr;

use sqlx::migrate::MigrateError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Result type for database operations
pub type Result<T> = sqlx::Result<T>;

/// Connections kept by a file-backed pool
const MAX_CONNECTIONS: u32 = 10;

/// Database connection manager
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open a pool for `database_url`, creating the file if needed
    ///
    /// An in-memory URL (`sqlite::memory:`) gets a single long-lived
    /// connection, since every SQLite memory connection is its own database.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
        };

        let pool = pool_options.connect_with(options).await?;
        Ok(Self { pool })
    }

    /// Apply the embedded migrations in `migrations/`
    pub async fn migrate(&self) -> std::result::Result<(), MigrateError> {
        sqlx::migrate!().run(&self.pool).await
    }

    /// Get connection pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Test helper: a migrated in-memory database
#[cfg(test)]
pub(crate) async fn test_database() -> Database {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    db.migrate().await.unwrap();
    db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_detection() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file.db?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://cinescope.db?mode=rwc"));
    }

    #[tokio::test]
    async fn test_migrations_create_tables() {
        let db = test_database().await;

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE '\\_%' ESCAPE '\\' AND name != 'sqlite_sequence' ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|(name,)| name.as_str()).collect();
        assert_eq!(names, vec!["favorites", "login_logs", "ratings", "users"]);
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let db = test_database().await;
        assert!(db.migrate().await.is_ok());
    }
}
