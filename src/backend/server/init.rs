/**
 * Server Initialization
 *
 * This module handles the setup of the Axum application: opening the
 * database, applying migrations, building the shared state and configuring
 * routes.
 *
 * # Initialization Process
 *
 * 1. Connect to the database named by `DATABASE_URL`
 * 2. Apply embedded migrations
 * 3. Build `AppState` (token keys, TMDB client)
 * 4. Create and configure the router
 *
 * Unlike request errors, a failure here aborts startup.
 */

use axum::Router;
use thiserror::Error;

use crate::backend::db::Database;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{Config, ConfigError};
use crate::backend::server::state::AppState;

/// Errors that prevent the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Create and configure the Axum application
pub async fn create_app(config: Config) -> Result<Router<()>, StartupError> {
    let state = create_state(config).await?;
    Ok(create_router(state))
}

/// Open and migrate the database, then build the shared state
pub async fn create_state(config: Config) -> Result<AppState, StartupError> {
    tracing::info!("Initializing CineScope backend");
    tracing::debug!("Using configuration: {:?}", config);

    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;
    tracing::info!("Database ready");

    Ok(AppState::new(config, db))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_config() -> Config {
        Config::builder()
            .database_url("sqlite::memory:")
            .bcrypt_cost(4)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_state_migrates_database() {
        let state = create_state(memory_config()).await.unwrap();
        assert!(state.db.get_user_by_username("alice").await.unwrap().is_none());
        assert_eq!(state.config.bcrypt_cost, 4);
    }

    #[tokio::test]
    async fn test_unopenable_database_fails() {
        let config = Config::builder()
            .database_url("sqlite:///nonexistent-cinescope-dir/nested/cinescope.db")
            .build()
            .unwrap();
        assert!(matches!(
            create_app(config).await,
            Err(StartupError::Database(_))
        ));
    }
}
