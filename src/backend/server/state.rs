/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is built once at startup and cloned into every request. All of
 * its parts are immutable or internally synchronized:
 * - `Arc<Config>` for the loaded configuration
 * - `Database`, a cheap handle on the sqlx pool
 * - `Arc<TokenKeys>` for JWT signing and verification
 * - `TmdbClient`, which shares one reqwest connection pool
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers ask for only the part they use,
 * e.g. `State(db): State<Database>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::db::Database;
use crate::backend::server::config::Config;
use crate::backend::tmdb::TmdbClient;

/// Application state shared by all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Configuration loaded at startup
    pub config: Arc<Config>,

    /// Database connection pool
    pub db: Database,

    /// Token signing and verification keys
    pub tokens: Arc<TokenKeys>,

    /// Outbound TMDB client
    pub tmdb: TmdbClient,
}

impl AppState {
    /// Build the state from a loaded configuration and an open database
    pub fn new(config: Config, db: Database) -> Self {
        let tokens = Arc::new(TokenKeys::from_config(&config));
        let tmdb = TmdbClient::from_config(&config);

        Self {
            config: Arc::new(config),
            db,
            tokens,
            tmdb,
        }
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for Arc<TokenKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for TmdbClient {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tmdb.clone()
    }
}

impl FromRef<AppState> for Arc<Config> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
