//! Backend Module
//!
//! This module contains all server-side code for CineScope: the Axum HTTP
//! server, authentication, favorites storage and the TMDB gateway.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - password hashing, JWT tokens, register/login/me handlers
//! - **`favorites`** - per-user favorite handlers
//! - **`tmdb`** - TMDB proxy client and handler
//! - **`db`** - SQLite persistence (users, favorites, login logs)
//! - **`middleware`** - bearer-token authentication
//! - **`extract`** - request extractors with uniform validation errors
//! - **`error`** - `ApiError` and its HTTP response mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary entry point
//! ├── server/         - Config, state and initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── favorites/      - Favorites handlers
//! ├── tmdb/           - TMDB gateway
//! ├── db/             - Database access
//! ├── middleware/     - Request middleware
//! ├── extract.rs      - Request extractors
//! ├── types.rs        - Shared response types
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the configuration, the database handle, the token keys
//! and the TMDB client. None of it is mutated after startup, so it is shared
//! across handlers by cloning with no locking.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>`. Every error becomes a JSON body of
//! the form `{"detail": "...", "status": <code>}`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Favorite movies
pub mod favorites;

/// TMDB gateway
pub mod tmdb;

/// Database persistence
pub mod db;

/// Middleware for request processing
pub mod middleware;

/// Request extractors
pub mod extract;

/// Shared response types
pub mod types;

/// Backend error types
pub mod error;

pub use error::ApiError;
pub use server::{create_app, AppState, Config};
