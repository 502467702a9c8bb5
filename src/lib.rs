//! CineScope - Main Library
//!
//! CineScope is the backend for a movie-discovery web application. It lets
//! users register and log in with bearer tokens, keep a personal list of
//! favorite movies and shows, and query The Movie Database (TMDB) through a
//! proxy that keeps the API key on the server.
//!
//! # Module Structure
//!
//! - **`backend`** - everything server-side
//!   - Axum HTTP server, routes and middleware
//!   - bcrypt password hashing and HS256 JWT tokens
//!   - SQLite persistence through sqlx
//!   - TMDB proxy through reqwest
//!
//! # Usage
//!
//! ```rust,no_run
//! use cinescope::backend::server::{config::Config, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `ApiError` for request failures, rendered as `{"detail", "status"}` JSON
//! - `AuthError` for hashing and token failures
//! - `ConfigError` and `StartupError` for failures that stop the server

/// Backend server-side code
pub mod backend;
