//! TMDB Gateway Module
//!
//! Forwards read-only requests to The Movie Database, adding the server's
//! API key so the key never has to ship to the browser.
//!
//! - **`client`** - `TmdbClient`, the outbound HTTP client
//! - **`handlers`** - `GET /api/tmdb/{*path}`
//!
//! The gateway does not allow-list paths, retry, cache or time out. The
//! upstream body is passed through as-is with a 200, including TMDB's own
//! error payloads.

pub mod client;
pub mod handlers;

pub use client::TmdbClient;
pub use handlers::proxy_tmdb;
