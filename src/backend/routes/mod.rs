//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! - **`router`** - main router creation, global layers and the root route
//! - **`api_routes`** - public and bearer-protected API endpoints
//!
//! # Routes
//!
//! ## Public
//!
//! - `GET /` - liveness message
//! - `POST /register` - user registration
//! - `POST /token` - login, returns a bearer token
//! - `GET /api/tmdb/{*path}` - TMDB proxy
//!
//! ## Bearer-protected
//!
//! - `GET /users/me` - current user
//! - `POST /api/favorites` - add favorite
//! - `GET /api/favorites` - list favorites
//! - `DELETE /api/favorites/{tmdb_id}` - remove favorite

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
