//! Favorites Module
//!
//! Per-user favorite movies and shows. Every route here sits behind the
//! auth middleware and only ever touches rows owned by the current user.
//!
//! - **`types`** - request body for adding a favorite
//! - **`handlers`** - add, list and remove handlers
//!
//! # Endpoints
//!
//! - `POST /api/favorites` - add a favorite (idempotent per `tmdb_id`)
//! - `GET /api/favorites` - list the user's favorites in insertion order
//! - `DELETE /api/favorites/{tmdb_id}` - remove a favorite

pub mod handlers;
pub mod types;

pub use handlers::{add_favorite, list_favorites, remove_favorite};
pub use types::FavoriteRequest;
