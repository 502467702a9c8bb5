//! Middleware Module
//!
//! HTTP middleware for the backend server. Middleware runs before handlers
//! and can reject a request early.
//!
//! - **`auth`** - bearer-token authentication for protected routes
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware;
//! use cinescope::backend::middleware::auth_middleware;
//!
//! let protected = Router::new()
//!     .route("/users/me", get(me))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, CurrentUser};
