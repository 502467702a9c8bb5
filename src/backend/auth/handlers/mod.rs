//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! ├── login.rs    - Token issuing handler
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /register - User registration (JSON body)
//! - **`login`** - POST /token - User authentication (form body)
//! - **`me`** - GET /users/me - Current user info (bearer token)

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

pub use types::{LoginForm, RegisterRequest, TokenResponse, UserResponse};

pub use login::login;
pub use me::me;
pub use register::register;
