//! Authentication Module
//!
//! This module handles user registration, login and bearer tokens. It
//! provides HTTP handlers for the authentication endpoints and the password
//! and token primitives they are built on.
//!
//! # Architecture
//!
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - JWT issuance and verification (`TokenKeys`)
//! - **`error`** - `AuthError`, the error type of the two modules above
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── error.rs        - AuthError
//! ├── password.rs     - Password hashing
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - Token issuing handler
//!     └── me.rs       - Get current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email and password → user created → public user returned
//! 2. **Login**: form-encoded username and password → credentials verified → bearer token returned
//! 3. **Me**: bearer token → token verified by the auth middleware → user info returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are HS256 JWTs carrying the username as subject
//! - Tokens expire after the configured lifetime (one day by default)
//! - Unknown username and wrong password return the same 401

/// Credential and token errors
pub mod error;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use error::AuthError;
pub use handlers::{login, me, register};
pub use password::{hash_password, verify_password};
pub use sessions::{Claims, TokenKeys};
