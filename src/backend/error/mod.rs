//! API Error Module
//!
//! Error types returned by HTTP handlers and their conversion into responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! Handlers return `Result<_, ApiError>` and use `?` freely; the error is
//! converted to a status code and a `{"detail", "status"}` JSON body.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{ApiError, INVALID_CREDENTIALS};
