/**
 * API Error Types
 *
 * This module defines the error taxonomy surfaced to HTTP callers.
 * Every variant maps to exactly one status code and carries the message
 * returned in the `detail` field of the response body.
 *
 * # Error Categories
 *
 * - `Validation` - Malformed request body, path or form (422)
 * - `Conflict` - Duplicate unique field such as a username (400)
 * - `Unauthorized` - Bad credentials or an invalid, expired or missing token (401)
 * - `NotFound` - Referenced resource absent or not owned by the caller (404)
 * - `Upstream` - The TMDB gateway call failed (500)
 * - `Database` / `Internal` - Server-side failures (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::AuthError;

/// Message returned for every token or bearer-header failure
pub const INVALID_CREDENTIALS: &str = "Could not validate credentials";

/// Errors returned by HTTP handlers
///
/// # Usage
///
/// ```rust
/// use cinescope::backend::error::ApiError;
///
/// let err = ApiError::not_found("Movie not found in favorites");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body, form or path could not be parsed or failed validation
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// A unique field is already taken
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Authentication failed
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// The resource does not exist for this caller
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// The external metadata API could not be reached or returned garbage
    #[error("Upstream error: {message}")]
    Upstream {
        /// Raw error text from the HTTP client
        message: String,
    },

    /// Query or connection failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Anything else that is the server's fault
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable error message
        message: String,
    },
}

impl ApiError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a new unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Unauthorized error with the generic bearer-token message
    pub fn invalid_credentials() -> Self {
        Self::unauthorized(INVALID_CREDENTIALS)
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 422 Unprocessable Entity
    /// - `Conflict` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Upstream`, `Database`, `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Upstream { .. } | Self::Database(_) | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message sent to the client
    ///
    /// Database errors are reduced to a generic message so that SQL details
    /// never reach the caller.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::Conflict { message }
            | Self::Unauthorized { message }
            | Self::NotFound { message }
            | Self::Upstream { message }
            | Self::Internal { message } => message.clone(),
            Self::Database(_) => "Internal server error".to_string(),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Hashing(_) | AuthError::Encoding(_) | AuthError::ExpiryOutOfRange => {
                Self::internal(err.to_string())
            }
            AuthError::Expired | AuthError::InvalidToken(_) | AuthError::MissingSubject => {
                Self::invalid_credentials()
            }
        }
    }
}
