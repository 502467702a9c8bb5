//! Credential and token errors

use thiserror::Error;

/// Errors raised while hashing passwords or issuing and verifying tokens
#[derive(Debug, Error)]
pub enum AuthError {
    /// bcrypt failed to produce a hash
    #[error("Password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// The token could not be signed
    #[error("Token encoding failed: {0}")]
    Encoding(jsonwebtoken::errors::Error),

    /// Now plus the token lifetime does not fit in a timestamp
    #[error("Token expiry out of range")]
    ExpiryOutOfRange,

    /// The token's `exp` claim is in the past
    #[error("Token expired")]
    Expired,

    /// Bad signature, wrong algorithm or malformed token
    #[error("Invalid token: {0}")]
    InvalidToken(jsonwebtoken::errors::Error),

    /// The token verified but carries no subject
    #[error("Token has no subject")]
    MissingSubject,
}
