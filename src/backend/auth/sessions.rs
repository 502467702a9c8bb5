/**
 * Session Tokens
 *
 * HS256 JWT issuance and verification. Tokens carry the username as `sub`
 * plus `iat`/`exp`; there is no refresh or revocation, a token stays valid
 * until it expires.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::backend::auth::AuthError;
use crate::backend::server::config::Config;

/// Token lifetime used when the caller does not specify one
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60 * 24;

/// Longest token lifetime the server accepts (one year)
pub const MAX_TOKEN_TTL_MINUTES: i64 = 60 * 24 * 365;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the token holder
    #[serde(default)]
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    #[serde(default)]
    pub iat: i64,
}

/// Signing and verification keys derived from the server secret
///
/// Built once at startup and shared through `AppState`.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    default_ttl: Duration,
}

impl std::fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenKeys")
            .field("default_ttl", &self.default_ttl)
            .finish_non_exhaustive()
    }
}

impl TokenKeys {
    /// Create keys from a shared secret
    pub fn new(secret: &str, default_ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            default_ttl,
        }
    }

    /// Create keys from the server configuration
    pub fn from_config(config: &Config) -> Self {
        let ttl = Duration::try_minutes(config.token_ttl_minutes).unwrap_or_else(|| {
            tracing::warn!(
                "Token lifetime of {} minutes is out of range, using the default",
                config.token_ttl_minutes
            );
            Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES)
        });
        Self::new(&config.secret_key, ttl)
    }

    /// Issue a signed token for `subject`
    ///
    /// `ttl = None` uses the configured default lifetime.
    pub fn issue(&self, subject: &str, ttl: Option<Duration>) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now
            .checked_add_signed(ttl.unwrap_or(self.default_ttl))
            .ok_or(AuthError::ExpiryOutOfRange)?;

        let claims = Claims {
            sub: subject.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(AuthError::Encoding)
    }

    /// Verify a token and return its claims
    ///
    /// # Errors
    ///
    /// * `AuthError::Expired` - `exp` is in the past
    /// * `AuthError::InvalidToken` - bad signature or malformed token
    /// * `AuthError::MissingSubject` - no `sub` claim
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::InvalidToken(e),
            }
        })?;

        if data.claims.sub.is_empty() {
            return Err(AuthError::MissingSubject);
        }

        Ok(data.claims)
    }
}
