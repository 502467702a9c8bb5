/**
 * Authentication Middleware
 *
 * This module protects routes that require a logged-in user. It extracts and
 * verifies the bearer token from the Authorization header, loads the user
 * named by the token subject and makes it available to handlers through the
 * `CurrentUser` extractor.
 *
 * Every failure (missing header, wrong scheme, bad or expired token, deleted
 * user) is reported as the same 401 so callers learn nothing about why.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::db::User;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Authenticated user attached to the request by `auth_middleware`
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies the token
/// 3. Loads the user named by the `sub` claim
/// 4. Attaches the user to request extensions for use in handlers
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        ApiError::invalid_credentials()
    })?;

    let claims = app_state.tokens.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        ApiError::from(e)
    })?;

    let user = app_state
        .db
        .get_user_by_username(&claims.sub)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token subject no longer exists: {}", claims.sub);
            ApiError::invalid_credentials()
        })?;

    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("CurrentUser not found in request extensions");
                ApiError::invalid_credentials()
            })
    }
}
