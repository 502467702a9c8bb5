/**
 * Login Handler
 *
 * This module implements the token endpoint, POST /token.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Issue a JWT carrying the username
 * 4. Record the login (peer address and user agent)
 *
 * # Security
 *
 * - Unknown username and wrong password return the same 401
 * - Passwords and tokens are never logged
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{LoginForm, TokenResponse};
use crate::backend::auth::password::verify_password;
use crate::backend::error::ApiError;
use crate::backend::extract::{ClientInfo, ValidForm};
use crate::backend::server::state::AppState;

/// Message returned for a failed login
pub const INCORRECT_CREDENTIALS: &str = "Incorrect username or password";

/// Login handler
///
/// Takes an `application/x-www-form-urlencoded` body with `username` and
/// `password`.
///
/// # Errors
///
/// * `401 Unauthorized` - unknown user or wrong password
/// * `422 Unprocessable Entity` - missing form fields or wrong content type
/// * `500 Internal Server Error` - database or token signing failure
///
/// A failure to write the login log is logged and otherwise ignored.
///
/// # Example Response
///
/// ```json
/// {"access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...", "token_type": "bearer"}
/// ```
pub async fn login(
    State(state): State<AppState>,
    client: ClientInfo,
    ValidForm(form): ValidForm<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!("Login request for: {}", form.username);

    let user = state
        .db
        .get_user_by_username(&form.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", form.username);
            ApiError::unauthorized(INCORRECT_CREDENTIALS)
        })?;

    let password = form.password;
    let hashed_password = user.hashed_password.clone();
    let valid = tokio::task::spawn_blocking(move || verify_password(&password, &hashed_password))
        .await
        .map_err(|e| ApiError::internal(format!("Verification task failed: {}", e)))?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", user.username);
        return Err(ApiError::unauthorized(INCORRECT_CREDENTIALS));
    }

    let access_token = state.tokens.issue(&user.username, None)?;

    if let Err(e) = state
        .db
        .record_login(
            user.id,
            client.ip_address.as_deref(),
            client.user_agent.as_deref(),
        )
        .await
    {
        tracing::warn!("Failed to record login for {}: {}", user.username, e);
    }

    tracing::info!("User logged in successfully: {}", user.username);

    Ok(Json(TokenResponse::bearer(access_token)))
}
