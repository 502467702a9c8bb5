/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Validate the username, email and password
 * 2. Check that neither the username nor the email is taken
 * 3. Hash password using bcrypt
 * 4. Create user in database
 * 5. Return the public user view
 *
 * A unique violation from the database (two concurrent registrations of the
 * same name) is reported as the same conflict as the explicit checks.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::backend::auth::password::hash_password;
use crate::backend::error::ApiError;
use crate::backend::extract::ValidJson;
use crate::backend::server::state::AppState;

/// Register handler
///
/// # Errors
///
/// * `422 Unprocessable Entity` - malformed body, empty field or invalid email
/// * `400 Bad Request` - username or email already registered
/// * `500 Internal Server Error` - hashing or database failure
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "alice", "email": "a@x.com", "password": "pw123"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"id": 1, "username": "alice", "email": "a@x.com"}
/// ```
pub async fn register(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<RegisterRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    tracing::info!("Register request for username: {}", request.username);

    request.validate()?;

    if state.db.get_user_by_username(&request.username).await?.is_some() {
        tracing::warn!("Username already exists: {}", request.username);
        return Err(ApiError::conflict("Username already registered"));
    }

    if state.db.get_user_by_email(&request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(ApiError::conflict("Email already registered"));
    }

    // bcrypt is CPU-bound; keep it off the async workers
    let cost = state.config.bcrypt_cost;
    let password = request.password;
    let hashed_password = tokio::task::spawn_blocking(move || hash_password(&password, cost))
        .await
        .map_err(|e| ApiError::internal(format!("Hashing task failed: {}", e)))??;

    let user = match state
        .db
        .create_user(&request.username, &request.email, &hashed_password)
        .await
    {
        Ok(user) => user,
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            tracing::warn!("Concurrent registration for: {}", request.username);
            return Err(ApiError::conflict("Username or email already registered"));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!("User created successfully: {} (id {})", user.username, user.id);

    Ok(Json(UserResponse::from(user)))
}
