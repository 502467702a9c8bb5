/**
 * Get Current User Handler
 *
 * GET /users/me returns the user resolved by the auth middleware. The route
 * sits behind `auth_middleware`, so reaching this handler means the bearer
 * token was valid.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::middleware::CurrentUser;

/// Get current user handler
///
/// # Example Response
///
/// ```json
/// {"id": 1, "username": "alice", "email": "a@x.com"}
/// ```
pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}
