/**
 * API Route Configuration
 *
 * Protected routes are grouped on their own router and wrapped with
 * `auth_middleware` through `route_layer`, so the middleware only runs for
 * requests that matched one of them. Unknown paths still get a plain 404
 * instead of a 401.
 */

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use crate::backend::auth::{login, me, register};
use crate::backend::favorites::{add_favorite, list_favorites, remove_favorite};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::tmdb::proxy_tmdb;

/// Configure API routes
///
/// ## Public
/// - `POST /register`
/// - `POST /token`
/// - `GET /api/tmdb/{*path}`
///
/// ## Requires `Authorization: Bearer <token>`
/// - `GET /users/me`
/// - `POST /api/favorites`, `GET /api/favorites`
/// - `DELETE /api/favorites/{tmdb_id}`
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/register", post(register))
        .route("/token", post(login))
        .route("/api/tmdb/{*path}", get(proxy_tmdb));

    let protected = Router::new()
        .route("/users/me", get(me))
        .route("/api/favorites", post(add_favorite).get(list_favorites))
        .route("/api/favorites/{tmdb_id}", delete(remove_favorite))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    router.merge(public).merge(protected)
}
