/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router and applies the
 * global layers.
 *
 * # Layers
 *
 * - `TraceLayer` logs every request and response
 * - `CorsLayer::permissive()` allows any origin, method and header, since
 *   the single-page frontend is served from another origin
 */

use axum::{response::Json, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;
use crate::backend::types::MessageResponse;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(root));

    let router = configure_api_routes(router, &app_state);

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Liveness message for `GET /`
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("CineScope API is online"))
}
