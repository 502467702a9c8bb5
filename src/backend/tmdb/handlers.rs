//! TMDB proxy handler

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde_json::Value;

use crate::backend::error::ApiError;
use crate::backend::extract::ValidPath;
use crate::backend::tmdb::client::TmdbClient;

/// Proxy `GET /api/tmdb/{*path}` to TMDB
///
/// Query parameters are forwarded in order; repeated names are kept.
pub async fn proxy_tmdb(
    State(tmdb): State<TmdbClient>,
    ValidPath(path): ValidPath<String>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, ApiError> {
    let body = tmdb.proxy(&path, query).await?;
    Ok(Json(body))
}
