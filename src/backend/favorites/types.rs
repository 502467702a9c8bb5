//! Favorites request types

use serde::Deserialize;

use crate::backend::db::favorites::{NewFavorite, DEFAULT_MEDIA_TYPE};

/// Body of `POST /api/favorites`
#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteRequest {
    pub tmdb_id: i64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    /// `movie` when omitted
    #[serde(default)]
    pub media_type: Option<String>,
}

impl From<FavoriteRequest> for NewFavorite {
    fn from(request: FavoriteRequest) -> Self {
        Self {
            tmdb_id: request.tmdb_id,
            title: request.title,
            poster_path: request.poster_path,
            media_type: request
                .media_type
                .unwrap_or_else(|| DEFAULT_MEDIA_TYPE.to_string()),
        }
    }
}
