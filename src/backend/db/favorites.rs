//! Favorite movie records and queries

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::backend::db::{Database, Result};

/// Media type stored when the client does not send one
pub const DEFAULT_MEDIA_TYPE: &str = "movie";

/// A user's saved reference to a TMDB title
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct FavoriteMovie {
    pub id: i64,
    /// TMDB identifier of the movie or show
    pub tmdb_id: i64,
    pub title: String,
    pub poster_path: Option<String>,
    /// `movie` or `tv`
    pub media_type: String,
    pub added_at: DateTime<Utc>,
    /// Owning user
    pub user_id: i64,
}

/// Fields needed to create a favorite
#[derive(Debug, Clone)]
pub struct NewFavorite {
    pub tmdb_id: i64,
    pub title: String,
    pub poster_path: Option<String>,
    pub media_type: String,
}

impl Database {
    /// Find the favorite `user_id` holds for `tmdb_id`, if any
    pub async fn find_favorite(&self, user_id: i64, tmdb_id: i64) -> Result<Option<FavoriteMovie>> {
        sqlx::query_as::<_, FavoriteMovie>(
            r#"
            SELECT id, tmdb_id, title, poster_path, media_type, added_at, user_id
            FROM favorites
            WHERE tmdb_id = ? AND user_id = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(tmdb_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Insert a favorite for `user_id`
    ///
    /// Does not check for an existing entry; callers look up first.
    pub async fn create_favorite(&self, user_id: i64, favorite: &NewFavorite) -> Result<FavoriteMovie> {
        sqlx::query_as::<_, FavoriteMovie>(
            r#"
            INSERT INTO favorites (tmdb_id, title, poster_path, media_type, added_at, user_id)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, tmdb_id, title, poster_path, media_type, added_at, user_id
            "#,
        )
        .bind(favorite.tmdb_id)
        .bind(&favorite.title)
        .bind(&favorite.poster_path)
        .bind(&favorite.media_type)
        .bind(Utc::now())
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
    }

    /// All favorites of `user_id`, in insertion order
    pub async fn list_favorites(&self, user_id: i64) -> Result<Vec<FavoriteMovie>> {
        sqlx::query_as::<_, FavoriteMovie>(
            r#"
            SELECT id, tmdb_id, title, poster_path, media_type, added_at, user_id
            FROM favorites
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Delete the favorite `user_id` holds for `tmdb_id`
    ///
    /// Returns the number of rows removed; zero means the user had no such
    /// favorite.
    pub async fn delete_favorite(&self, user_id: i64, tmdb_id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM favorites WHERE tmdb_id = ? AND user_id = ?")
            .bind(tmdb_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
