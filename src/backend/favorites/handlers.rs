/**
 * Favorites Handlers
 *
 * All handlers receive the authenticated user from `CurrentUser` and scope
 * every query to that user's id, so one user can never see or delete another
 * user's favorites.
 */

use axum::{extract::State, response::Json};

use crate::backend::db::{Database, FavoriteMovie, NewFavorite};
use crate::backend::error::ApiError;
use crate::backend::extract::{ValidJson, ValidPath};
use crate::backend::favorites::types::FavoriteRequest;
use crate::backend::middleware::CurrentUser;
use crate::backend::types::MessageResponse;

/// Add a favorite
///
/// Adding a `tmdb_id` the user already saved returns the existing record
/// unchanged; title and poster are not updated.
pub async fn add_favorite(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    ValidJson(request): ValidJson<FavoriteRequest>,
) -> Result<Json<FavoriteMovie>, ApiError> {
    if let Some(existing) = db.find_favorite(user.id, request.tmdb_id).await? {
        tracing::debug!(
            "Favorite {} already saved for {}",
            request.tmdb_id,
            user.username
        );
        return Ok(Json(existing));
    }

    let favorite = db
        .create_favorite(user.id, &NewFavorite::from(request))
        .await?;

    tracing::info!("Added favorite {} for {}", favorite.tmdb_id, user.username);

    Ok(Json(favorite))
}

/// List the current user's favorites
pub async fn list_favorites(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<FavoriteMovie>>, ApiError> {
    let favorites = db.list_favorites(user.id).await?;
    Ok(Json(favorites))
}

/// Remove a favorite
///
/// # Errors
///
/// * `404 Not Found` - the user has no favorite with this `tmdb_id`
/// * `422 Unprocessable Entity` - `tmdb_id` is not an integer
pub async fn remove_favorite(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    ValidPath(tmdb_id): ValidPath<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = db.delete_favorite(user.id, tmdb_id).await?;

    if removed == 0 {
        return Err(ApiError::not_found("Movie not found in favorites"));
    }

    tracing::info!("Removed favorite {} for {}", tmdb_id, user.username);

    Ok(Json(MessageResponse::new("Movie removed from favorites")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::db::{test_database, User};
    use axum::http::StatusCode;

    async fn seeded() -> (Database, User) {
        let db = test_database().await;
        let user = db.create_user("alice", "a@x.com", "hash").await.unwrap();
        (db, user)
    }

    fn request(tmdb_id: i64, title: &str) -> FavoriteRequest {
        FavoriteRequest {
            tmdb_id,
            title: title.to_string(),
            poster_path: None,
            media_type: None,
        }
    }

    #[tokio::test]
    async fn test_add_favorite_is_idempotent() {
        let (db, user) = seeded().await;

        let Json(first) = add_favorite(
            State(db.clone()),
            CurrentUser(user.clone()),
            ValidJson(request(5, "X")),
        )
        .await
        .unwrap();

        let Json(second) = add_favorite(
            State(db.clone()),
            CurrentUser(user.clone()),
            ValidJson(request(5, "Renamed")),
        )
        .await
        .unwrap();

        assert_eq!(first, second);
        assert_eq!(second.title, "X");
        assert_eq!(db.list_favorites(user.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_missing_favorite_is_not_found() {
        let (db, user) = seeded().await;

        let err = remove_favorite(State(db), CurrentUser(user), ValidPath(42))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Movie not found in favorites");
    }

    #[tokio::test]
    async fn test_remove_favorite() {
        let (db, user) = seeded().await;
        add_favorite(
            State(db.clone()),
            CurrentUser(user.clone()),
            ValidJson(request(5, "X")),
        )
        .await
        .unwrap();

        let Json(response) = remove_favorite(State(db.clone()), CurrentUser(user.clone()), ValidPath(5))
            .await
            .unwrap();
        assert_eq!(response.message, "Movie removed from favorites");

        let Json(listed) = list_favorites(State(db), CurrentUser(user)).await.unwrap();
        assert!(listed.is_empty());
    }
}
