/**
 * Error Conversion
 *
 * Converts `ApiError` into an HTTP response. The body is always JSON:
 *
 * ```json
 * {
 *   "detail": "Error message",
 *   "status": 404
 * }
 * ```
 *
 * Unauthorized responses also carry `WWW-Authenticate: Bearer`.
 */

use axum::{
    http::{header::WWW_AUTHENTICATE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected ({}): {}", status.as_u16(), message);
        }

        let body = Json(serde_json::json!({
            "detail": message,
            "status": status.as_u16(),
        }));

        let mut response = (status, body).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_unauthorized_sets_bearer_challenge() {
        let response = ApiError::invalid_credentials().into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[WWW_AUTHENTICATE], "Bearer");

        let body = body_json(response).await;
        assert_eq!(body["detail"], "Could not validate credentials");
        assert_eq!(body["status"], 401);
    }

    #[tokio::test]
    async fn test_not_found_has_no_challenge() {
        let response = ApiError::not_found("Movie not found in favorites").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(WWW_AUTHENTICATE).is_none());

        let body = body_json(response).await;
        assert_eq!(body["detail"], "Movie not found in favorites");
    }
}
