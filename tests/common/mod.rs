//! Common test utilities and helpers
//!
//! Builds the real router on an in-memory SQLite database and drives it with
//! `tower::ServiceExt::oneshot`, so no port is bound.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use cinescope::backend::routes::create_router;
use cinescope::backend::server::{config::ConfigBuilder, create_state, AppState, Config};

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_TMDB_KEY: &str = "test-tmdb-key";

/// Configuration for tests: in-memory database, cheap bcrypt
pub fn test_config() -> ConfigBuilder {
    Config::builder()
        .database_url("sqlite::memory:")
        .secret_key(TEST_SECRET)
        .tmdb_api_key(TEST_TMDB_KEY)
        .bcrypt_cost(4)
}

/// Router plus the state behind it
pub struct TestApp {
    pub state: AppState,
    router: Router,
}

/// Status, headers and JSON body of a response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    /// App whose TMDB gateway points at `base_url`
    pub async fn with_tmdb(base_url: &str) -> Self {
        Self::with_config(test_config().tmdb_base_url(base_url)).await
    }

    pub async fn with_config(builder: ConfigBuilder) -> Self {
        let config = builder.build().expect("valid test config");
        let state = create_state(config).await.expect("test state");
        let router = create_router(state.clone());
        Self { state, router }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        let request = with_token(Request::get(uri), token)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: Value, token: Option<&str>) -> TestResponse {
        let request = with_token(Request::post(uri), token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        let request = with_token(Request::delete(uri), token)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn register(&self, username: &str, email: &str, password: &str) -> TestResponse {
        self.post_json(
            "/register",
            serde_json::json!({
                "username": username,
                "email": email,
                "password": password,
            }),
            None,
        )
        .await
    }

    /// POST /token with a form body, as a browser client would
    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.login_from(username, password, None, None).await
    }

    /// POST /token with an optional peer address and User-Agent
    pub async fn login_from(
        &self,
        username: &str,
        password: &str,
        peer: Option<SocketAddr>,
        user_agent: Option<&str>,
    ) -> TestResponse {
        let form = serde_urlencoded::to_string([("username", username), ("password", password)])
            .expect("encode login form");
        let mut builder = Request::post("/token")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(user_agent) = user_agent {
            builder = builder.header(header::USER_AGENT, user_agent);
        }

        let mut request = builder.body(Body::from(form)).unwrap();
        if let Some(peer) = peer {
            request.extensions_mut().insert(ConnectInfo(peer));
        }
        self.send(request).await
    }

    /// Register a user and return a valid access token for it
    pub async fn register_and_login(&self, username: &str, email: &str, password: &str) -> String {
        let registered = self.register(username, email, password).await;
        assert_eq!(registered.status, StatusCode::OK, "{:?}", registered.body);

        let login = self.login(username, password).await;
        assert_eq!(login.status, StatusCode::OK, "{:?}", login.body);

        login.body["access_token"]
            .as_str()
            .expect("access_token")
            .to_string()
    }
}

fn with_token(builder: axum::http::request::Builder, token: Option<&str>) -> axum::http::request::Builder {
    match token {
        Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {}", token)),
        None => builder,
    }
}
