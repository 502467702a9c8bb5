//! Full user journey: register, log in, manage favorites

mod common;

use std::net::SocketAddr;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn test_register_login_and_manage_favorites() {
    let app = TestApp::new().await;

    let registered = app.register("alice", "a@x.com", "pw123").await;
    assert_eq!(registered.status, StatusCode::OK);
    let user_id = registered.body["id"].as_i64().unwrap();

    let login = app.login("alice", "pw123").await;
    assert_eq!(login.status, StatusCode::OK);
    let token = login.body["access_token"].as_str().unwrap().to_string();

    let me = app.get("/users/me", Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["username"], "alice");

    let added = app
        .post_json("/api/favorites", json!({"tmdb_id": 5, "title": "X"}), Some(&token))
        .await;
    assert_eq!(added.status, StatusCode::OK);
    assert_eq!(added.body["user_id"].as_i64(), Some(user_id));

    let removed = app.delete("/api/favorites/5", Some(&token)).await;
    assert_eq!(removed.status, StatusCode::OK);
    assert_eq!(removed.body, json!({"message": "Movie removed from favorites"}));

    let again = app.delete("/api/favorites/5", Some(&token)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login_records_client_details() {
    let app = TestApp::new().await;
    app.register("alice", "a@x.com", "pw123").await;
    let peer: SocketAddr = "203.0.113.9:40000".parse().unwrap();

    let login = app
        .login_from("alice", "pw123", Some(peer), Some("Mozilla/5.0 (test)"))
        .await;
    assert_eq!(login.status, StatusCode::OK);

    let rows: Vec<(i64, Option<String>, Option<String>)> =
        sqlx::query_as("SELECT user_id, ip_address, user_agent FROM login_logs")
            .fetch_all(app.state.db.pool())
            .await
            .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].1.as_deref(), Some("203.0.113.9"));
    assert_eq!(rows[0].2.as_deref(), Some("Mozilla/5.0 (test)"));
}

#[tokio::test]
async fn test_failed_login_records_nothing() {
    let app = TestApp::new().await;
    app.register("alice", "a@x.com", "pw123").await;

    app.login("alice", "wrong").await;
    app.login("nobody", "pw123").await;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM login_logs")
        .fetch_one(app.state.db.pool())
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_each_login_issues_a_working_token() {
    let app = TestApp::new().await;
    app.register("alice", "a@x.com", "pw123").await;

    for _ in 0..2 {
        let login = app.login("alice", "pw123").await;
        let token = login.body["access_token"].as_str().unwrap();
        let me = app.get("/users/me", Some(token)).await;
        assert_eq!(me.status, StatusCode::OK);
    }

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM login_logs")
        .fetch_one(app.state.db.pool())
        .await
        .unwrap();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_login_succeeds_when_login_log_write_fails() {
    let app = TestApp::new().await;
    app.register("alice", "a@x.com", "pw123").await;

    sqlx::query("DROP TABLE login_logs")
        .execute(app.state.db.pool())
        .await
        .unwrap();

    let login = app.login("alice", "pw123").await;
    assert_eq!(login.status, StatusCode::OK, "{:?}", login.body);
    assert_eq!(login.body["token_type"], "bearer");

    let token = login.body["access_token"].as_str().unwrap();
    let me = app.get("/users/me", Some(token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["username"], "alice");
}

#[tokio::test]
async fn test_password_with_form_metacharacters() {
    let app = TestApp::new().await;
    let password = "p&ss=w+rd %";
    app.register("alice", "a@x.com", password).await;

    let login = app.login("alice", password).await;
    assert_eq!(login.status, StatusCode::OK, "{:?}", login.body);

    let wrong = app.login("alice", "p").await;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
}
