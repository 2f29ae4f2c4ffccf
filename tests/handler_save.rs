mod common;

use alias_shortener::api::handlers::save_handler;
use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;

fn server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/url", post(save_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_save_with_custom_alias(pool: SqlitePool) {
    let server = server(pool.clone());

    let response = server
        .post("/url")
        .json(&json!({
            "url": "https://a.example/x",
            "alias": "myalias"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["alias"], "myalias");
    assert_eq!(
        common::aliases_for_url(&pool, "https://a.example/x").await,
        vec!["myalias"]
    );
}

#[sqlx::test]
async fn test_save_generates_alias(pool: SqlitePool) {
    let server = server(pool.clone());

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com/very/long/path" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let alias = json["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 6);
    assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(
        common::aliases_for_url(&pool, "https://example.com/very/long/path").await,
        vec![alias.to_string()]
    );
}

#[sqlx::test]
async fn test_save_empty_alias_generates(pool: SqlitePool) {
    let server = server(pool);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["alias"].as_str().unwrap().len(), 6);
}

#[sqlx::test]
async fn test_save_duplicate_alias_conflict(pool: SqlitePool) {
    common::create_test_mapping(&pool, "taken", "https://first.example").await;
    let server = server(pool.clone());

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://second.example", "alias": "taken" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");
    assert_eq!(json["error"]["details"]["alias"], "taken");
    assert_eq!(
        common::aliases_for_url(&pool, "https://first.example").await,
        vec!["taken"]
    );
    assert_eq!(common::count_mappings(&pool).await, 1);
}

#[sqlx::test]
async fn test_save_invalid_url(pool: SqlitePool) {
    let server = server(pool.clone());

    let response = server
        .post("/url")
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(common::count_mappings(&pool).await, 0);
}

#[sqlx::test]
async fn test_save_invalid_alias(pool: SqlitePool) {
    let server = server(pool.clone());

    for alias in ["has space", "a/b", "url", "health"] {
        let response = server
            .post("/url")
            .json(&json!({ "url": "https://example.com", "alias": alias }))
            .await;

        response.assert_status_bad_request();
    }

    assert_eq!(common::count_mappings(&pool).await, 0);
}

#[sqlx::test]
async fn test_save_same_url_twice_yields_two_aliases(pool: SqlitePool) {
    let server = server(pool.clone());

    for alias in ["one", "two"] {
        server
            .post("/url")
            .json(&json!({ "url": "https://dup.example", "alias": alias }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    assert_eq!(
        common::aliases_for_url(&pool, "https://dup.example").await,
        vec!["one", "two"]
    );
}
