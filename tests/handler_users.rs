mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_create_user_returns_username_and_id() {
    let server = common::tracker_server();

    let response = server
        .post("/api/users")
        .form(&[("username", "fcc_test")])
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["username"], "fcc_test");
    assert!(json["id"].is_i64());
}

#[tokio::test]
async fn test_created_user_listed_exactly_once() {
    let server = common::tracker_server();

    let created = server
        .post("/api/users")
        .form(&[("username", "fcc_test")])
        .await
        .json::<Value>();

    let response = server.get("/api/users").await;
    response.assert_status_ok();

    let users = response.json::<Value>();
    let users = users.as_array().unwrap();

    let matching: Vec<_> = users
        .iter()
        .filter(|user| user["username"] == "fcc_test")
        .collect();

    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0]["id"], created["id"]);
}

#[tokio::test]
async fn test_list_users_preserves_insertion_order() {
    let server = common::tracker_server();

    for username in ["alpha", "beta", "gamma"] {
        server
            .post("/api/users")
            .form(&[("username", username)])
            .await
            .assert_status_ok();
    }

    let users = server.get("/api/users").await.json::<Value>();
    let usernames: Vec<_> = users
        .as_array()
        .unwrap()
        .iter()
        .map(|user| user["username"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(usernames, vec!["alpha", "beta", "gamma"]);
}

#[tokio::test]
async fn test_create_user_rejects_empty_username() {
    let server = common::tracker_server();

    let response = server.post("/api/users").form(&[("username", "")]).await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_create_user_accepts_json_body() {
    let server = common::tracker_server();

    let response = server
        .post("/api/users")
        .json(&json!({ "username": "json_user" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["username"], "json_user");
}
