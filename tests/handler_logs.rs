mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;

async fn create_user(server: &TestServer, username: &str) -> i64 {
    server
        .post("/api/users")
        .form(&[("username", username)])
        .await
        .json::<Value>()["id"]
        .as_i64()
        .unwrap()
}

async fn add_exercise(server: &TestServer, user_id: i64, description: &str, date: &str) {
    server
        .post(&format!("/api/users/{user_id}/exercises"))
        .form(&[
            ("description", description),
            ("duration", "30"),
            ("date", date),
        ])
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_log_reports_count_and_entries() {
    let server = common::tracker_server();
    let user_id = create_user(&server, "fcc_test").await;
    add_exercise(&server, user_id, "test run", "2023-05-15").await;

    let response = server.get(&format!("/api/users/{user_id}/logs")).await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["username"], "fcc_test");
    assert_eq!(json["id"], user_id);
    assert_eq!(json["count"], 1);

    let log = json["log"].as_array().unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0]["description"], "test run");
    assert_eq!(log[0]["duration"], 30);
    assert_eq!(log[0]["date"], "Mon May 15 2023");
}

#[tokio::test]
async fn test_log_date_range_is_inclusive() {
    let server = common::tracker_server();
    let user_id = create_user(&server, "fcc_test").await;

    for (description, date) in [
        ("before", "2019-12-31"),
        ("first day", "2020-01-01"),
        ("midyear", "2020-06-15"),
        ("last day", "2020-12-31"),
        ("after", "2021-01-01"),
    ] {
        add_exercise(&server, user_id, description, date).await;
    }

    let response = server
        .get(&format!(
            "/api/users/{user_id}/logs?from=2020-01-01&to=2020-12-31"
        ))
        .await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["count"], 3);

    let descriptions: Vec<_> = json["log"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["description"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(descriptions, vec!["first day", "midyear", "last day"]);
}

#[tokio::test]
async fn test_log_limit_truncates() {
    let server = common::tracker_server();
    let user_id = create_user(&server, "fcc_test").await;

    for date in ["2023-01-01", "2023-01-02", "2023-01-03"] {
        add_exercise(&server, user_id, "run", date).await;
    }

    let response = server
        .get(&format!("/api/users/{user_id}/logs?limit=2"))
        .await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["count"], 2);
    assert_eq!(json["log"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_log_limit_zero_means_no_limit() {
    let server = common::tracker_server();
    let user_id = create_user(&server, "fcc_test").await;

    for date in ["2023-01-01", "2023-01-02", "2023-01-03"] {
        add_exercise(&server, user_id, "run", date).await;
    }

    let response = server
        .get(&format!("/api/users/{user_id}/logs?limit=0"))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["count"], 3);
}

#[tokio::test]
async fn test_log_ignores_unparsable_range_params() {
    let server = common::tracker_server();
    let user_id = create_user(&server, "fcc_test").await;
    add_exercise(&server, user_id, "run", "2023-01-01").await;

    let response = server
        .get(&format!(
            "/api/users/{user_id}/logs?from=yesterday&to=tomorrow&limit=many"
        ))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["count"], 1);
}

#[tokio::test]
async fn test_log_unknown_user() {
    let server = common::tracker_server();

    let response = server.get("/api/users/999/logs").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "User not found");
}
