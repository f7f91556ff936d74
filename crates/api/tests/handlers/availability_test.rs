#[path = "../test_utils.rs"]
mod test_utils;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;
use test_utils::{error_message, test_server};

#[tokio::test]
async fn test_availability_rejects_unknown_day() {
    let server = test_server();

    let response = server
        .get("/api/availability")
        .add_query_param("day", "Sunday")
        .add_query_param("shift", "Morning")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(error_message(&response.json::<Value>()).contains("Sunday"));
}

#[tokio::test]
async fn test_availability_requires_shift() {
    let server = test_server();

    let response = server
        .get("/api/availability")
        .add_query_param("day", "Monday")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(error_message(&response.json::<Value>()).contains("shift is required"));
}
