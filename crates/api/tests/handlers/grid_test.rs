#[path = "../test_utils.rs"]
mod test_utils;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;
use test_utils::{error_message, test_server};

#[tokio::test]
async fn test_grid_rejects_lowercase_day() {
    let server = test_server();

    let response = server.get("/api/grid").add_query_param("day", "monday").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(error_message(&response.json::<Value>()).contains("unknown day"));
}

#[tokio::test]
async fn test_cohort_grid_rejects_malformed_id() {
    let server = test_server();

    let response = server.get("/api/cohorts/not-a-uuid/grid").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(error_message(&response.json::<Value>()).starts_with("Invalid input"));
}

#[tokio::test]
async fn test_instructor_grid_rejects_malformed_id() {
    let server = test_server();

    let response = server.get("/api/instructors/42/grid").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    error_message(&response.json::<Value>());
}

#[tokio::test]
async fn test_cohort_listing_rejects_malformed_filter() {
    let server = test_server();

    let response = server
        .get("/api/cohorts")
        .add_query_param("course_id", "first-year")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    error_message(&response.json::<Value>());
}
