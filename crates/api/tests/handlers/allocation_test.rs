#[path = "../test_utils.rs"]
mod test_utils;

use axum::{http::StatusCode, routing::post, Json, Router};
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use roomgrid_api::middleware::{auth::USERNAME_HEADER, extract::ApiJson};
use roomgrid_core::models::allocation::CreateAllocationRequest;
use serde_json::{json, Value};
use test_utils::{allocation_body, as_admin, error_message, test_server};
use uuid::Uuid;

/// A router that only decodes the allocation body, so decoding can be
/// checked without credentials or a store.
fn decoding_server() -> TestServer {
    let app = Router::new().route(
        "/allocations",
        post(|ApiJson(request): ApiJson<CreateAllocationRequest>| async move {
            Json(request.cohort_ids.len())
        }),
    );
    TestServer::new(app).expect("test server")
}

#[tokio::test]
async fn test_create_allocation_requires_credentials() {
    let server = test_server();

    let response = server.post("/api/allocations").json(&allocation_body()).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert!(error_message(&response.json::<Value>()).contains(USERNAME_HEADER));
}

#[tokio::test]
async fn test_delete_allocation_requires_credentials() {
    let server = test_server();

    let response = server
        .delete(&format!("/api/allocations/{}", Uuid::new_v4()))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_catalog_write_requires_credentials() {
    let server = test_server();

    let response = server
        .post("/api/rooms")
        .json(&json!({ "name": "B-101", "capacity": 40, "kind": "Lecture" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_modality_is_a_json_bad_request() {
    let server = decoding_server();
    let mut body = allocation_body();
    body["modality"] = json!("Online");

    let response = server.post("/allocations").json(&body).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(error_message(&response.json::<Value>()).contains("Invalid input"));
}

#[tokio::test]
async fn test_well_formed_allocation_body_decodes() {
    let server = decoding_server();

    let response = server.post("/allocations").json(&allocation_body()).await;

    response.assert_status_ok();
    assert_eq!(response.json::<usize>(), 1);
}

#[tokio::test]
async fn test_unreachable_store_is_service_unavailable() {
    let server = test_server();

    let response = as_admin(server.post("/api/allocations"))
        .json(&allocation_body())
        .await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    error_message(&response.json::<Value>());
}

#[tokio::test]
async fn test_verify_with_incomplete_body_is_a_json_bad_request() {
    let server = test_server();

    let response = server
        .post("/api/auth/verify")
        .json(&json!({ "username": "registrar" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    error_message(&response.json::<Value>());
}
