#[path = "../test_utils.rs"]
mod test_utils;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_utils::test_server;

#[tokio::test]
async fn test_health_check() {
    let server = test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_version_reports_package() {
    let server = test_server();

    let body = server.get("/version").await.json::<Value>();

    assert_eq!(body["name"], "roomgrid-api");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
