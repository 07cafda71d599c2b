//! API integration tests
//!
//! These run against a live server (and therefore a reachable record
//! store). Start the server, then: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_dashboard_summary() {
    let client = Client::new();

    let response = client
        .get(format!("{}/dashboard", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["tools"]["total"].is_number());
    assert!(body["attention"].is_number());
    assert!(body["tools_by_condition"].is_array());
    assert!(body["active_assignments"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_list_tools() {
    let client = Client::new();

    let response = client
        .get(format!("{}/tools", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_filter_tools_by_query() {
    let client = Client::new();

    let response = client
        .get(format!("{}/tools?q=bohr", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_get_missing_tool_returns_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/tools/000000000000000000000000", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
#[ignore]
async fn test_create_assignment_requires_tool() {
    let client = Client::new();

    let response = client
        .post(format!("{}/assignments", BASE_URL))
        .json(&json!({
            "tool_id": "",
            "employee_id": "11aaaaaaaaaaaaaaaaaaaaaa"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_upcoming_maintenance() {
    let client = Client::new();

    let response = client
        .get(format!("{}/maintenance/upcoming?limit=3", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.as_array().expect("array body").len() <= 3);
}
