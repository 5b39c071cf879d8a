//! Health and landing page integration tests.

mod common;

use common::{FakeProcessor, TestHarness};

#[tokio::test]
async fn health_check_returns_ok() {
    let harness = TestHarness::new(FakeProcessor::with_prices(&["price_1"]));

    let response = harness.server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "checkout-bridge");
    assert_eq!(body["processor_configured"], true);
}

#[tokio::test]
async fn health_reports_missing_processor() {
    let server = TestHarness::unconfigured();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["processor_configured"], false);
}

#[tokio::test]
async fn landing_page_documents_endpoints() {
    let harness = TestHarness::new(FakeProcessor::with_prices(&["price_1"]));

    let response = harness.server.get("/").await;

    response.assert_status_ok();
    let content_type = response.headers().get("content-type").unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let page = response.text();
    assert!(page.contains("POST /api/create-checkout-session"));
    assert!(page.contains("POST /api/create-checkout-session-form"));
    assert!(page.contains("stripe-checkout-success"));
    assert_eq!(harness.processor.call_count(), 0);
}
