//! Form checkout endpoint integration tests.
//!
//! Every response is a 200 HTML page; the outcome travels in the message the
//! page posts to its parent window.

mod common;

use axum_test::multipart::MultipartForm;
use axum_test::TestResponse;
use serde_json::{json, Value};

use common::{origin, FakeProcessor, TestHarness, CHECKOUT_URL};

const ENDPOINT: &str = "/api/create-checkout-session-form";

/// Assert the response is a 200 HTML page and return the posted message.
fn posted_message(response: &TestResponse) -> Value {
    response.assert_status_ok();
    let content_type = response.headers().get("content-type").unwrap();
    assert_eq!(content_type, "text/html; charset=utf-8");

    let page = response.text();
    assert_eq!(page.matches("<script>").count(), 1);
    assert_eq!(page.matches("</script>").count(), 1);

    let start = page.find("window.parent.postMessage(").unwrap() + "window.parent.postMessage(".len();
    let end = page.rfind(", '*');").unwrap();
    serde_json::from_str(&page[start..end]).unwrap()
}

#[tokio::test]
async fn multipart_success_posts_checkout_url() {
    let harness = TestHarness::new(FakeProcessor::with_prices(&["price_1"]));

    let form = MultipartForm::new()
        .add_text("productId", "prod_1")
        .add_text("quantity", "1");
    let response = harness.server.post(ENDPOINT).multipart(form).await;

    let message = posted_message(&response);
    assert_eq!(
        message,
        json!({ "type": "stripe-checkout-success", "url": CHECKOUT_URL })
    );
}

#[tokio::test]
async fn urlencoded_form_is_accepted() {
    let harness = TestHarness::new(FakeProcessor::with_prices(&["price_1"]));

    let response = harness
        .server
        .post(ENDPOINT)
        .form(&[("productId", "prod_1"), ("quantity", "2")])
        .await;

    let message = posted_message(&response);
    assert_eq!(message["type"], "stripe-checkout-success");
    assert_eq!(harness.processor.last_session().line_items[0].quantity, 2);
}

#[tokio::test]
async fn attendee_names_become_metadata() {
    let harness = TestHarness::new(FakeProcessor::with_prices(&["price_1"]));

    let form = MultipartForm::new()
        .add_text("productId", "prod_1")
        .add_text("quantity", "3")
        .add_text("attendeeName0", "A")
        .add_text("attendeeName1", "B")
        .add_text("attendeeName2", "C");
    let response = harness.server.post(ENDPOINT).multipart(form).await;

    assert_eq!(posted_message(&response)["type"], "stripe-checkout-success");

    let metadata = harness.processor.last_session().metadata.unwrap();
    assert_eq!(metadata["attendee_1"], "A");
    assert_eq!(metadata["attendee_2"], "B");
    assert_eq!(metadata["attendee_3"], "C");
    assert_eq!(metadata["attendeeNames"], "A, B, C");
    assert_eq!(metadata["quantity"], "3");
}

#[tokio::test]
async fn blank_attendee_does_not_shift_later_tickets() {
    let harness = TestHarness::new(FakeProcessor::with_prices(&["price_1"]));

    let form = MultipartForm::new()
        .add_text("productId", "prod_1")
        .add_text("quantity", "2")
        .add_text("attendeeName0", "")
        .add_text("attendeeName1", "B");
    let response = harness.server.post(ENDPOINT).multipart(form).await;

    assert_eq!(posted_message(&response)["type"], "stripe-checkout-success");
    let metadata = harness.processor.last_session().metadata.unwrap();
    assert!(!metadata.contains_key("attendee_1"));
    assert_eq!(metadata["attendee_2"], "B");
    assert_eq!(metadata["attendeeNames"], "B");
}

#[tokio::test]
async fn fractional_quantity_uses_leading_integer() {
    let harness = TestHarness::new(FakeProcessor::with_prices(&["price_1"]));

    let form = MultipartForm::new()
        .add_text("productId", "prod_1")
        .add_text("quantity", "2.5");
    let response = harness.server.post(ENDPOINT).multipart(form).await;

    assert_eq!(posted_message(&response)["type"], "stripe-checkout-success");
    assert_eq!(harness.processor.last_session().line_items[0].quantity, 2);
}

#[tokio::test]
async fn redirect_urls_default_to_origin() {
    let harness = TestHarness::new(FakeProcessor::with_prices(&["price_1"]));
    let (name, value) = origin("https://example.com");

    let form = MultipartForm::new().add_text("productId", "prod_1");
    harness
        .server
        .post(ENDPOINT)
        .add_header(name, value)
        .multipart(form)
        .await
        .assert_status_ok();

    let session = harness.processor.last_session();
    assert_eq!(session.success_url, "https://example.com/success");
    assert_eq!(session.cancel_url, "https://example.com/cancel");
}

#[tokio::test]
async fn sandboxed_null_origin_uses_default() {
    let harness = TestHarness::new(FakeProcessor::with_prices(&["price_1"]));
    let (name, value) = origin("null");

    let form = MultipartForm::new().add_text("productId", "prod_1");
    harness
        .server
        .post(ENDPOINT)
        .add_header(name, value)
        .multipart(form)
        .await
        .assert_status_ok();

    let session = harness.processor.last_session();
    assert_eq!(session.success_url, "https://tuapp.com/success");
}

#[tokio::test]
async fn caller_redirect_urls_are_used() {
    let harness = TestHarness::new(FakeProcessor::with_prices(&["price_1"]));

    let form = MultipartForm::new()
        .add_text("productId", "prod_1")
        .add_text("successUrl", "https://site.framer.app/gracias")
        .add_text("cancelUrl", "https://site.framer.app/entradas");
    harness
        .server
        .post(ENDPOINT)
        .multipart(form)
        .await
        .assert_status_ok();

    let session = harness.processor.last_session();
    assert_eq!(session.success_url, "https://site.framer.app/gracias");
    assert_eq!(session.cancel_url, "https://site.framer.app/entradas");
}

#[tokio::test]
async fn no_active_price_posts_error_with_200() {
    let harness = TestHarness::new(FakeProcessor::with_prices(&[]));

    let form = MultipartForm::new().add_text("productId", "prod_1");
    let response = harness.server.post(ENDPOINT).multipart(form).await;

    let message = posted_message(&response);
    assert_eq!(
        message,
        json!({
            "type": "stripe-checkout-error",
            "error": "no active prices for this product"
        })
    );
}

#[tokio::test]
async fn missing_product_posts_error() {
    let harness = TestHarness::new(FakeProcessor::with_prices(&["price_1"]));

    let form = MultipartForm::new().add_text("quantity", "1");
    let response = harness.server.post(ENDPOINT).multipart(form).await;

    let message = posted_message(&response);
    assert_eq!(message["type"], "stripe-checkout-error");
    assert_eq!(message["error"], "productId is required");
    assert_eq!(harness.processor.call_count(), 0);
}

#[tokio::test]
async fn unsupported_body_posts_error() {
    let harness = TestHarness::new(FakeProcessor::with_prices(&["price_1"]));

    let response = harness
        .server
        .post(ENDPOINT)
        .json(&json!({ "productId": "prod_1" }))
        .await;

    let message = posted_message(&response);
    assert_eq!(message["type"], "stripe-checkout-error");
    assert_eq!(harness.processor.call_count(), 0);
}

#[tokio::test]
async fn hostile_processor_message_cannot_break_the_page() {
    let hostile = "bad'});</script><script>alert(document.cookie)</script>";
    let harness =
        TestHarness::new(FakeProcessor::with_prices(&["price_1"]).failing_sessions(hostile));

    let form = MultipartForm::new().add_text("productId", "prod_1");
    let response = harness.server.post(ENDPOINT).multipart(form).await;

    let message = posted_message(&response);
    assert_eq!(message["type"], "stripe-checkout-error");
    assert_eq!(message["error"], hostile);
    assert!(!response.text().contains("alert(document.cookie)</script>"));
}

#[tokio::test]
async fn hostile_attendee_name_is_passed_as_data() {
    let hostile = "</script><img src=x onerror=alert(1)>";
    let harness = TestHarness::new(FakeProcessor::with_prices(&["price_1"]));

    let form = MultipartForm::new()
        .add_text("productId", "prod_1")
        .add_text("attendeeName0", hostile);
    let response = harness.server.post(ENDPOINT).multipart(form).await;

    assert_eq!(posted_message(&response)["type"], "stripe-checkout-success");
    let metadata = harness.processor.last_session().metadata.unwrap();
    assert_eq!(metadata["attendee_1"], hostile);
}

#[tokio::test]
async fn form_endpoint_has_no_cors_headers() {
    let harness = TestHarness::new(FakeProcessor::with_prices(&["price_1"]));

    let form = MultipartForm::new().add_text("productId", "prod_1");
    let response = harness.server.post(ENDPOINT).multipart(form).await;

    response.assert_status_ok();
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}
