//! HTML `postMessage` response adapter.
//!
//! Callers that post a form from inside an iframe cannot read a cross-origin
//! response body, so the outcome is handed to the embedding page with
//! `window.parent.postMessage`. The HTTP status is always 200 and the
//! payload's `type` field tells success from failure.
//!
//! The message target origin is `*`: the payload is either a single-use
//! checkout URL or an error string.

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use checkout_bridge_core::SessionResult;

/// Content type of the page.
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// An HTML page posting a [`SessionResult`] to the parent window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMessagePage(pub SessionResult);

impl PostMessagePage {
    /// Render the page.
    #[must_use]
    pub fn render(&self) -> String {
        let payload = script_literal(&self.0);

        format!(
            "<!DOCTYPE html>\n\
             <html>\n  \
             <head><meta charset=\"utf-8\"></head>\n  \
             <body>\n    \
             <script>\n      \
             window.parent.postMessage({payload}, '*');\n    \
             </script>\n  \
             </body>\n\
             </html>\n"
        )
    }
}

impl IntoResponse for PostMessagePage {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(CONTENT_TYPE, HTML_CONTENT_TYPE)],
            self.render(),
        )
            .into_response()
    }
}

/// Serialize `result` as a JavaScript object literal safe to embed in an
/// inline `<script>` element.
///
/// JSON handles quotes, backslashes and control characters. On top of that
/// `<`, `>` and `&` are written as `\u` escapes so the text can never form
/// `</script>` or `<!--`, and U+2028/U+2029 are escaped for older engines
/// that treat them as line terminators inside string literals.
fn script_literal(result: &SessionResult) -> String {
    let json = match serde_json::to_string(result) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize checkout message");
            r#"{"type":"stripe-checkout-error","error":"internal error"}"#.to_string()
        }
    };

    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(c),
        }
    }
    escaped
}
