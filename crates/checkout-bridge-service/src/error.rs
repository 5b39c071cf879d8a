//! API error types and JSON error responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use checkout_bridge_core::CheckoutError;

/// API error type for the JSON endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request - invalid input or nothing to sell.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The payment processor failed.
    #[error("processor error: {0}")]
    Processor(String),

    /// The payment processor did not answer in time.
    #[error("gateway timeout: {0}")]
    GatewayTimeout(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Processor(msg) => {
                tracing::error!(error = %msg, "Payment processor error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            Self::GatewayTimeout(msg) => {
                tracing::warn!(error = %msg, "Payment processor timeout");
                (StatusCode::GATEWAY_TIMEOUT, msg)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        let message = err.to_string();
        match err {
            CheckoutError::Validation(_) | CheckoutError::NoActivePrice => {
                Self::BadRequest(message)
            }
            CheckoutError::Processor(_) => Self::Processor(message),
            CheckoutError::Timeout(_) => Self::GatewayTimeout(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
