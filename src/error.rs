//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use uuid::Uuid;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from database operations
/// - **Authentication Errors**: Invalid or missing bearer tokens
/// - **Resource Errors**: Referenced products not found
/// - **Payment Errors**: Gateway failures and signature verification failures
/// - **Validation Errors**: Invalid request data
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Bearer token is missing, invalid, or revoked.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid authentication token")]
    InvalidToken,

    /// Referenced product does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Product not found")]
    ProductNotFound,

    /// One or more cart line items reference products that do not exist.
    ///
    /// The whole cart is rejected; the ids are reported so the client can
    /// drop the stale items and retry. Returns HTTP 404 Not Found.
    #[error("Products not found: {0:?}")]
    ProductsNotFound(Vec<Uuid>),

    /// Request body or parameters are invalid (empty cart, non-positive
    /// total, missing field).
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),

    /// The payment gateway signature did not match.
    ///
    /// Terminal for the checkout attempt: either a bug or an attempted
    /// forgery. Callers must not retry with the same identifiers.
    /// Returns HTTP 400 Bad Request.
    #[error("Payment verification failed")]
    VerificationFailed,

    /// The remote gateway call failed, errored, or timed out.
    ///
    /// Not this service's fault and not the client's: HTTP 502 Bad Gateway.
    /// Order creation is not retried automatically (no idempotency guarantee
    /// on the gateway side).
    #[error("Payment gateway error: {0}")]
    Gateway(String),

    /// The payment subsystem is misconfigured (e.g., the gateway HTTP
    /// client could not be constructed).
    ///
    /// Returns HTTP 500 with a distinct code so operators can tell it
    /// apart from a generic server error.
    #[error("Payment system not configured correctly: {0}")]
    Configuration(String),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidToken` → 401 Unauthorized
/// - `ProductNotFound` / `ProductsNotFound` → 404 Not Found
/// - `InvalidRequest` / `VerificationFailed` → 400 Bad Request
/// - `Gateway` → 502 Bad Gateway
/// - `Configuration` → 500 Internal Server Error (distinct code)
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            AppError::InvalidToken => (StatusCode::UNAUTHORIZED, "invalid_token", self.to_string()),
            AppError::ProductNotFound => {
                (StatusCode::NOT_FOUND, "product_not_found", self.to_string())
            }
            AppError::ProductsNotFound(ref ids) => {
                let list = ids.iter().map(Uuid::to_string).collect::<Vec<_>>().join(", ");
                (
                    StatusCode::NOT_FOUND,
                    "products_not_found",
                    format!("Products not found: {list}"),
                )
            }
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::VerificationFailed => (
                StatusCode::BAD_REQUEST,
                "payment_verification_failed",
                self.to_string(),
            ),
            AppError::Gateway(_) => (StatusCode::BAD_GATEWAY, "gateway_error", self.to_string()),
            AppError::Configuration(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "configuration_error",
                self.to_string(),
            ),
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        };

        // Build JSON response body
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        // Return the response with status code and JSON body
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_failure_maps_to_400() {
        let response = AppError::VerificationFailed.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn gateway_failure_maps_to_502() {
        let response = AppError::Gateway("timed out".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn configuration_failure_maps_to_500() {
        let response = AppError::Configuration("missing keys".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_products_map_to_404() {
        let response = AppError::ProductsNotFound(vec![Uuid::new_v4()]).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
