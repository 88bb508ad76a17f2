//! HTTP response handling
//!
//! Single place for building the JSON error bodies, redirects, and JSON success
//! responses the handlers return.

use actix_web::{http::header, http::StatusCode, HttpResponse};
use serde_json::{json, Value};

const DEFAULT_ERROR_CODE: &str = "invalid_request";
const DEFAULT_MESSAGE: &str = "The request is malformed or invalid";

/// Unified response builder
pub struct ResponseBuilder;

impl ResponseBuilder {
    // ===============================
    // ERROR RESPONSE METHODS
    // ===============================

    /// Create a `BadRequest` (400) error response with optional customization
    #[must_use]
    pub fn bad_request() -> ErrorResponseBuilder {
        ErrorResponseBuilder::new(StatusCode::BAD_REQUEST)
    }

    /// 400 with no body
    #[must_use]
    pub fn empty_bad_request() -> HttpResponse {
        HttpResponse::BadRequest().finish()
    }

    /// Token exchange failure as seen by the mobile backend
    #[must_use]
    pub fn token_exchange_failed(message: &str) -> HttpResponse {
        Self::bad_request()
            .with_error_code("token_exchange_failed")
            .with_message(message)
            .build()
    }

    // ===============================
    // SUCCESS RESPONSE METHODS
    // ===============================

    /// Create a redirect response (302 Found)
    #[must_use]
    pub fn redirect(location: &str) -> HttpResponse {
        HttpResponse::Found()
            .append_header((header::LOCATION, location.to_string()))
            .finish()
    }

    /// Create an OK response (200) with JSON content
    #[must_use]
    pub fn ok_json<T: serde::Serialize>(data: &T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }
}

/// Builder for error responses with fluent interface
pub struct ErrorResponseBuilder {
    status: StatusCode,
    error_code: Option<String>,
    message: Option<String>,
}

impl ErrorResponseBuilder {
    fn new(status: StatusCode) -> Self {
        Self {
            status,
            error_code: None,
            message: None,
        }
    }

    /// Set a custom error code (e.g., "`invalid_request`", "`token_exchange_failed`")
    #[must_use]
    pub fn with_error_code(mut self, code: &str) -> Self {
        self.error_code = Some(code.to_string());
        self
    }

    /// Set a custom error message
    #[must_use]
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    /// Build the final `HttpResponse`
    #[must_use]
    pub fn build(self) -> HttpResponse {
        let error_code = self
            .error_code
            .unwrap_or_else(|| DEFAULT_ERROR_CODE.to_string());
        let message = self
            .message
            .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());

        HttpResponse::build(self.status).json(json!({
            "error": Value::String(error_code),
            "message": Value::String(message),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_default_error_responses() {
        let response = ResponseBuilder::bad_request().build();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "invalid_request", "message": "The request is malformed or invalid"})
        );

        let response = ResponseBuilder::bad_request()
            .with_message("Redirect URI is required")
            .build();
        assert_eq!(
            body_json(response).await,
            json!({"error": "invalid_request", "message": "Redirect URI is required"})
        );
    }

    #[actix_web::test]
    async fn test_token_exchange_failed_body() {
        let response = ResponseBuilder::token_exchange_failed("Failed to fetch user info");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "token_exchange_failed", "message": "Failed to fetch user info"})
        );
    }

    #[actix_web::test]
    async fn test_empty_bad_request_has_no_body() {
        let response = ResponseBuilder::empty_bad_request();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body()).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_redirect() {
        let response = ResponseBuilder::redirect("dobbie://linkedin/callback?code=abc");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "dobbie://linkedin/callback?code=abc"
        );
    }
}
