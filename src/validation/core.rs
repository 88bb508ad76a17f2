//! Request body validation
//!
//! Field checks for JSON request bodies that return a ready-made error response
//! on failure.

use actix_web::HttpResponse;

use crate::models::TokenExchangeRequest;
use crate::utils::responses::ResponseBuilder;

/// Validated `/linkedin/exchange` input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedExchangeRequest {
    pub code: String,
    pub redirect_uri: String,
}

/// Require a non-blank string field
///
/// # Errors
///
/// Returns a 400 `invalid_request` response carrying `message` when the value is
/// missing, empty, or whitespace only
pub fn require_non_blank(value: Option<&String>, message: &str) -> Result<String, HttpResponse> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.clone()),
        _ => {
            log::debug!("Request validation failed: {message}");
            Err(ResponseBuilder::bad_request()
                .with_error_code("invalid_request")
                .with_message(message)
                .build())
        }
    }
}

/// Validate the token exchange request body
///
/// # Errors
///
/// Returns a 400 response if `code` or `redirect_uri` is missing or blank
pub fn validate_exchange_request(
    request: &TokenExchangeRequest,
) -> Result<ValidatedExchangeRequest, HttpResponse> {
    let code = require_non_blank(request.code.as_ref(), "Authorization code is required")?;
    let redirect_uri = require_non_blank(request.redirect_uri.as_ref(), "Redirect URI is required")?;
    Ok(ValidatedExchangeRequest { code, redirect_uri })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    fn request(code: Option<&str>, redirect_uri: Option<&str>) -> TokenExchangeRequest {
        TokenExchangeRequest {
            code: code.map(ToString::to_string),
            redirect_uri: redirect_uri.map(ToString::to_string),
        }
    }

    #[test]
    fn test_valid_request() {
        let validated = validate_exchange_request(&request(Some("ABC123"), Some("https://app/cb")))
            .unwrap();
        assert_eq!(validated.code, "ABC123");
        assert_eq!(validated.redirect_uri, "https://app/cb");
    }

    #[test]
    fn test_missing_or_blank_fields_rejected() {
        for req in [
            request(None, Some("https://app/cb")),
            request(Some(" "), Some("https://app/cb")),
            request(Some("ABC123"), None),
            request(Some("ABC123"), Some("")),
        ] {
            let response = validate_exchange_request(&req).unwrap_err();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }
}
