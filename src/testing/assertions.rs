//! Custom assertion helpers for testing

use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use serde_json::Value;

/// Assert a 302 and return its `Location`
///
/// # Panics
///
/// Panics if the response is not a redirect or has no readable `Location`
#[must_use]
pub fn assert_redirect(response: &ServiceResponse) -> String {
    assert_eq!(
        response.status().as_u16(),
        302,
        "Expected redirect, got {}",
        response.status()
    );
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect without Location header")
        .to_str()
        .expect("Location header is not valid UTF-8")
        .to_string()
}

/// Assert a JSON error body with the given error code
///
/// # Panics
///
/// Panics if the body has a different or missing `error` field
pub fn assert_error_code(body: &Value, expected_error: &str) {
    assert_eq!(
        body.get("error").and_then(Value::as_str),
        Some(expected_error),
        "Unexpected error body: {body}"
    );
}

/// Assert the body carries no token material
///
/// # Panics
///
/// Panics if the body contains an `access_token` field or the token value
pub fn assert_no_token_leak(body: &Value, access_token: &str) {
    assert!(
        body.get("access_token").is_none(),
        "access_token leaked into body: {body}"
    );
    assert!(
        !body.to_string().contains(access_token),
        "access token value leaked into body: {body}"
    );
}
