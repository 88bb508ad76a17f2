use serde::{Deserialize, Serialize};

/// Namespace LinkedIn uses for person URNs
pub const MEMBER_URN_PREFIX: &str = "urn:li:person:";

/// Token lifetime assumed when the provider omits `expires_in`
pub const DEFAULT_EXPIRES_IN: u64 = 3600;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Body of `POST /linkedin/exchange`
///
/// Both fields are optional at the serde level so that a missing field surfaces
/// through the same validation path as a blank one.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct TokenExchangeRequest {
    pub code: Option<String>,
    pub redirect_uri: Option<String>,
}

/// Normalized outcome of a successful code exchange
///
/// Built only through [`TokenExchangeResult::new`], which derives `member_urn`
/// from `member_id`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenExchangeResult {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: u64,
    pub member_id: String,
    pub member_urn: String,
}

impl TokenExchangeResult {
    #[must_use]
    pub fn new(
        access_token: String,
        refresh_token: Option<String>,
        expires_in: u64,
        member_id: String,
    ) -> Self {
        let member_urn = member_urn_for(&member_id);
        Self {
            access_token,
            refresh_token,
            expires_in,
            member_id,
            member_urn,
        }
    }
}

/// Build the person URN for a LinkedIn member id
#[must_use]
pub fn member_urn_for(member_id: &str) -> String {
    format!("{MEMBER_URN_PREFIX}{member_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_urn_is_prefixed_member_id() {
        let result = TokenExchangeResult::new("tok1".to_string(), None, 3600, "999".to_string());
        assert_eq!(result.member_urn, "urn:li:person:999");
        assert_eq!(result.member_urn, format!("{MEMBER_URN_PREFIX}{}", result.member_id));
    }

    #[test]
    fn test_member_urn_is_deterministic() {
        assert_eq!(member_urn_for("abc-DEF_1"), member_urn_for("abc-DEF_1"));
        assert_ne!(member_urn_for("abc"), member_urn_for("abd"));
    }

    #[test]
    fn test_result_serializes_null_refresh_token() {
        let result = TokenExchangeResult::new(
            "tok1".to_string(),
            None,
            5_184_000,
            "999".to_string(),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "access_token": "tok1",
                "refresh_token": null,
                "expires_in": 5_184_000,
                "member_id": "999",
                "member_urn": "urn:li:person:999"
            })
        );
    }

    #[test]
    fn test_health_response_shape() {
        let json = serde_json::to_string(&HealthResponse::ok()).unwrap();
        assert_eq!(json, r#"{"status":"ok"}"#);
    }
}
