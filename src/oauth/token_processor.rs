//! Provider response decoding
//!
//! LinkedIn's token and userinfo endpoints return loosely specified JSON objects.
//! Only the keys this service needs are decoded; every other field is ignored.

use crate::models::DEFAULT_EXPIRES_IN;
use crate::oauth::service::ExchangeError;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// Token endpoint response
#[derive(Debug, Deserialize, Default)]
pub struct ProviderTokenResponse {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    /// Kept raw: LinkedIn sends a number, some proxies stringify it
    pub expires_in: Option<Value>,
}

/// Userinfo endpoint response
#[derive(Debug, Deserialize, Default)]
pub struct ProviderUserInfoResponse {
    pub sub: Option<String>,
}

/// Fields pulled from a token response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: u64,
}

pub struct TokenProcessor;

impl TokenProcessor {
    /// Decode a token endpoint body and extract the token fields
    ///
    /// # Errors
    ///
    /// Returns `TokenRequestFailed` if the body is empty, not a JSON object, or
    /// has no usable `access_token`
    pub fn process_token_body(status: u16, body: &str) -> Result<ExtractedTokens, ExchangeError> {
        let response: ProviderTokenResponse =
            Self::decode(body).map_err(|detail| ExchangeError::token(Some(status), detail))?;

        let access_token = response
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                ExchangeError::token(Some(status), "response has no access_token".to_string())
            })?;

        let expires_in = Self::expires_in_or_default(response.expires_in.as_ref());
        debug!(
            "Token response decoded: refresh_token={}, expires_in={expires_in}",
            if response.refresh_token.is_some() {
                "present"
            } else {
                "missing"
            }
        );

        Ok(ExtractedTokens {
            access_token,
            refresh_token: response.refresh_token,
            expires_in,
        })
    }

    /// Decode a userinfo body and return the member id (`sub`)
    ///
    /// # Errors
    ///
    /// Returns `UserInfoRequestFailed` if the body is empty, not a JSON object, or
    /// has no usable `sub`
    pub fn process_userinfo_body(status: u16, body: &str) -> Result<String, ExchangeError> {
        let response: ProviderUserInfoResponse =
            Self::decode(body).map_err(|detail| ExchangeError::user_info(Some(status), detail))?;

        response.sub.filter(|s| !s.is_empty()).ok_or_else(|| {
            ExchangeError::user_info(Some(status), "response has no sub".to_string())
        })
    }

    /// `expires_in` as seconds, falling back to the default when absent or non-numeric
    #[must_use]
    pub fn expires_in_or_default(raw: Option<&Value>) -> u64 {
        match raw {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
            _ => None,
        }
        .unwrap_or(DEFAULT_EXPIRES_IN)
    }

    fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, String> {
        if body.trim().is_empty() {
            return Err("empty response body".to_string());
        }
        serde_json::from_str(body).map_err(|e| format!("invalid response body: {e}"))
    }
}
