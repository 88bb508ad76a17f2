//! Authorization-code exchange against LinkedIn
//!
//! The exchange is a fixed two-step pipeline: the token request must succeed
//! before the userinfo request starts, because the second call authenticates
//! with the access token from the first. Either failure aborts the exchange.

use crate::models::TokenExchangeResult;
use crate::oauth::config::{ConfigurationError, LinkedInClientConfig};
use crate::oauth::token_processor::{ExtractedTokens, TokenProcessor};
use crate::utils::logging::LoggingHelper;
use async_trait::async_trait;
use thiserror::Error;

/// Exchange failures
///
/// `Display` is the message returned to the caller. `status` and `detail` are
/// for logs only.
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("Failed to exchange code for token")]
    TokenRequestFailed { status: Option<u16>, detail: String },
    #[error("Failed to fetch user info")]
    UserInfoRequestFailed { status: Option<u16>, detail: String },
}

impl ExchangeError {
    pub(crate) fn token(status: Option<u16>, detail: String) -> Self {
        Self::TokenRequestFailed { status, detail }
    }

    pub(crate) fn user_info(status: Option<u16>, detail: String) -> Self {
        Self::UserInfoRequestFailed { status, detail }
    }

    /// Which provider call failed
    #[must_use]
    pub fn phase(&self) -> &'static str {
        match self {
            Self::TokenRequestFailed { .. } => "token",
            Self::UserInfoRequestFailed { .. } => "userinfo",
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::TokenRequestFailed { status, .. } | Self::UserInfoRequestFailed { status, .. } => {
                *status
            }
        }
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::TokenRequestFailed { detail, .. } | Self::UserInfoRequestFailed { detail, .. } => {
                detail
            }
        }
    }
}

/// Exchanges an authorization code for a normalized token result
#[async_trait]
pub trait CodeExchange: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the token request or the userinfo request fails
    async fn exchange(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<TokenExchangeResult, ExchangeError>;
}

/// LinkedIn implementation of [`CodeExchange`]
pub struct TokenExchanger {
    config: LinkedInClientConfig,
    http_client: reqwest::Client,
}

impl TokenExchanger {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: LinkedInClientConfig) -> Result<Self, ConfigurationError> {
        let http_client = config.build_http_client()?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Step 1: form-encoded POST to the token endpoint
    async fn request_access_token(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<ExtractedTokens, ExchangeError> {
        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
        ];

        LoggingHelper::log_token_request_start(&self.config.token_endpoint);
        let response = self
            .http_client
            .post(&self.config.token_endpoint)
            .form(&params)
            .send()
            .await
            .map_err(|e| ExchangeError::token(None, format!("request error: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ExchangeError::token(Some(status.as_u16()), format!("read error: {e}")))?;

        if !status.is_success() {
            return Err(ExchangeError::token(
                Some(status.as_u16()),
                format!("provider returned {status}: {body}"),
            ));
        }

        TokenProcessor::process_token_body(status.as_u16(), &body)
    }

    /// Step 3: bearer-authenticated GET to the userinfo endpoint
    async fn request_member_id(&self, access_token: &str) -> Result<String, ExchangeError> {
        let response = self
            .http_client
            .get(&self.config.userinfo_endpoint)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| ExchangeError::user_info(None, format!("request error: {e}")))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            ExchangeError::user_info(Some(status.as_u16()), format!("read error: {e}"))
        })?;

        if !status.is_success() {
            return Err(ExchangeError::user_info(
                Some(status.as_u16()),
                format!("provider returned {status}: {body}"),
            ));
        }

        TokenProcessor::process_userinfo_body(status.as_u16(), &body)
    }
}

#[async_trait]
impl CodeExchange for TokenExchanger {
    async fn exchange(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<TokenExchangeResult, ExchangeError> {
        let tokens = self
            .request_access_token(code, redirect_uri)
            .await
            .inspect_err(LoggingHelper::log_exchange_phase_failure)?;
        LoggingHelper::log_access_token_obtained(tokens.expires_in);

        let member_id = self
            .request_member_id(&tokens.access_token)
            .await
            .inspect_err(LoggingHelper::log_exchange_phase_failure)?;

        let result = TokenExchangeResult::new(
            tokens.access_token,
            tokens.refresh_token,
            tokens.expires_in,
            member_id,
        );
        LoggingHelper::log_member_resolved(&result.member_urn);
        Ok(result)
    }
}
