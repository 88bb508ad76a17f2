//! Mock objects and fake implementations for testing

use crate::models::TokenExchangeResult;
use crate::oauth::{CodeExchange, ExchangeError, OAuthCallback};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock OAuth callback data
pub struct MockOAuthCallback;

impl MockOAuthCallback {
    #[must_use]
    pub fn success(code: &str, state: Option<&str>) -> OAuthCallback {
        OAuthCallback {
            code: Some(code.to_string()),
            state: state.map(ToString::to_string),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn error(error: &str, description: Option<&str>) -> OAuthCallback {
        OAuthCallback {
            error: Some(error.to_string()),
            error_description: description.map(ToString::to_string),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn incomplete() -> OAuthCallback {
        OAuthCallback::default()
    }
}

/// Which failure a [`MockExchanger`] reports
#[derive(Debug, Clone, Copy)]
pub enum MockFailure {
    Token(Option<u16>),
    UserInfo(Option<u16>),
}

/// In-memory [`CodeExchange`] that records calls
pub struct MockExchanger {
    outcome: Result<TokenExchangeResult, MockFailure>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockExchanger {
    #[must_use]
    pub fn succeeding(result: TokenExchangeResult) -> Self {
        Self {
            outcome: Ok(result),
            calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn failing(failure: MockFailure) -> Self {
        Self {
            outcome: Err(failure),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `(code, redirect_uri)` pairs seen so far
    ///
    /// # Panics
    ///
    /// Panics if the call log mutex is poisoned
    #[must_use]
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("call log poisoned").clone()
    }
}

#[async_trait]
impl CodeExchange for MockExchanger {
    async fn exchange(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<TokenExchangeResult, ExchangeError> {
        self.calls
            .lock()
            .expect("call log poisoned")
            .push((code.to_string(), redirect_uri.to_string()));

        match &self.outcome {
            Ok(result) => Ok(result.clone()),
            Err(MockFailure::Token(status)) => Err(ExchangeError::TokenRequestFailed {
                status: *status,
                detail: "mock token failure".to_string(),
            }),
            Err(MockFailure::UserInfo(status)) => Err(ExchangeError::UserInfoRequestFailed {
                status: *status,
                detail: "mock userinfo failure".to_string(),
            }),
        }
    }
}
