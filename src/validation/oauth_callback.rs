//! OAuth callback classification
//!
//! Decides what a LinkedIn redirect means before any response is built, so the
//! precedence rules are testable without HTTP plumbing.

use thiserror::Error;

use crate::oauth::OAuthCallback;

/// What the provider told us through the redirect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    Success {
        code: String,
        state: Option<String>,
    },
    /// Provider (or user) refused; forwarded to the app as a redirect, not an HTTP error
    Denied {
        error: String,
        description: Option<String>,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CallbackError {
    #[error("callback carries neither code nor error")]
    Malformed,
}

/// OAuth callback validator
pub struct CallbackValidator;

impl CallbackValidator {
    /// Classify a callback, first match wins:
    /// 1. `error` present → `Denied`
    /// 2. `code` absent → `Malformed`
    /// 3. otherwise → `Success`
    ///
    /// Presence is all that counts; values are carried through unchanged, even
    /// when empty.
    ///
    /// # Errors
    ///
    /// Returns `CallbackError::Malformed` when neither `error` nor `code` is present
    pub fn classify(callback: &OAuthCallback) -> Result<CallbackOutcome, CallbackError> {
        if let Some(error) = &callback.error {
            return Ok(CallbackOutcome::Denied {
                error: error.clone(),
                description: callback.error_description.clone(),
            });
        }

        let code = callback.code.as_ref().ok_or(CallbackError::Malformed)?;
        Ok(CallbackOutcome::Success {
            code: code.clone(),
            state: callback.state.clone(),
        })
    }
}
