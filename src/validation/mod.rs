//! Validation Module
//!
//! - [`core`] - Request body validation helpers
//! - [`oauth_callback`] - OAuth callback classification

pub mod core;
pub mod oauth_callback;

pub use self::core::{require_non_blank, validate_exchange_request, ValidatedExchangeRequest};
pub use oauth_callback::{CallbackError, CallbackOutcome, CallbackValidator};
