//! OAuth module
//!
//! This module provides the LinkedIn authorization-code exchange, the provider
//! response decoding, and the redirect targets on the mobile app's URI scheme.

pub mod config;
pub mod redirect;
pub mod service;
pub mod token_processor;

pub use config::{ConfigurationError, LinkedInClientConfig};
pub use redirect::AppRedirect;
pub use service::{CodeExchange, ExchangeError, TokenExchanger};
pub use token_processor::{
    ExtractedTokens, ProviderTokenResponse, ProviderUserInfoResponse, TokenProcessor,
};

use serde::Deserialize;

/// Query parameters LinkedIn sends to the registered redirect URI
#[derive(Deserialize, Debug, Clone, Default)]
pub struct OAuthCallback {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}
