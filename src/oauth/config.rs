//! Immutable LinkedIn client configuration
//!
//! Credentials are resolved once at startup from [`LinkedInSettings`] and handed to
//! the token exchanger by value; nothing reads them from the environment afterwards.

use crate::settings::LinkedInSettings;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Missing {0} for LinkedIn provider")]
    MissingCredential(&'static str),
    #[error("Invalid {name}: {reason}")]
    InvalidSetting { name: &'static str, reason: String },
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct LinkedInClientConfig {
    pub client_id: String,
    pub client_secret: String,
    pub token_endpoint: String,
    pub userinfo_endpoint: String,
    pub request_timeout: Duration,
}

// client_secret stays out of logs
impl fmt::Debug for LinkedInClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedInClientConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("token_endpoint", &self.token_endpoint)
            .field("userinfo_endpoint", &self.userinfo_endpoint)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl LinkedInClientConfig {
    /// Resolve and validate the provider configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The client id or client secret is missing or blank
    /// - Either endpoint is not an absolute URL
    /// - The request timeout is zero
    pub fn from_settings(settings: &LinkedInSettings) -> Result<Self, ConfigurationError> {
        let client_id = settings
            .get_client_id()
            .ok_or(ConfigurationError::MissingCredential("client_id"))?;
        let client_secret = settings
            .get_client_secret()
            .ok_or(ConfigurationError::MissingCredential("client_secret"))?;

        Self::validate_endpoint("token_endpoint", &settings.token_endpoint)?;
        Self::validate_endpoint("userinfo_endpoint", &settings.userinfo_endpoint)?;

        if settings.request_timeout_seconds == 0 {
            return Err(ConfigurationError::InvalidSetting {
                name: "request_timeout_seconds",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            client_id,
            client_secret,
            token_endpoint: settings.token_endpoint.clone(),
            userinfo_endpoint: settings.userinfo_endpoint.clone(),
            request_timeout: Duration::from_secs(settings.request_timeout_seconds),
        })
    }

    fn validate_endpoint(name: &'static str, value: &str) -> Result<(), ConfigurationError> {
        let url = url::Url::parse(value).map_err(|e| ConfigurationError::InvalidSetting {
            name,
            reason: e.to_string(),
        })?;
        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(ConfigurationError::InvalidSetting {
                name,
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        Ok(())
    }

    /// Build the HTTP client used for both provider calls
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized
    pub fn build_http_client(&self) -> Result<reqwest::Client, ConfigurationError> {
        let client = reqwest::Client::builder()
            .timeout(self.request_timeout)
            .connect_timeout(self.request_timeout)
            .build()?;
        Ok(client)
    }
}
