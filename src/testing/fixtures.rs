//! Test fixtures providing pre-built test objects

use crate::models::TokenExchangeResult;
use crate::oauth::{AppRedirect, LinkedInClientConfig, TokenExchanger};
use crate::settings::{DobbieSettings, LinkedInSettings, MobileAppSettings};

use super::constants::{TEST_ACCESS_TOKEN, TEST_CLIENT_ID, TEST_CLIENT_SECRET, TEST_MEMBER_ID};

/// Central fixture provider for all test data
pub struct TestFixtures;

impl TestFixtures {
    /// Settings with direct credentials and no env lookups
    #[must_use]
    pub fn settings() -> DobbieSettings {
        DobbieSettings {
            linkedin: Self::linkedin_settings(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn linkedin_settings() -> LinkedInSettings {
        LinkedInSettings {
            client_id: Some(TEST_CLIENT_ID.to_string()),
            client_secret: Some(TEST_CLIENT_SECRET.to_string()),
            client_id_env: None,
            client_secret_env: None,
            ..Default::default()
        }
    }

    /// Settings pointing both provider endpoints at `base_url` (e.g. a wiremock server)
    #[must_use]
    pub fn linkedin_settings_for(base_url: &str) -> LinkedInSettings {
        LinkedInSettings {
            token_endpoint: format!("{base_url}/oauth/v2/accessToken"),
            userinfo_endpoint: format!("{base_url}/v2/userinfo"),
            request_timeout_seconds: 2,
            ..Self::linkedin_settings()
        }
    }

    /// # Panics
    ///
    /// Panics if the fixture settings are invalid
    #[must_use]
    pub fn client_config_for(base_url: &str) -> LinkedInClientConfig {
        LinkedInClientConfig::from_settings(&Self::linkedin_settings_for(base_url))
            .expect("fixture LinkedIn settings are valid")
    }

    /// # Panics
    ///
    /// Panics if the exchanger cannot be built
    #[must_use]
    pub fn exchanger_for(base_url: &str) -> TokenExchanger {
        TokenExchanger::new(Self::client_config_for(base_url)).expect("HTTP client builds")
    }

    /// # Panics
    ///
    /// Panics if the default mobile settings are invalid
    #[must_use]
    pub fn app_redirect() -> AppRedirect {
        AppRedirect::new(&MobileAppSettings::default()).expect("default scheme is valid")
    }

    #[must_use]
    pub fn exchange_result() -> TokenExchangeResult {
        TokenExchangeResult::new(
            TEST_ACCESS_TOKEN.to_string(),
            None,
            5_184_000,
            TEST_MEMBER_ID.to_string(),
        )
    }
}
