//! Redirect targets on the mobile app's custom URI scheme

use crate::oauth::config::ConfigurationError;
use crate::settings::MobileAppSettings;
use crate::validation::CallbackOutcome;
use url::Url;

/// Parsed `<scheme>://<callback_path>` base, validated once at startup
#[derive(Debug, Clone)]
pub struct AppRedirect {
    base: Url,
}

impl AppRedirect {
    /// # Errors
    ///
    /// Returns an error if the scheme and path do not form a valid absolute URI
    pub fn new(settings: &MobileAppSettings) -> Result<Self, ConfigurationError> {
        let raw = settings.callback_base_url();
        let base = Url::parse(&raw).map_err(|e| ConfigurationError::InvalidSetting {
            name: "mobile_app.scheme",
            reason: format!("'{raw}' is not a valid URI: {e}"),
        })?;

        if !base.scheme().eq_ignore_ascii_case(&settings.scheme) {
            return Err(ConfigurationError::InvalidSetting {
                name: "mobile_app.scheme",
                reason: format!("'{}' is not a valid URI scheme", settings.scheme),
            });
        }

        Ok(Self { base })
    }

    /// Redirect target for a classified callback
    ///
    /// Success forwards `code` and, only when present, `state`. Denial forwards
    /// `error` alone; the description stays server-side.
    #[must_use]
    pub fn location_for(&self, outcome: &CallbackOutcome) -> String {
        let mut url = self.base.clone();
        {
            let mut pairs = url.query_pairs_mut();
            match outcome {
                CallbackOutcome::Success { code, state } => {
                    pairs.append_pair("code", code);
                    if let Some(state) = state {
                        pairs.append_pair("state", state);
                    }
                }
                CallbackOutcome::Denied { error, .. } => {
                    pairs.append_pair("error", error);
                }
            }
        }
        url.into()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }
}
