// Centralized logging for the callback and exchange flows
use log::{debug, error, info, warn};

use crate::oauth::ExchangeError;

pub struct LoggingHelper;

impl LoggingHelper {
    pub fn log_callback_received(has_code: bool, has_state: bool, has_error: bool) {
        info!(
            "📥 Received LinkedIn callback (code={}, state={}, error={})",
            Self::presence(has_code),
            Self::presence(has_state),
            Self::presence(has_error)
        );
    }

    /// The description is only ever logged; the app receives the error code alone
    pub fn log_provider_denied(error: &str, description: Option<&str>) {
        error!(
            "❌ LinkedIn auth error: {} - {}",
            error,
            description.unwrap_or("no description")
        );
    }

    pub fn log_missing_code() {
        error!("❌ No authorization code received");
    }

    pub fn log_code_forwarded(location_base: &str) {
        info!("✅ Received authorization code, redirecting to {location_base}");
    }

    pub fn log_exchange_request() {
        info!("📥 Received token exchange request");
    }

    pub fn log_token_request_start(token_endpoint: &str) {
        debug!("🔄 Exchanging authorization code for token at {token_endpoint}");
    }

    pub fn log_access_token_obtained(expires_in: u64) {
        debug!("✅ Got access token, expires in {expires_in} seconds");
    }

    pub fn log_member_resolved(member_urn: &str) {
        debug!("✅ Got member URN: {member_urn}");
    }

    /// Phase, provider status and detail; never the access token
    pub fn log_exchange_phase_failure(err: &ExchangeError) {
        match err.status() {
            Some(status) => error!(
                "❌ LinkedIn {} request failed with status {}: {}",
                err.phase(),
                status,
                err.detail()
            ),
            None => error!(
                "❌ LinkedIn {} request failed: {}",
                err.phase(),
                err.detail()
            ),
        }
    }

    pub fn log_exchange_success(member_urn: &str) {
        info!("✅ Token exchange successful for member: {member_urn}");
    }

    pub fn log_exchange_failure(message: &str) {
        error!("❌ Token exchange failed: {message}");
    }

    pub fn log_invalid_exchange_body(reason: &str) {
        warn!("Rejected token exchange body: {reason}");
    }

    fn presence(present: bool) -> &'static str {
        if present {
            "present"
        } else {
            "absent"
        }
    }
}
