// LinkedIn redirect callback handler
use actix_web::{web, HttpResponse};

use crate::oauth::{AppRedirect, OAuthCallback};
use crate::utils::logging::LoggingHelper;
use crate::utils::responses::ResponseBuilder;
use crate::validation::{CallbackOutcome, CallbackValidator};

/// `GET /linkedin`
///
/// The registered LinkedIn redirect URI. Forwards the result to the mobile app
/// through its custom scheme; no provider calls happen here.
pub async fn linkedin_callback(
    query: web::Query<OAuthCallback>,
    app_redirect: web::Data<AppRedirect>,
) -> HttpResponse {
    let callback = query.into_inner();
    LoggingHelper::log_callback_received(
        callback.code.is_some(),
        callback.state.is_some(),
        callback.error.is_some(),
    );

    match CallbackValidator::classify(&callback) {
        Ok(outcome) => {
            match &outcome {
                CallbackOutcome::Denied { error, description } => {
                    LoggingHelper::log_provider_denied(error, description.as_deref());
                }
                CallbackOutcome::Success { .. } => {
                    LoggingHelper::log_code_forwarded(app_redirect.base_url());
                }
            }
            ResponseBuilder::redirect(&app_redirect.location_for(&outcome))
        }
        Err(_) => {
            LoggingHelper::log_missing_code();
            ResponseBuilder::empty_bad_request()
        }
    }
}
