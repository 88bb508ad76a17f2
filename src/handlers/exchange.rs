// Authorization code exchange handler
use actix_web::{error::InternalError, web, HttpRequest, HttpResponse};

use crate::models::TokenExchangeRequest;
use crate::oauth::CodeExchange;
use crate::utils::logging::LoggingHelper;
use crate::utils::responses::ResponseBuilder;
use crate::validation::validate_exchange_request;

/// `POST /linkedin/exchange`
///
/// Called by the mobile app with the code it received through the redirect.
/// Every provider failure is reported as `token_exchange_failed`.
pub async fn linkedin_exchange(
    body: web::Json<TokenExchangeRequest>,
    exchanger: web::Data<dyn CodeExchange>,
) -> HttpResponse {
    LoggingHelper::log_exchange_request();

    let request = match validate_exchange_request(&body) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match exchanger.exchange(&request.code, &request.redirect_uri).await {
        Ok(result) => {
            LoggingHelper::log_exchange_success(&result.member_urn);
            ResponseBuilder::ok_json(&result)
        }
        Err(e) => {
            let message = e.to_string();
            LoggingHelper::log_exchange_failure(&message);
            ResponseBuilder::token_exchange_failed(&message)
        }
    }
}

/// JSON extractor config for the exchange route
///
/// Unparseable bodies get the same `invalid_request` shape as blank fields
/// instead of actix's plain-text error.
#[must_use]
pub fn exchange_json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, _req: &HttpRequest| {
            let message = err.to_string();
            LoggingHelper::log_invalid_exchange_body(&message);
            let response = ResponseBuilder::bad_request()
                .with_error_code("invalid_request")
                .with_message(&message)
                .build();
            InternalError::from_response(err, response).into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mock::MockFailure;
    use crate::testing::{MockExchanger, TestFixtures};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    async fn post(exchanger: Arc<MockExchanger>, body: &str) -> (StatusCode, Value) {
        let data: Arc<dyn CodeExchange> = exchanger;
        let app = test::init_service(
            App::new().app_data(web::Data::from(data)).service(
                web::resource("/linkedin/exchange")
                    .app_data(exchange_json_config())
                    .route(web::post().to(linkedin_exchange)),
            ),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/linkedin/exchange")
            .insert_header(("Content-Type", "application/json"))
            .set_payload(body.to_string())
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let json: Value = test::read_body_json(resp).await;
        (status, json)
    }

    fn succeeding() -> Arc<MockExchanger> {
        Arc::new(MockExchanger::succeeding(TestFixtures::exchange_result()))
    }

    #[actix_web::test]
    async fn test_successful_exchange() {
        let exchanger = succeeding();
        let (status, body) = post(
            exchanger.clone(),
            r#"{"code":"ABC123","redirect_uri":"https://app/cb"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "access_token": "tok1",
                "refresh_token": null,
                "expires_in": 5_184_000,
                "member_id": "999",
                "member_urn": "urn:li:person:999"
            })
        );
        assert_eq!(
            exchanger.calls(),
            vec![("ABC123".to_string(), "https://app/cb".to_string())]
        );
    }

    #[actix_web::test]
    async fn test_failed_exchange() {
        let (status, body) = post(
            Arc::new(MockExchanger::failing(MockFailure::UserInfo(Some(401)))),
            r#"{"code":"ABC123","redirect_uri":"https://app/cb"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"error": "token_exchange_failed", "message": "Failed to fetch user info"})
        );
    }

    #[actix_web::test]
    async fn test_blank_code_never_reaches_exchanger() {
        let exchanger = succeeding();
        let (status, body) = post(
            exchanger.clone(),
            r#"{"code":"  ","redirect_uri":"https://app/cb"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_request");
        assert_eq!(body["message"], "Authorization code is required");
        assert!(exchanger.calls().is_empty());
    }

    #[actix_web::test]
    async fn test_malformed_json_is_invalid_request() {
        let (status, body) = post(succeeding(), "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_request");
    }
}
