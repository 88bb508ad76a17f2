// HTTP request handlers for the LinkedIn OAuth bridge
pub mod callback;
pub mod exchange;
pub mod health;

use actix_web::web;

pub use callback::linkedin_callback;
pub use exchange::{exchange_json_config, linkedin_exchange};
pub use health::health;

/// Register every route
///
/// Expects `web::Data<AppRedirect>` and `web::Data<dyn CodeExchange>` in app data.
pub fn configure_services(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/linkedin", web::get().to(linkedin_callback))
        .service(
            web::resource("/linkedin/exchange")
                .app_data(exchange_json_config())
                .route(web::post().to(linkedin_exchange)),
        );
}
