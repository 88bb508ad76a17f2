#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dobbie_oauth::{
    handlers::configure_services,
    oauth::{AppRedirect, CodeExchange, LinkedInClientConfig, TokenExchanger},
    settings::DobbieSettings,
    VERSION,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration from Settings.toml and environment variables
    // This also loads .env file and initializes the logger
    let settings = DobbieSettings::load()
        .map_err(|e| std::io::Error::other(format!("Failed to load settings: {e}")))?;

    let client_config = LinkedInClientConfig::from_settings(&settings.linkedin)
        .map_err(|e| std::io::Error::other(format!("Invalid LinkedIn configuration: {e}")))?;

    let app_redirect = AppRedirect::new(&settings.mobile_app)
        .map_err(|e| std::io::Error::other(format!("Invalid mobile app configuration: {e}")))?;

    let exchanger = TokenExchanger::new(client_config)
        .map_err(|e| std::io::Error::other(format!("Failed to build HTTP client: {e}")))?;

    start_server(settings, app_redirect, Arc::new(exchanger)).await
}

/// Start the HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Server binding fails
/// - Server fails to start
async fn start_server(
    settings: DobbieSettings,
    app_redirect: AppRedirect,
    exchanger: Arc<dyn CodeExchange>,
) -> std::io::Result<()> {
    let bind_address = settings.get_bind_address();
    print_startup_info(&bind_address, &settings, &app_redirect);

    let cors_origins = settings.get_cors_origins();
    let app_redirect = web::Data::new(app_redirect);
    let exchanger: web::Data<dyn CodeExchange> = web::Data::from(exchanger);

    HttpServer::new(move || {
        let cors_origins = cors_origins.clone();
        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _| {
                cors_origins
                    .iter()
                    .any(|allowed| allowed == origin.to_str().unwrap_or(""))
            })
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .app_data(app_redirect.clone())
            .app_data(exchanger.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .configure(configure_services)
    })
    .bind(&bind_address)?
    .run()
    .await
}

fn print_startup_info(bind_address: &str, settings: &DobbieSettings, app_redirect: &AppRedirect) {
    println!("Starting Dobbie LinkedIn OAuth bridge v{VERSION} on http://{bind_address}");
    println!();
    println!("Endpoints:");
    println!("  GET  /health             - Liveness check");
    println!("  GET  /linkedin           - LinkedIn authorization callback");
    println!("  POST /linkedin/exchange  - Exchange authorization code for tokens");
    println!();
    println!("Mobile app callback: {}", app_redirect.base_url());
    println!("Token endpoint:      {}", settings.linkedin.token_endpoint);
    println!("Userinfo endpoint:   {}", settings.linkedin.userinfo_endpoint);
    println!(
        "Provider timeout:    {}s",
        settings.linkedin.request_timeout_seconds
    );
    let origins = settings.get_cors_origins();
    if origins.is_empty() {
        println!("CORS: no cross-origin callers allowed");
    } else {
        println!("CORS origins: {}", origins.join(", "));
    }
}
