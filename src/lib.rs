#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

/// Version of the dobbie-oauth application
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod handlers;
pub mod models;
pub mod oauth;
pub mod settings;
pub mod utils;
pub mod validation;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

/// Re-export commonly used items
pub use handlers::{configure_services, health, linkedin_callback, linkedin_exchange};
pub use models::{TokenExchangeRequest, TokenExchangeResult};
pub use oauth::{AppRedirect, CodeExchange, LinkedInClientConfig, TokenExchanger};
pub use settings::DobbieSettings;
