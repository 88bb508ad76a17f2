//! Testing utilities for the OAuth bridge
//!
//! - [`fixtures`] - Pre-built settings, configs and app builders
//! - [`mock`] - Fake exchangers and callback data
//! - [`assertions`] - Assertion helpers for redirects and JSON error bodies
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dobbie_oauth::testing::{MockExchanger, TestFixtures};
//!
//! let exchanger = MockExchanger::succeeding(TestFixtures::exchange_result());
//! ```

pub mod assertions;
pub mod fixtures;
pub mod mock;

pub use assertions::*;
pub use fixtures::TestFixtures;
pub use mock::{MockExchanger, MockOAuthCallback};

/// Common test constants
pub mod constants {
    pub const TEST_CLIENT_ID: &str = "test-client-id";
    pub const TEST_CLIENT_SECRET: &str = "test-client-secret";
    pub const TEST_CODE: &str = "ABC123";
    pub const TEST_STATE: &str = "xyz";
    pub const TEST_REDIRECT_URI: &str = "https://app/cb";
    pub const TEST_ACCESS_TOKEN: &str = "tok1";
    pub const TEST_MEMBER_ID: &str = "999";
}
