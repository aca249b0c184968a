//! `pact_mock_client` talks to a locally running Pact mock service during consumer-driven
//! contract tests. It can
//!
//! * register the interactions a consumer expects from its provider,
//! * remove all registered interactions,
//! * ask the mock service to verify that every registered interaction was received, and
//! * ask the mock service to write the resulting pact file.
//!
//! The mock service itself is not part of this crate. It is expected to listen on
//! `127.0.0.1`, by default on port `1234`.
//!
//! # Getting Started
//! ```rust,no_run
//! use http::Method;
//! use pact_mock_client::{Interaction, MockServiceClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mock_service = MockServiceClient::new("frontend", "user-service", Some(1234))?;
//!
//! let interaction = Interaction::new()
//!     .upon_receiving("a request for all users")
//!     .with_request(Method::GET, "/users")
//!     .will_respond_with(200);
//!
//! mock_service.add_interaction_async(&interaction).await?;
//!
//! // Exercise the consumer against http://127.0.0.1:1234 here.
//!
//! mock_service.verify_and_write_async().await?;
//! mock_service.remove_interactions_async().await?;
//! # Ok(())
//! # }
//! ```
//! Each `*_async` method has a blocking counterpart without the suffix (e.g.
//! [MockServiceClient::verify]) for tests that do not run inside an async runtime.
//!
//! # Errors
//! Constructing a client fails with a [ConfigurationError] if the consumer or provider name is
//! missing. Every request fails with a [MockServerError] if the mock service answers with a
//! non-success status, cannot be reached or does not answer within the request timeout
//! (see [MockServiceClient::with_request_timeout]). [MockServiceClient::verify_and_write] only
//! writes the pact file if verification succeeded.
//!
//! # Debugging
//! `pact_mock_client` logs against the `tracing` crate, which forwards to `log` if no
//! subscriber is installed. For example, with the `env_logger` backend, set `RUST_LOG` to
//! `pact_mock_client=debug` and call `env_logger::try_init()` in your test.

mod api;
mod common;

pub use api::{
    ConfigurationError, Interaction, MockServerError, MockServiceClient, Operation,
    PactFileWriteMode, DEFAULT_PORT, PORT_ENV_VAR,
};
pub use common::http::{Error as HttpClientError, HttpClient, MockServiceHttpClient};

pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{Interaction, MockServerError, MockServiceClient};
}
