pub use client::{MockServiceClient, Operation, PactFileWriteMode, DEFAULT_PORT, PORT_ENV_VAR};
pub use error::{ConfigurationError, MockServerError};
pub use interaction::Interaction;

mod client;
mod error;
mod interaction;
