use std::time::Duration;

use thiserror::Error;

use crate::api::client::Operation;

/// Raised while constructing a [MockServiceClient](crate::MockServiceClient). Nothing has been
/// sent to the mock service at that point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Please provide the names of the provider and consumer for this Pact.")]
    MissingParticipantNames,
    #[error("cannot parse environment variable {name} to a port number (value = '{value}')")]
    InvalidPort { name: String, value: String },
}

/// Raised when a request to the mock service fails, either because the mock service responded
/// with a non-success status or because no response could be obtained.
#[derive(Error, Debug)]
pub enum MockServerError {
    #[error("{operation} failed. Expected a 2xx response status but was {status} (response body = '{body}')")]
    UnexpectedStatus {
        operation: Operation,
        status: u16,
        body: String,
    },
    #[error("cannot reach the mock service: {0}")]
    Transport(String),
    #[error("no response from the mock service within {0:?}")]
    Timeout(Duration),
    #[error("cannot serialize JSON: {0}")]
    JsonSerialization(#[from] serde_json::Error),
    #[error("cannot build request: {0}")]
    Request(String),
    #[error("cannot start runtime: {0}")]
    Runtime(String),
}

impl MockServerError {
    /// The HTTP status code returned by the mock service, if it responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            MockServerError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The response body returned by the mock service, if it responded at all.
    pub fn body(&self) -> Option<&str> {
        match self {
            MockServerError::UnexpectedStatus { body, .. } => Some(body),
            _ => None,
        }
    }
}
