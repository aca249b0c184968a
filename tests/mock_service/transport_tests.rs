use std::time::Duration;

use httpmock::prelude::*;
use pact_mock_client::{MockServerError, MockServiceClient};

use crate::client_for;

/// Nothing can ever listen on port 0, so connecting to it always fails.
const UNREACHABLE_PORT: u16 = 0;

#[tokio::test]
async fn unreachable_mock_service_is_a_transport_error() {
    // Arrange
    let client =
        MockServiceClient::new("consumer", "provider", Some(UNREACHABLE_PORT)).unwrap();

    // Act
    let err = client.verify_async().await.unwrap_err();

    // Assert
    assert!(matches!(err, MockServerError::Transport(_)), "{}", err);
    assert!(err.to_string().starts_with("cannot reach the mock service"));
    assert_eq!(None, err.status());
}

#[tokio::test]
async fn unreachable_mock_service_stops_verify_and_write() {
    let client =
        MockServiceClient::new("consumer", "provider", Some(UNREACHABLE_PORT)).unwrap();

    let err = client.verify_and_write_async().await.unwrap_err();

    assert!(matches!(err, MockServerError::Transport(_)), "{}", err);
}

#[tokio::test]
async fn slow_mock_service_is_a_timeout() {
    // Arrange
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/interactions/verification");
            then.status(200).delay(Duration::from_millis(500));
        })
        .await;
    let client = client_for(&server).with_request_timeout(Duration::from_millis(50));

    // Act
    let err = client.verify_async().await.unwrap_err();

    // Assert
    assert!(matches!(err, MockServerError::Timeout(_)));
}
