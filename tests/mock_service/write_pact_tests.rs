use httpmock::prelude::*;
use pact_mock_client::PactFileWriteMode;
use serde_json::json;

use crate::client_for;

#[tokio::test]
async fn writing_is_successful() {
    // Arrange
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/pact")
                .header("x-pact-mock-service", "true")
                .json_body(json!({
                    "consumer": { "name": "consumer" },
                    "provider": { "name": "provider" }
                }));
            then.status(200);
        })
        .await;
    let client = client_for(&server);

    // Act
    let result = client.write_pact_async().await;

    // Assert
    mock.assert_async().await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn writing_fails() {
    // Arrange
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/pact");
            then.status(500);
        })
        .await;
    let client = client_for(&server);

    // Act
    let result = client.write_pact_async().await;

    // Assert
    mock.assert_async().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn write_mode_is_sent_when_configured() {
    // Arrange
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/pact").json_body(json!({
                "consumer": { "name": "consumer" },
                "provider": { "name": "provider" },
                "pactfile_write_mode": "update"
            }));
            then.status(200);
        })
        .await;
    let client = client_for(&server).with_pactfile_write_mode(PactFileWriteMode::Update);

    // Act
    client.write_pact_async().await.unwrap();

    // Assert
    mock.assert_async().await;
}
