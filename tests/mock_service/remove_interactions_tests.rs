use httpmock::prelude::*;

use crate::client_for;

#[tokio::test]
async fn interactions_removed_successfully() {
    // Arrange
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path("/interactions")
                .header("x-pact-mock-service", "true");
            then.status(200);
        })
        .await;
    let client = client_for(&server);

    // Act
    let result = client.remove_interactions_async().await;

    // Assert
    mock.assert_async().await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn interactions_fail_to_be_removed() {
    // Arrange
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/interactions");
            then.status(500);
        })
        .await;
    let client = client_for(&server);

    // Act
    let result = client.remove_interactions_async().await;

    // Assert
    mock.assert_async().await;
    assert_eq!(Some(500), result.unwrap_err().status());
}
