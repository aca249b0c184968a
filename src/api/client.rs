use std::{fmt, future::Future, sync::Arc, time::Duration};

use bytes::Bytes;
use http::{header::CONTENT_TYPE, Method, Request};
use serde::Serialize;

use crate::{
    api::error::{
        ConfigurationError,
        MockServerError::{self, JsonSerialization, Request as RequestError, Timeout, Transport},
    },
    common::{
        http::{HttpClient, MockServiceHttpClient},
        runtime,
        util::read_env,
    },
};

/// Port a mock service listens on unless told otherwise.
pub const DEFAULT_PORT: u16 = 1234;

/// Environment variable consulted by [MockServiceClient::from_env].
pub const PORT_ENV_VAR: &str = "PACT_MOCK_SERVICE_PORT";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MOCK_SERVICE_HEADER: &str = "x-pact-mock-service";

/// The administrative endpoints of the mock service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AddInteraction,
    RemoveInteractions,
    Verify,
    WritePact,
}

impl Operation {
    pub fn method(&self) -> Method {
        match self {
            Operation::AddInteraction | Operation::WritePact => Method::POST,
            Operation::RemoveInteractions => Method::DELETE,
            Operation::Verify => Method::GET,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Operation::AddInteraction | Operation::RemoveInteractions => "/interactions",
            Operation::Verify => "/interactions/verification",
            Operation::WritePact => "/pact",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::AddInteraction => "add interaction",
            Operation::RemoveInteractions => "remove interactions",
            Operation::Verify => "verify interactions",
            Operation::WritePact => "write pact",
        };
        f.write_str(name)
    }
}

/// How the mock service treats an existing pact file when writing.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PactFileWriteMode {
    Overwrite,
    Update,
    Merge,
}

#[derive(Serialize)]
struct Participant<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct PactDetails<'a> {
    consumer: Participant<'a>,
    provider: Participant<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pactfile_write_mode: Option<PactFileWriteMode>,
}

/// A client for a Pact mock service running on `127.0.0.1`.
///
/// Every operation is available in an async flavour (suffixed with `_async`) and a blocking
/// flavour. The blocking methods start their own runtime. Called from within an async context
/// they fail with [MockServerError::Runtime] without sending anything.
pub struct MockServiceClient {
    consumer: String,
    provider: String,
    port: u16,
    base_url: String,
    request_timeout: Duration,
    pactfile_write_mode: Option<PactFileWriteMode>,
    http_client: Arc<dyn HttpClient + Send + Sync + 'static>,
}

impl MockServiceClient {
    /// Creates a client for the mock service listening on `port` (or [DEFAULT_PORT]).
    ///
    /// Fails with [ConfigurationError::MissingParticipantNames] if either name is empty.
    pub fn new(
        consumer: impl Into<String>,
        provider: impl Into<String>,
        port: Option<u16>,
    ) -> Result<Self, ConfigurationError> {
        let consumer = consumer.into();
        let provider = provider.into();

        if consumer.is_empty() || provider.is_empty() {
            return Err(ConfigurationError::MissingParticipantNames);
        }

        let port = port.unwrap_or(DEFAULT_PORT);

        Ok(Self {
            consumer,
            provider,
            port,
            base_url: format!("http://127.0.0.1:{}", port),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            pactfile_write_mode: None,
            http_client: Arc::new(MockServiceHttpClient::new()),
        })
    }

    /// Like [MockServiceClient::new], but reads the port from the `PACT_MOCK_SERVICE_PORT`
    /// environment variable.
    pub fn from_env(
        consumer: impl Into<String>,
        provider: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let value = read_env(PORT_ENV_VAR, &DEFAULT_PORT.to_string());
        let port = value
            .parse::<u16>()
            .map_err(|_| ConfigurationError::InvalidPort {
                name: PORT_ENV_VAR.to_string(),
                value: value.clone(),
            })?;

        Self::new(consumer, provider, Some(port))
    }

    /// Upper bound for a single round trip to the mock service.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sent along with [MockServiceClient::write_pact].
    pub fn with_pactfile_write_mode(mut self, mode: PactFileWriteMode) -> Self {
        self.pactfile_write_mode = Some(mode);
        self
    }

    /// Replaces the HTTP client used to reach the mock service.
    pub fn with_http_client(mut self, http_client: Arc<dyn HttpClient + Send + Sync>) -> Self {
        self.http_client = http_client;
        self
    }

    pub fn consumer(&self) -> &str {
        &self.consumer
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The URL all requests are sent to, e.g. `http://127.0.0.1:1234`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Registers an interaction with the mock service. Any serializable value is accepted and
    /// sent as is, so it does not have to be an [Interaction](crate::Interaction).
    pub async fn add_interaction_async<I>(&self, interaction: &I) -> Result<(), MockServerError>
    where
        I: Serialize + ?Sized,
    {
        let json = serde_json::to_vec(interaction).map_err(JsonSerialization)?;
        self.do_request(Operation::AddInteraction, Some(Bytes::from(json)))
            .await
    }

    /// Blocking version of [MockServiceClient::add_interaction_async].
    pub fn add_interaction<I>(&self, interaction: &I) -> Result<(), MockServerError>
    where
        I: Serialize + ?Sized,
    {
        block_on(self.add_interaction_async(interaction))
    }

    /// Removes all interactions registered with the mock service.
    pub async fn remove_interactions_async(&self) -> Result<(), MockServerError> {
        self.do_request(Operation::RemoveInteractions, None).await
    }

    /// Blocking version of [MockServiceClient::remove_interactions_async].
    pub fn remove_interactions(&self) -> Result<(), MockServerError> {
        block_on(self.remove_interactions_async())
    }

    /// Asks the mock service whether all registered interactions were received, and nothing
    /// else. The mock service explains mismatches in the response body, which is available via
    /// [MockServerError::body].
    pub async fn verify_async(&self) -> Result<(), MockServerError> {
        self.do_request(Operation::Verify, None).await
    }

    /// Blocking version of [MockServiceClient::verify_async].
    pub fn verify(&self) -> Result<(), MockServerError> {
        block_on(self.verify_async())
    }

    /// Tells the mock service to write the pact file for this consumer/provider pair.
    pub async fn write_pact_async(&self) -> Result<(), MockServerError> {
        let details = PactDetails {
            consumer: Participant {
                name: &self.consumer,
            },
            provider: Participant {
                name: &self.provider,
            },
            pactfile_write_mode: self.pactfile_write_mode,
        };

        let json = serde_json::to_vec(&details).map_err(JsonSerialization)?;
        self.do_request(Operation::WritePact, Some(Bytes::from(json)))
            .await
    }

    /// Blocking version of [MockServiceClient::write_pact_async].
    pub fn write_pact(&self) -> Result<(), MockServerError> {
        block_on(self.write_pact_async())
    }

    /// Verifies and, only if verification succeeded, writes the pact file.
    pub async fn verify_and_write_async(&self) -> Result<(), MockServerError> {
        self.verify_async().await?;
        self.write_pact_async().await
    }

    /// Blocking version of [MockServiceClient::verify_and_write_async].
    pub fn verify_and_write(&self) -> Result<(), MockServerError> {
        block_on(self.verify_and_write_async())
    }

    async fn do_request(
        &self,
        operation: Operation,
        body: Option<Bytes>,
    ) -> Result<(), MockServerError> {
        let url = format!("{}{}", self.base_url, operation.path());

        let mut builder = Request::builder()
            .method(operation.method())
            .uri(&url)
            .header(MOCK_SERVICE_HEADER, "true");

        if body.is_some() {
            builder = builder.header(CONTENT_TYPE, "application/json");
        }

        let request = builder
            .body(body.unwrap_or_default())
            .map_err(|e| RequestError(e.to_string()))?;

        tracing::debug!("Sending {} {} to the mock service", operation.method(), url);

        let response = tokio::time::timeout(self.request_timeout, self.http_client.send(request))
            .await
            .map_err(|_| Timeout(self.request_timeout))?
            .map_err(|e| Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = String::from_utf8_lossy(response.body()).into_owned();
            tracing::warn!(
                "Mock service could not {} (status = {}, body = '{}')",
                operation,
                status,
                body
            );
            return Err(MockServerError::UnexpectedStatus {
                operation,
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!("{} done (status = {})", operation, status);

        Ok(())
    }
}

impl fmt::Debug for MockServiceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockServiceClient")
            .field("consumer", &self.consumer)
            .field("provider", &self.provider)
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .field("pactfile_write_mode", &self.pactfile_write_mode)
            .finish_non_exhaustive()
    }
}

fn block_on<F>(future: F) -> Result<(), MockServerError>
where
    F: Future<Output = Result<(), MockServerError>>,
{
    if tokio::runtime::Handle::try_current().is_ok() {
        return Err(MockServerError::Runtime(
            "blocking API called from within an async runtime".to_string(),
        ));
    }

    runtime::block_on_current_thread(future)
        .map_err(|e| MockServerError::Runtime(e.to_string()))?
}
