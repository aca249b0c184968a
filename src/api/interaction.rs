use std::collections::BTreeMap;

use http::Method;
use serde::Serialize;
use serde_json::Value;

/// One expected request/response exchange, in the shape the mock service accepts on
/// `POST /interactions`.
///
/// ```
/// use pact_mock_client::Interaction;
/// use http::Method;
///
/// let interaction = Interaction::new()
///     .given("a user with ID 1 exists")
///     .upon_receiving("a request for user 1")
///     .with_request(Method::GET, "/users/1")
///     .will_respond_with(200)
///     .with_response_body(serde_json::json!({ "id": 1 }));
///
/// assert_eq!("a request for user 1", interaction.description());
/// ```
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Interaction {
    #[serde(rename = "providerState", skip_serializing_if = "Option::is_none")]
    provider_state: Option<String>,
    description: String,
    request: ExpectedRequest,
    response: ExpectedResponse,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct ExpectedRequest {
    method: String,
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<Value>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct ExpectedResponse {
    status: u16,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<Value>,
}

impl Interaction {
    /// An interaction expecting `GET /` and answering with status 200.
    pub fn new() -> Self {
        Self {
            provider_state: None,
            description: String::new(),
            request: ExpectedRequest {
                method: Method::GET.as_str().to_lowercase(),
                path: "/".to_string(),
                query: None,
                headers: BTreeMap::new(),
                body: None,
            },
            response: ExpectedResponse {
                status: 200,
                headers: BTreeMap::new(),
                body: None,
            },
        }
    }

    /// The state the provider has to be in for this interaction to make sense.
    pub fn given(mut self, provider_state: &str) -> Self {
        self.provider_state = Some(provider_state.to_string());
        self
    }

    pub fn upon_receiving(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Methods are sent lower case.
    pub fn with_request(mut self, method: Method, path: &str) -> Self {
        self.request.method = method.as_str().to_lowercase();
        self.request.path = path.to_string();
        self
    }

    /// The raw query string, without the leading `?`.
    pub fn with_request_query(mut self, query: &str) -> Self {
        self.request.query = Some(query.to_string());
        self
    }

    pub fn with_request_header(mut self, name: &str, value: &str) -> Self {
        self.request
            .headers
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_request_body(mut self, body: Value) -> Self {
        self.request.body = Some(body);
        self
    }

    pub fn will_respond_with(mut self, status: u16) -> Self {
        self.response.status = status;
        self
    }

    pub fn with_response_header(mut self, name: &str, value: &str) -> Self {
        self.response
            .headers
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_response_body(mut self, body: Value) -> Self {
        self.response.body = Some(body);
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn provider_state(&self) -> Option<&str> {
        self.provider_state.as_deref()
    }
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new()
    }
}
