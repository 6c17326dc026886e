//! HTTP transport abstraction and the reqwest implementation.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::TrelloConfig;
use crate::error::{Result, TrelloError};

/// HTTP verb of an [`ApiRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single call against the API, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP verb.
    pub method: Method,
    /// Path below the API root, e.g. `boards/abc/cards`.
    pub path: String,
    /// Extra query parameters (credentials are added by the transport).
    pub query: Vec<(String, String)>,
    /// JSON body for POST/PUT.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Create a request with no query parameters and no body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Append a query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Performs requests and returns the decoded JSON body.
///
/// [`HttpTransport`] talks to the real API; tests inject a mock to observe
/// exactly which requests an operation issues.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request. A successful empty body is returned as `Value::Null`.
    async fn send(&self, request: ApiRequest) -> Result<Value>;
}

/// reqwest-backed transport that authenticates with key/token query params.
#[derive(Clone)]
pub struct HttpTransport {
    /// HTTP client.
    client: Client,
    /// API root without trailing slash.
    base_url: String,
    /// Application key.
    api_key: String,
    /// Member token.
    token: String,
}

impl HttpTransport {
    /// Create a transport from configuration.
    ///
    /// # Errors
    /// Returns error if HTTP client cannot be created.
    pub fn new(config: &TrelloConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, config))
    }

    /// Create a transport with a custom `reqwest::Client`.
    pub fn with_client(client: Client, config: &TrelloConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            token: config.token.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Handle API response, parsing JSON or error.
    async fn handle_response(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            serde_json::from_str(&text).map_err(|e| {
                warn!(error = %e, body = %text, "Failed to parse response");
                TrelloError::Serialization(e)
            })
        } else if status == StatusCode::NOT_FOUND {
            Err(TrelloError::NotFound(text))
        } else {
            Err(TrelloError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let url = self.url(&request.path);
        debug!(method = %request.method, path = %request.path, "Trello request");

        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        let mut builder = builder
            .query(&[("key", self.api_key.as_str()), ("token", self.token.as_str())])
            .query(&request.query);

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        Self::handle_response(response).await
    }
}
