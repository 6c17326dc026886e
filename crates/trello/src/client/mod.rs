//! Trello REST client.
//!
//! [`TrelloClient`] owns an injected [`Transport`] and exposes typed verb
//! helpers plus one API handle per entity:
//!
//! ```ignore
//! let client = TrelloClient::from_env()?;
//! let me = client.members().current_user().await?;
//! let closed = client.boards().close("5f1c...").await?;
//! ```

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
pub mod mock;
mod transport;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use transport::{ApiRequest, HttpTransport, Method, Transport};

use crate::api::{
    ActionApi, BoardApi, CardApi, ChecklistApi, ListApi, MemberApi, OrganizationApi,
};
use crate::config::TrelloConfig;
use crate::error::Result;

/// Entry point for all Trello operations.
#[derive(Clone)]
pub struct TrelloClient {
    transport: Arc<dyn Transport>,
}

impl TrelloClient {
    /// Create a client backed by [`HttpTransport`].
    ///
    /// # Errors
    /// Returns error if HTTP client cannot be created.
    pub fn new(config: &TrelloConfig) -> Result<Self> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(config)?)))
    }

    /// Create a client from `TRELLO_*` environment variables.
    ///
    /// # Errors
    /// Returns error if configuration is incomplete.
    pub fn from_env() -> Result<Self> {
        Self::new(&TrelloConfig::from_env()?)
    }

    /// Create a client over any transport implementation.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Send a raw request and return the untyped body.
    pub async fn execute(&self, request: ApiRequest) -> Result<Value> {
        self.transport.send(request).await
    }

    /// Send a request and decode the body into `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let value = self.execute(request).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// GET `path` with extra query parameters.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let request = query
            .iter()
            .fold(ApiRequest::new(Method::Get, path), |req, (k, v)| {
                req.query(*k, *v)
            });
        self.send(request).await
    }

    /// POST a JSON body to `path`.
    pub async fn post<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T> {
        self.send(ApiRequest::new(Method::Post, path).body(body))
            .await
    }

    /// PUT a JSON body to `path`.
    pub async fn put<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T> {
        self.send(ApiRequest::new(Method::Put, path).body(body))
            .await
    }

    /// DELETE `path`, discarding the response body.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(ApiRequest::new(Method::Delete, path))
            .await
            .map(|_| ())
    }

    /// Actions API.
    pub const fn actions(&self) -> ActionApi<'_> {
        ActionApi::new(self)
    }

    /// Boards API.
    pub const fn boards(&self) -> BoardApi<'_> {
        BoardApi::new(self)
    }

    /// Cards API.
    pub const fn cards(&self) -> CardApi<'_> {
        CardApi::new(self)
    }

    /// Checklists API.
    pub const fn checklists(&self) -> ChecklistApi<'_> {
        ChecklistApi::new(self)
    }

    /// Lists API.
    pub const fn lists(&self) -> ListApi<'_> {
        ListApi::new(self)
    }

    /// Members API.
    pub const fn members(&self) -> MemberApi<'_> {
        MemberApi::new(self)
    }

    /// Organizations API.
    pub const fn organizations(&self) -> OrganizationApi<'_> {
        OrganizationApi::new(self)
    }
}
