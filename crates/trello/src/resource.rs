//! Behaviour shared by every entity API handle.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::client::TrelloClient;
use crate::error::{require_id, Result};
use crate::models::Action;

/// An entity collection living under a fixed base path.
#[async_trait]
pub trait Resource: Sync {
    /// Collection path segment, e.g. `boards`.
    const BASE_PATH: &'static str;

    /// Record type returned for a single entity.
    type Entity: DeserializeOwned + Send;

    /// Client used to issue requests.
    fn client(&self) -> &TrelloClient;

    /// Fetch one entity by id.
    async fn get(&self, id: &str) -> Result<Self::Entity> {
        let id = require_id(Self::BASE_PATH, id)?;
        self.client()
            .get(&format!("{}/{id}", Self::BASE_PATH), &[])
            .await
    }

    /// Fetch entities one at a time, preserving the order of `ids`.
    async fn get_many(&self, ids: &[String]) -> Result<Vec<Self::Entity>> {
        let mut entities = Vec::with_capacity(ids.len());
        for id in ids {
            entities.push(self.get(id).await?);
        }
        Ok(entities)
    }
}

/// Entities the API lets callers delete outright. Members and lists are
/// only ever closed, so they do not implement this.
#[async_trait]
pub trait Deletable: Resource {
    /// Delete one entity by id.
    async fn delete(&self, id: &str) -> Result<()> {
        let id = require_id(Self::BASE_PATH, id)?;
        self.client()
            .delete(&format!("{}/{id}", Self::BASE_PATH))
            .await
    }
}

/// Entities that expose an `actions` feed.
#[async_trait]
pub trait ActionSource: Resource {
    /// List actions on an entity, optionally filtered by action type
    /// (e.g. `commentCard,updateCard:idList`).
    async fn actions(&self, id: &str, filter: Option<&str>) -> Result<Vec<Action>> {
        let id = require_id(Self::BASE_PATH, id)?;
        let path = format!("{}/{id}/actions", Self::BASE_PATH);
        match filter {
            Some(filter) => self.client().get(&path, &[("filter", filter)]).await,
            None => self.client().get(&path, &[]).await,
        }
    }
}

#[derive(Deserialize)]
struct IdOnly {
    id: String,
}

/// List ids at `path`, then fetch each entity through `resource`.
pub(crate) async fn hydrate<R: Resource>(resource: &R, path: &str) -> Result<Vec<R::Entity>> {
    let listed: Vec<IdOnly> = resource.client().get(path, &[("fields", "id")]).await?;
    let ids: Vec<String> = listed.into_iter().map(|entry| entry.id).collect();
    debug!(path = %path, count = ids.len(), "Hydrating entities by id");
    resource.get_many(&ids).await
}
