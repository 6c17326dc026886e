//! Action operations.

use serde_json::json;

use crate::client::TrelloClient;
use crate::error::{require_field, require_id, Result};
use crate::models::{Action, Board, Card, CardList, Member};
use crate::resource::{Deletable, Resource};

/// Operations under `actions`.
pub struct ActionApi<'a> {
    client: &'a TrelloClient,
}

impl<'a> ActionApi<'a> {
    pub(crate) const fn new(client: &'a TrelloClient) -> Self {
        Self { client }
    }

    pub async fn board(&self, id: &str) -> Result<Board> {
        let id = require_id("action", id)?;
        self.client.get(&format!("actions/{id}/board"), &[]).await
    }

    pub async fn card(&self, id: &str) -> Result<Card> {
        let id = require_id("action", id)?;
        self.client.get(&format!("actions/{id}/card"), &[]).await
    }

    pub async fn list(&self, id: &str) -> Result<CardList> {
        let id = require_id("action", id)?;
        self.client.get(&format!("actions/{id}/list"), &[]).await
    }

    pub async fn member_creator(&self, id: &str) -> Result<Member> {
        let id = require_id("action", id)?;
        self.client
            .get(&format!("actions/{id}/memberCreator"), &[])
            .await
    }

    /// Edit the text of a comment action.
    pub async fn update_text(&self, id: &str, text: &str) -> Result<Action> {
        let id = require_id("action", id)?;
        require_field("Action", "text", text)?;
        self.client
            .put(&format!("actions/{id}/text"), json!({ "value": text }))
            .await
    }
}

impl Resource for ActionApi<'_> {
    const BASE_PATH: &'static str = "actions";
    type Entity = Action;

    fn client(&self) -> &TrelloClient {
        self.client
    }
}

impl Deletable for ActionApi<'_> {}
