//! Card operations.

use serde_json::json;
use tracing::info;

use crate::client::TrelloClient;
use crate::error::{require_field, require_id, Result};
use crate::models::{Action, Board, Card, CardList, CardUpdate, Checklist, NewCard};
use crate::resource::{ActionSource, Deletable, Resource};

/// Operations under `cards`.
pub struct CardApi<'a> {
    client: &'a TrelloClient,
}

impl<'a> CardApi<'a> {
    pub(crate) const fn new(client: &'a TrelloClient) -> Self {
        Self { client }
    }

    /// Create a card. Fails locally if `idList` is blank.
    pub async fn create(&self, card: &NewCard) -> Result<Card> {
        card.validate()?;
        info!(list_id = %card.id_list, "Creating card");
        self.client.post("cards", serde_json::to_value(card)?).await
    }

    pub async fn update(&self, id: &str, update: &CardUpdate) -> Result<Card> {
        let id = require_id("card", id)?;
        self.client
            .put(&format!("cards/{id}"), serde_json::to_value(update)?)
            .await
    }

    pub async fn board(&self, id: &str) -> Result<Board> {
        let id = require_id("card", id)?;
        self.client.get(&format!("cards/{id}/board"), &[]).await
    }

    pub async fn list(&self, id: &str) -> Result<CardList> {
        let id = require_id("card", id)?;
        self.client.get(&format!("cards/{id}/list"), &[]).await
    }

    pub async fn checklists(&self, id: &str) -> Result<Vec<Checklist>> {
        let id = require_id("card", id)?;
        self.client
            .get(&format!("cards/{id}/checklists"), &[])
            .await
    }

    /// Comment on a card; returns the created `commentCard` action.
    pub async fn add_comment(&self, id: &str, text: &str) -> Result<Action> {
        let id = require_id("card", id)?;
        require_field("Comment", "text", text)?;
        self.client
            .post(
                &format!("cards/{id}/actions/comments"),
                json!({ "text": text }),
            )
            .await
    }

    /// Move a card to another list.
    pub async fn move_to_list(&self, id: &str, list_id: &str) -> Result<Card> {
        let id = require_id("card", id)?;
        let list_id = require_id("list", list_id)?;
        info!(card_id = %id, list_id = %list_id, "Moving card");
        self.client
            .put(&format!("cards/{id}/idList"), json!({ "value": list_id }))
            .await
    }

    /// Archive a card and return the resulting `closed` flag.
    pub async fn close(&self, id: &str) -> Result<bool> {
        let id = require_id("card", id)?;
        let card: Card = self
            .client
            .put(&format!("cards/{id}/closed"), json!({ "value": true }))
            .await?;
        Ok(card.closed)
    }
}

impl Resource for CardApi<'_> {
    const BASE_PATH: &'static str = "cards";
    type Entity = Card;

    fn client(&self) -> &TrelloClient {
        self.client
    }
}

impl Deletable for CardApi<'_> {}

impl ActionSource for CardApi<'_> {}
