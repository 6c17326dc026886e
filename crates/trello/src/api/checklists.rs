//! Checklist operations.

use serde_json::json;

use crate::client::TrelloClient;
use crate::error::{require_field, require_id, Result};
use crate::models::{Board, Card, CheckItem, Checklist, ChecklistUpdate, NewChecklist};
use crate::resource::{Deletable, Resource};

/// Operations under `checklists`.
pub struct ChecklistApi<'a> {
    client: &'a TrelloClient,
}

impl<'a> ChecklistApi<'a> {
    pub(crate) const fn new(client: &'a TrelloClient) -> Self {
        Self { client }
    }

    /// Create a checklist. Fails locally without an owning board or card.
    pub async fn create(&self, checklist: &NewChecklist) -> Result<Checklist> {
        checklist.validate()?;
        self.client
            .post("checklists", serde_json::to_value(checklist)?)
            .await
    }

    pub async fn update(&self, id: &str, update: &ChecklistUpdate) -> Result<Checklist> {
        let id = require_id("checklist", id)?;
        self.client
            .put(&format!("checklists/{id}"), serde_json::to_value(update)?)
            .await
    }

    pub async fn board(&self, id: &str) -> Result<Board> {
        let id = require_id("checklist", id)?;
        self.client
            .get(&format!("checklists/{id}/board"), &[])
            .await
    }

    pub async fn cards(&self, id: &str) -> Result<Vec<Card>> {
        let id = require_id("checklist", id)?;
        self.client
            .get(&format!("checklists/{id}/cards"), &[])
            .await
    }

    pub async fn check_items(&self, id: &str) -> Result<Vec<CheckItem>> {
        let id = require_id("checklist", id)?;
        self.client
            .get(&format!("checklists/{id}/checkItems"), &[])
            .await
    }

    pub async fn add_check_item(&self, id: &str, name: &str, checked: bool) -> Result<CheckItem> {
        let id = require_id("checklist", id)?;
        require_field("CheckItem", "name", name)?;
        self.client
            .post(
                &format!("checklists/{id}/checkItems"),
                json!({ "name": name, "checked": checked }),
            )
            .await
    }

    pub async fn remove_check_item(&self, id: &str, item_id: &str) -> Result<()> {
        let id = require_id("checklist", id)?;
        let item_id = require_id("check item", item_id)?;
        self.client
            .delete(&format!("checklists/{id}/checkItems/{item_id}"))
            .await
    }
}

impl Resource for ChecklistApi<'_> {
    const BASE_PATH: &'static str = "checklists";
    type Entity = Checklist;

    fn client(&self) -> &TrelloClient {
        self.client
    }
}

impl Deletable for ChecklistApi<'_> {}
