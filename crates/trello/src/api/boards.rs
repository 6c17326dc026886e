//! Board operations.

use serde_json::{json, Value};
use tracing::info;

use crate::client::{ApiRequest, Method, TrelloClient};
use crate::error::{require_id, Result};
use crate::models::{
    Board, BoardUpdate, Card, CardList, Checklist, Member, NewBoard, NewChecklist, NewList,
    Organization,
};
use crate::powerup::PowerUp;
use crate::resource::{hydrate, ActionSource, Deletable, Resource};

/// Operations under `boards`.
pub struct BoardApi<'a> {
    client: &'a TrelloClient,
}

impl<'a> BoardApi<'a> {
    pub(crate) const fn new(client: &'a TrelloClient) -> Self {
        Self { client }
    }

    /// Create a board. Fails locally if `name` is blank.
    pub async fn create(&self, board: &NewBoard) -> Result<Board> {
        board.validate()?;
        info!(name = %board.name, "Creating board");
        self.client.post("boards", serde_json::to_value(board)?).await
    }

    /// Update board fields.
    pub async fn update(&self, id: &str, update: &BoardUpdate) -> Result<Board> {
        let id = require_id("board", id)?;
        self.client
            .put(&format!("boards/{id}"), serde_json::to_value(update)?)
            .await
    }

    /// Close (archive) a board and return the resulting `closed` flag.
    pub async fn close(&self, id: &str) -> Result<bool> {
        let id = require_id("board", id)?;
        info!(board_id = %id, "Closing board");
        let board: Board = self
            .client
            .put(&format!("boards/{id}/closed"), json!({ "value": true }))
            .await?;
        Ok(board.closed)
    }

    /// Enable a power-up on a board.
    ///
    /// Only `voting`, `cardAging`, `calendar` and `recap` are accepted; any
    /// other name fails before a request is made.
    pub async fn add_power_up(&self, id: &str, name: &str) -> Result<()> {
        let id = require_id("board", id)?;
        let power_up: PowerUp = name.parse()?;
        info!(board_id = %id, power_up = %power_up, "Enabling power-up");
        let _: Value = self
            .client
            .post(
                &format!("boards/{id}/powerUps"),
                json!({ "value": power_up.as_str() }),
            )
            .await?;
        Ok(())
    }

    /// Disable a power-up on a board. Same name rules as [`Self::add_power_up`].
    pub async fn remove_power_up(&self, id: &str, name: &str) -> Result<()> {
        let id = require_id("board", id)?;
        let power_up: PowerUp = name.parse()?;
        info!(board_id = %id, power_up = %power_up, "Disabling power-up");
        self.client
            .delete(&format!("boards/{id}/powerUps/{power_up}"))
            .await
    }

    /// Create a list on this board.
    pub async fn add_list(&self, id: &str, name: &str) -> Result<CardList> {
        let id = require_id("board", id)?;
        self.client.lists().create(&NewList::new(name, id)).await
    }

    /// Create a checklist owned by this board.
    pub async fn add_checklist(&self, id: &str, name: &str) -> Result<Checklist> {
        let id = require_id("board", id)?;
        self.client
            .checklists()
            .create(&NewChecklist::for_board(id).with_name(name))
            .await
    }

    /// All cards on the board, each fetched individually.
    pub async fn cards(&self, id: &str) -> Result<Vec<Card>> {
        let id = require_id("board", id)?;
        hydrate(&self.client.cards(), &format!("boards/{id}/cards")).await
    }

    /// All lists on the board, each fetched individually.
    pub async fn lists(&self, id: &str) -> Result<Vec<CardList>> {
        let id = require_id("board", id)?;
        hydrate(&self.client.lists(), &format!("boards/{id}/lists")).await
    }

    pub async fn checklists(&self, id: &str) -> Result<Vec<Checklist>> {
        let id = require_id("board", id)?;
        self.client
            .get(&format!("boards/{id}/checklists"), &[])
            .await
    }

    pub async fn members(&self, id: &str) -> Result<Vec<Member>> {
        let id = require_id("board", id)?;
        self.client.get(&format!("boards/{id}/members"), &[]).await
    }

    /// Organization owning `board`, or `None` for personal boards.
    pub async fn organization(&self, board: &Board) -> Result<Option<Organization>> {
        match board.id_organization.as_deref() {
            Some(org_id) if !org_id.trim().is_empty() => {
                self.client.organizations().get(org_id).await.map(Some)
            }
            _ => Ok(None),
        }
    }

    pub async fn mark_as_viewed(&self, id: &str) -> Result<()> {
        let id = require_id("board", id)?;
        self.client
            .execute(ApiRequest::new(
                Method::Post,
                format!("boards/{id}/markAsViewed"),
            ))
            .await
            .map(|_| ())
    }
}

impl Resource for BoardApi<'_> {
    const BASE_PATH: &'static str = "boards";
    type Entity = Board;

    fn client(&self) -> &TrelloClient {
        self.client
    }
}

impl Deletable for BoardApi<'_> {}

impl ActionSource for BoardApi<'_> {}
