//! List operations.

use serde_json::{json, Value};
use tracing::info;

use crate::client::TrelloClient;
use crate::error::{require_id, Result};
use crate::models::{Board, Card, CardList, ListUpdate, NewList};
use crate::resource::{hydrate, ActionSource, Resource};

/// Operations under `lists`.
pub struct ListApi<'a> {
    client: &'a TrelloClient,
}

impl<'a> ListApi<'a> {
    pub(crate) const fn new(client: &'a TrelloClient) -> Self {
        Self { client }
    }

    /// Create a list. Fails locally if `name` or `idBoard` is blank.
    pub async fn create(&self, list: &NewList) -> Result<CardList> {
        list.validate()?;
        info!(board_id = %list.id_board, name = %list.name, "Creating list");
        self.client.post("lists", serde_json::to_value(list)?).await
    }

    pub async fn update(&self, id: &str, update: &ListUpdate) -> Result<CardList> {
        let id = require_id("list", id)?;
        self.client
            .put(&format!("lists/{id}"), serde_json::to_value(update)?)
            .await
    }

    pub async fn board(&self, id: &str) -> Result<Board> {
        let id = require_id("list", id)?;
        self.client.get(&format!("lists/{id}/board"), &[]).await
    }

    /// Cards in the list, each fetched individually.
    pub async fn cards(&self, id: &str) -> Result<Vec<Card>> {
        let id = require_id("list", id)?;
        hydrate(&self.client.cards(), &format!("lists/{id}/cards")).await
    }

    /// Archive a list and return the resulting `closed` flag.
    pub async fn close(&self, id: &str) -> Result<bool> {
        let id = require_id("list", id)?;
        let list: CardList = self
            .client
            .put(&format!("lists/{id}/closed"), json!({ "value": true }))
            .await?;
        Ok(list.closed)
    }

    pub async fn archive_all_cards(&self, id: &str) -> Result<()> {
        let id = require_id("list", id)?;
        info!(list_id = %id, "Archiving all cards");
        let _: Value = self
            .client
            .post(&format!("lists/{id}/archiveAllCards"), json!({}))
            .await?;
        Ok(())
    }

    /// Move every card in the list to `list_id` on `board_id`.
    pub async fn move_all_cards(&self, id: &str, board_id: &str, list_id: &str) -> Result<()> {
        let id = require_id("list", id)?;
        let board_id = require_id("board", board_id)?;
        let list_id = require_id("list", list_id)?;
        info!(from = %id, to = %list_id, "Moving all cards");
        let _: Value = self
            .client
            .post(
                &format!("lists/{id}/moveAllCards"),
                json!({ "idBoard": board_id, "idList": list_id }),
            )
            .await?;
        Ok(())
    }
}

impl Resource for ListApi<'_> {
    const BASE_PATH: &'static str = "lists";
    type Entity = CardList;

    fn client(&self) -> &TrelloClient {
        self.client
    }
}

impl ActionSource for ListApi<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_client;
    use crate::client::Method;

    #[tokio::test]
    async fn test_cards_hydrates_through_card_paths() {
        let (mock, client) = test_client();
        mock.push_response(json!([{ "id": "c1" }]));
        mock.push_response(json!({ "id": "c1", "idList": "l1" }));

        let cards = client.lists().cards("l1").await.unwrap();

        assert_eq!(cards.len(), 1);
        let paths: Vec<_> = mock.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["lists/l1/cards", "cards/c1"]);
    }

    #[tokio::test]
    async fn test_move_all_cards_body() {
        let (mock, client) = test_client();

        client
            .lists()
            .move_all_cards("l1", "b2", "l9")
            .await
            .unwrap();

        let request = &mock.requests()[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "lists/l1/moveAllCards");
        assert_eq!(request.body, Some(json!({ "idBoard": "b2", "idList": "l9" })));
    }

    #[tokio::test]
    async fn test_close_returns_closed_flag() {
        let (mock, client) = test_client();
        mock.push_response(json!({ "id": "l1", "closed": true }));

        assert!(client.lists().close("l1").await.unwrap());
        assert_eq!(mock.requests()[0].path, "lists/l1/closed");
    }

    #[tokio::test]
    async fn test_create_without_board_fails_locally() {
        let (mock, client) = test_client();

        assert!(client.lists().create(&NewList::new("Doing", "")).await.is_err());
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_create_posts_list() {
        let (mock, client) = test_client();
        mock.push_response(json!({ "id": "l1", "name": "Done", "idBoard": "b1" }));

        let list = client.lists().create(&NewList::new("Done", "b1")).await.unwrap();

        assert_eq!(list.id, "l1");
        let request = &mock.requests()[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "lists");
        assert_eq!(request.body, Some(json!({ "name": "Done", "idBoard": "b1" })));
    }

    #[tokio::test]
    async fn test_update_puts_set_fields() {
        let (mock, client) = test_client();
        mock.push_response(json!({ "id": "l1", "name": "Shipped" }));

        let update = ListUpdate {
            name: Some("Shipped".into()),
            pos: Some("top".into()),
            ..ListUpdate::default()
        };
        client.lists().update("l1", &update).await.unwrap();

        let request = &mock.requests()[0];
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.path, "lists/l1");
        assert_eq!(request.body, Some(json!({ "name": "Shipped", "pos": "top" })));
    }

    #[tokio::test]
    async fn test_board_is_plain_get() {
        let (mock, client) = test_client();
        mock.push_response(json!({ "id": "b1" }));

        let board = client.lists().board("l1").await.unwrap();

        assert_eq!(board.id, "b1");
        let request = &mock.requests()[0];
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "lists/l1/board");
        assert_eq!(request.body, None);
    }

    #[tokio::test]
    async fn test_archive_all_cards_posts_empty_object() {
        let (mock, client) = test_client();

        client.lists().archive_all_cards("l1").await.unwrap();

        let request = &mock.requests()[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "lists/l1/archiveAllCards");
        assert_eq!(request.body, Some(json!({})));
    }
}
