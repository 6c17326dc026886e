//! Integration tests for `TrelloClient` over `HttpTransport` using HTTP stubbing.
//!
//! Every test runs against a local `wiremock` server mounted under `/1`,
//! mirroring the public API root.

use serde_json::json;
use trello::{Deletable, NewBoard, Resource, TrelloClient, TrelloConfig, TrelloError};
use wiremock::matchers::{any, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-key";
const TOKEN: &str = "test-token";

fn client_for(server: &MockServer) -> TrelloClient {
    let config = TrelloConfig::new(API_KEY, TOKEN).with_base_url(format!("{}/1", server.uri()));
    TrelloClient::new(&config).expect("client should build")
}

/// Credentials are attached to every request as query parameters.
#[tokio::test]
async fn test_current_user_sends_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/members/me"))
        .and(query_param("key", API_KEY))
        .and(query_param("token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "m1",
            "username": "ada",
            "fullName": "Ada Lovelace",
            "idOrganizations": ["o1"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let me = client
        .members()
        .current_user()
        .await
        .expect("should succeed");

    assert_eq!(me.id, "m1");
    assert_eq!(me.full_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(me.id_organizations, vec!["o1"]);
}

/// 404 maps to `NotFound` carrying the response body.
#[tokio::test]
async fn test_get_board_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/boards/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("The requested resource was not found."))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.boards().get("missing").await;

    assert!(matches!(
        result,
        Err(TrelloError::NotFound(ref body)) if body == "The requested resource was not found."
    ));
}

/// Other non-2xx statuses surface status and body untouched.
#[tokio::test]
async fn test_api_error_is_untranslated() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/1/boards/b1/closed"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.boards().close("b1").await;

    match result {
        Err(TrelloError::Api { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "invalid token");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

/// Closing a board issues exactly one PUT and returns the `closed` field.
#[tokio::test]
async fn test_close_board_single_put() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/1/boards/b1/closed"))
        .and(body_json(json!({ "value": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "b1",
            "name": "Roadmap",
            "closed": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let closed = client.boards().close("b1").await.expect("should succeed");

    assert!(closed);
}

/// Local validation failures never touch the network.
#[tokio::test]
async fn test_local_failures_send_nothing() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);

    for name in ["butler", "Calendar", ""] {
        assert!(matches!(
            client.boards().add_power_up("b1", name).await,
            Err(TrelloError::InvalidPowerUp(_))
        ));
        assert!(matches!(
            client.boards().remove_power_up("b1", name).await,
            Err(TrelloError::InvalidPowerUp(_))
        ));
    }
    assert!(client.boards().close("").await.is_err());
    assert!(client.boards().create(&NewBoard::default()).await.is_err());
}

/// Ids that would leave their path segment are refused before any request.
#[tokio::test]
async fn test_path_escaping_ids_send_nothing() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "closed": true })))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let result = client.boards().close("x/../../cards/c9").await;
    assert!(matches!(result, Err(TrelloError::InvalidArgument(_))));
    assert!(client.cards().get("c1?fields=id").await.is_err());
    assert!(client.checklists().remove_check_item("cl1", "../../boards/b1").await.is_err());
}

/// Organizations are listed by id, then fetched one by one in listing order.
#[tokio::test]
async fn test_current_user_organizations_hydrates_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/members/my/organizations"))
        .and(query_param("fields", "id"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "id": "o2" }, { "id": "o1" }])),
        )
        .expect(1)
        .mount(&server)
        .await;

    for (id, name) in [("o1", "Alpha"), ("o2", "Beta")] {
        Mock::given(method("GET"))
            .and(path(format!("/1/organizations/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": id,
                "displayName": name
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    let orgs = client
        .members()
        .current_user_organizations()
        .await
        .expect("should succeed");

    let ids: Vec<_> = orgs.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["o2", "o1"]);
    assert_eq!(orgs[0].display_name.as_deref(), Some("Beta"));
}

/// Power-up add/remove hit the board's powerUps collection.
#[tokio::test]
async fn test_power_up_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1/boards/b1/powerUps"))
        .and(body_json(json!({ "value": "voting" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["voting"])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/1/boards/b1/powerUps/voting"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .boards()
        .add_power_up("b1", "voting")
        .await
        .expect("add should succeed");
    client
        .boards()
        .remove_power_up("b1", "voting")
        .await
        .expect("remove should succeed");
}

/// An empty success body is accepted for operations that ignore the response.
#[tokio::test]
async fn test_delete_card_with_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/1/cards/c1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.cards().delete("c1").await.expect("should succeed");
}

/// Board cards are listed by id and hydrated through the cards collection.
#[tokio::test]
async fn test_board_cards_hydration() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/boards/b1/cards"))
        .and(query_param("fields", "id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "c1" }])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/1/cards/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "c1",
            "name": "Write docs",
            "idBoard": "b1",
            "idList": "l1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cards = client.boards().cards("b1").await.expect("should succeed");

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name.as_deref(), Some("Write docs"));
}
