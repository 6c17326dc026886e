//! Member operations.

use crate::client::TrelloClient;
use crate::error::{require_id, Result};
use crate::models::{Board, Card, Member, Organization};
use crate::resource::{hydrate, ActionSource, Resource};

/// Operations under `members`.
pub struct MemberApi<'a> {
    client: &'a TrelloClient,
}

impl<'a> MemberApi<'a> {
    pub(crate) const fn new(client: &'a TrelloClient) -> Self {
        Self { client }
    }

    /// Member owning the configured token.
    pub async fn current_user(&self) -> Result<Member> {
        self.client.get("members/me", &[]).await
    }

    /// Organizations of the current member.
    ///
    /// Lists organization ids first, then fetches each organization in the
    /// order the listing returned them.
    pub async fn current_user_organizations(&self) -> Result<Vec<Organization>> {
        hydrate(&self.client.organizations(), "members/my/organizations").await
    }

    /// Boards of a member (`me` for the current member).
    pub async fn boards(&self, id: &str) -> Result<Vec<Board>> {
        let id = require_id("member", id)?;
        self.client.get(&format!("members/{id}/boards"), &[]).await
    }

    /// Cards assigned to a member.
    pub async fn cards(&self, id: &str) -> Result<Vec<Card>> {
        let id = require_id("member", id)?;
        self.client.get(&format!("members/{id}/cards"), &[]).await
    }

    pub async fn organizations(&self, id: &str) -> Result<Vec<Organization>> {
        let id = require_id("member", id)?;
        self.client
            .get(&format!("members/{id}/organizations"), &[])
            .await
    }
}

impl Resource for MemberApi<'_> {
    const BASE_PATH: &'static str = "members";
    type Entity = Member;

    fn client(&self) -> &TrelloClient {
        self.client
    }
}

impl ActionSource for MemberApi<'_> {}
