//! Organization operations.

use tracing::info;

use crate::client::TrelloClient;
use crate::error::{require_id, Result};
use crate::models::{Board, Member, NewOrganization, Organization, OrganizationUpdate};
use crate::resource::{ActionSource, Deletable, Resource};

/// Operations under `organizations`.
pub struct OrganizationApi<'a> {
    client: &'a TrelloClient,
}

impl<'a> OrganizationApi<'a> {
    pub(crate) const fn new(client: &'a TrelloClient) -> Self {
        Self { client }
    }

    /// Create an organization. Fails locally if `displayName` is blank.
    pub async fn create(&self, organization: &NewOrganization) -> Result<Organization> {
        organization.validate()?;
        info!(display_name = %organization.display_name, "Creating organization");
        self.client
            .post("organizations", serde_json::to_value(organization)?)
            .await
    }

    pub async fn update(&self, id: &str, update: &OrganizationUpdate) -> Result<Organization> {
        let id = require_id("organization", id)?;
        self.client
            .put(&format!("organizations/{id}"), serde_json::to_value(update)?)
            .await
    }

    pub async fn boards(&self, id: &str) -> Result<Vec<Board>> {
        let id = require_id("organization", id)?;
        self.client
            .get(&format!("organizations/{id}/boards"), &[])
            .await
    }

    pub async fn members(&self, id: &str) -> Result<Vec<Member>> {
        let id = require_id("organization", id)?;
        self.client
            .get(&format!("organizations/{id}/members"), &[])
            .await
    }
}

impl Resource for OrganizationApi<'_> {
    const BASE_PATH: &'static str = "organizations";
    type Entity = Organization;

    fn client(&self) -> &TrelloClient {
        self.client
    }
}

impl Deletable for OrganizationApi<'_> {}

impl ActionSource for OrganizationApi<'_> {}
