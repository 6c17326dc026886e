//! Per-entity API handles.
//!
//! Each handle borrows the [`TrelloClient`](crate::TrelloClient) and maps
//! its methods onto fixed paths below the entity's base path. Single-entity
//! fetch comes from [`Resource`](crate::Resource), deletion from
//! [`Deletable`](crate::Deletable) for the entities that allow it, and
//! activity feeds from [`ActionSource`](crate::ActionSource).

mod actions;
mod boards;
mod cards;
mod checklists;
mod lists;
mod members;
mod organizations;

pub use actions::ActionApi;
pub use boards::BoardApi;
pub use cards::CardApi;
pub use checklists::ChecklistApi;
pub use lists::ListApi;
pub use members::MemberApi;
pub use organizations::OrganizationApi;

#[cfg(test)]
pub(crate) fn test_client() -> (
    std::sync::Arc<crate::client::mock::MockTransport>,
    crate::TrelloClient,
) {
    let mock = std::sync::Arc::new(crate::client::mock::MockTransport::new());
    let client = crate::TrelloClient::with_transport(mock.clone());
    (mock, client)
}
