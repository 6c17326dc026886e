//! Trello entity records and create/update inputs.
//!
//! Records mirror the JSON objects returned by the API. Only `id` is
//! mandatory so that partial responses (`fields=...`) still decode.

mod action;
mod board;
mod card;
mod checklist;
mod list;
mod member;
mod organization;

pub use action::Action;
pub use board::{Board, BoardUpdate, NewBoard};
pub use card::{Card, CardUpdate, NewCard};
pub use checklist::{CheckItem, CheckItemState, Checklist, ChecklistUpdate, NewChecklist};
pub use list::{CardList, ListUpdate, NewList};
pub use member::Member;
pub use organization::{NewOrganization, Organization, OrganizationUpdate};
