//! Typed client for the Trello REST API.
//!
//! Entities (boards, cards, lists, checklists, members, organizations,
//! actions) are plain serde records. Every operation is one or more calls
//! against a fixed path below `https://api.trello.com/1`, authenticated
//! with the application key and member token as query parameters.
//!
//! ## Architecture
//!
//! ```text
//! TrelloClient ──► Arc<dyn Transport> ──► HttpTransport (reqwest)
//!      │                              └─► MockTransport (tests)
//!      ├─ boards()        ─┐
//!      ├─ cards()          │  per-entity handles, sharing
//!      ├─ lists()          ├─ Resource (get / get_many),
//!      ├─ checklists()     │  Deletable (delete) and
//!      ├─ members()        │  ActionSource (actions feed)
//!      ├─ organizations()  │
//!      └─ actions()       ─┘
//! ```
//!
//! Input validation (blank or path-escaping ids, missing required fields,
//! unknown power-ups) happens before any request is sent; remote failures
//! are returned with the status and body the API produced.
//!
//! ## Example
//!
//! ```ignore
//! use trello::{NewBoard, Resource, TrelloClient};
//!
//! let client = TrelloClient::from_env()?;
//!
//! let me = client.members().current_user().await?;
//! let board = client.boards().create(&NewBoard::new("Roadmap")).await?;
//! client.boards().add_power_up(&board.id, "calendar").await?;
//!
//! for card in client.boards().cards(&board.id).await? {
//!     println!("{}", card.name.unwrap_or_default());
//! }
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Every API method can fail remotely

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod powerup;
pub mod resource;

pub use client::{ApiRequest, HttpTransport, Method, Transport, TrelloClient};
pub use config::TrelloConfig;
pub use error::{Result, TrelloError};
pub use models::*;
pub use powerup::PowerUp;
pub use resource::{ActionSource, Deletable, Resource};
