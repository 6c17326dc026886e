use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{require_field, Result};

/// Trello board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Unique identifier
    pub id: String,
    /// Board title
    #[serde(default)]
    pub name: Option<String>,
    /// Board description (markdown)
    #[serde(default)]
    pub desc: Option<String>,
    /// Whether the board is closed (archived)
    #[serde(default)]
    pub closed: bool,
    /// Owning organization, if any
    #[serde(default)]
    pub id_organization: Option<String>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub short_url: Option<String>,
    /// Board preferences (background, permission level, voting, ...)
    #[serde(default)]
    pub prefs: Option<Value>,
    /// Label colour to label name
    #[serde(default)]
    pub label_names: HashMap<String, String>,
    #[serde(default)]
    pub date_last_activity: Option<DateTime<Utc>>,
}

/// Input for creating a board. `name` is required.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBoard {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Organization to create the board in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_organization: Option<String>,
    /// Create the default To Do / Doing / Done lists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_lists: Option<bool>,
    /// `private`, `org` or `public`
    #[serde(
        rename = "prefs_permissionLevel",
        skip_serializing_if = "Option::is_none"
    )]
    pub permission_level: Option<String>,
}

impl NewBoard {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Check required fields.
    ///
    /// # Errors
    /// Returns [`crate::TrelloError::MissingField`] when `name` is blank.
    pub fn validate(&self) -> Result<()> {
        require_field("Board", "name", &self.name)
    }
}

/// Partial board update; unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_organization: Option<String>,
}
