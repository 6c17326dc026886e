use serde::{Deserialize, Serialize};

use crate::error::{require_field, Result};

/// A list (column) on a board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardList {
    /// Unique identifier
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub id_board: Option<String>,
    #[serde(default)]
    pub pos: Option<f64>,
    #[serde(default)]
    pub subscribed: Option<bool>,
}

/// Input for creating a list. `name` and `idBoard` are required.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewList {
    pub name: String,
    pub id_board: String,
    /// `top`, `bottom` or a positive number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
}

impl NewList {
    pub fn new(name: impl Into<String>, id_board: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id_board: id_board.into(),
            pos: None,
        }
    }

    /// Check required fields.
    ///
    /// # Errors
    /// Returns [`crate::TrelloError::MissingField`] for a blank `name` or `idBoard`.
    pub fn validate(&self) -> Result<()> {
        require_field("List", "name", &self.name)?;
        require_field("List", "idBoard", &self.id_board)
    }
}

/// Partial list update; unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed: Option<bool>,
}
