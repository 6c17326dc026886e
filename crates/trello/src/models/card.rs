use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{require_field, Result};

/// Trello card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique identifier
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Card description (markdown)
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub id_board: Option<String>,
    #[serde(default)]
    pub id_list: Option<String>,
    /// Assigned members
    #[serde(default)]
    pub id_members: Vec<String>,
    #[serde(default)]
    pub id_checklists: Vec<String>,
    #[serde(default)]
    pub id_labels: Vec<String>,
    /// Position within the list
    #[serde(default)]
    pub pos: Option<f64>,
    #[serde(default)]
    pub due: Option<DateTime<Utc>>,
    #[serde(default)]
    pub due_complete: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub short_url: Option<String>,
    #[serde(default)]
    pub date_last_activity: Option<DateTime<Utc>>,
}

/// Input for creating a card. `idList` is required.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    pub id_list: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// `top`, `bottom` or a positive number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub id_members: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub id_labels: Vec<String>,
}

impl NewCard {
    pub fn new(id_list: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id_list: id_list.into(),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Check required fields.
    ///
    /// # Errors
    /// Returns [`crate::TrelloError::MissingField`] when `idList` is blank.
    pub fn validate(&self) -> Result<()> {
        require_field("Card", "idList", &self.id_list)
    }
}

/// Partial card update; unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_list: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_board: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_complete: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_card_from_api_json() {
        let card: Card = serde_json::from_value(json!({
            "id": "c1",
            "name": "Write docs",
            "idBoard": "b1",
            "idList": "l1",
            "idMembers": ["m1"],
            "pos": 16384.5,
            "due": null,
            "dueComplete": false
        }))
        .unwrap();

        assert_eq!(card.id_list.as_deref(), Some("l1"));
        assert_eq!(card.id_members, vec!["m1"]);
        assert_eq!(card.pos, Some(16384.5));
        assert!(card.due.is_none());
    }

    #[test]
    fn test_new_card_requires_list() {
        let err = NewCard::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "Card requires `idList`");
        assert!(NewCard::new("l1", "Write docs").validate().is_ok());
    }

    #[test]
    fn test_new_card_omits_empty_collections() {
        let body = serde_json::to_value(NewCard::new("l1", "Write docs")).unwrap();
        assert_eq!(body, json!({ "idList": "l1", "name": "Write docs" }));
    }
}
