use serde::{Deserialize, Serialize};

use crate::error::{Result, TrelloError};

/// A checklist attached to a card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    /// Unique identifier
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id_board: Option<String>,
    #[serde(default)]
    pub id_card: Option<String>,
    #[serde(default)]
    pub pos: Option<f64>,
    #[serde(default)]
    pub check_items: Vec<CheckItem>,
}

impl Checklist {
    /// Number of completed items.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.check_items
            .iter()
            .filter(|item| item.state == CheckItemState::Complete)
            .count()
    }
}

/// Completion state of a check item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckItemState {
    Complete,
    #[default]
    Incomplete,
}

/// Single entry of a checklist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckItem {
    /// Unique identifier
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub state: CheckItemState,
    #[serde(default)]
    pub id_checklist: Option<String>,
    #[serde(default)]
    pub pos: Option<f64>,
}

/// Input for creating a checklist on a board or card.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChecklist {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_board: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_card: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
}

impl NewChecklist {
    /// Checklist owned by a board.
    pub fn for_board(id_board: impl Into<String>) -> Self {
        Self {
            id_board: Some(id_board.into()),
            ..Self::default()
        }
    }

    /// Checklist attached to a card.
    pub fn for_card(id_card: impl Into<String>) -> Self {
        Self {
            id_card: Some(id_card.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Check that the checklist has an owner.
    ///
    /// # Errors
    /// Returns [`TrelloError::MissingField`] when neither `idBoard` nor `idCard` is set.
    pub fn validate(&self) -> Result<()> {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        if present(&self.id_board) || present(&self.id_card) {
            Ok(())
        } else {
            Err(TrelloError::MissingField {
                entity: "Checklist",
                field: "idBoard or idCard",
            })
        }
    }
}

/// Partial checklist update; unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_checklist_counts_completed_items() {
        let checklist: Checklist = serde_json::from_value(json!({
            "id": "cl1",
            "name": "Release",
            "idCard": "c1",
            "checkItems": [
                { "id": "i1", "name": "tag", "state": "complete" },
                { "id": "i2", "name": "publish", "state": "incomplete" },
                { "id": "i3", "name": "announce" }
            ]
        }))
        .unwrap();

        assert_eq!(checklist.check_items.len(), 3);
        assert_eq!(checklist.completed(), 1);
        assert_eq!(checklist.check_items[2].state, CheckItemState::Incomplete);
    }

    #[test]
    fn test_new_checklist_needs_owner() {
        assert!(NewChecklist::default().validate().is_err());
        assert!(NewChecklist::for_board(" ").validate().is_err());
        assert!(NewChecklist::for_board("b1").validate().is_ok());
        assert!(NewChecklist::for_card("c1").with_name("QA").validate().is_ok());
    }
}
