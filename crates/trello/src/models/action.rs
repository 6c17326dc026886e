use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Member;

/// An entry in an activity feed (comment, card move, board update, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// Unique identifier
    pub id: String,
    /// Member who performed the action
    #[serde(default)]
    pub id_member_creator: Option<String>,
    /// Action type, e.g. `commentCard`, `updateCard`, `createList`
    #[serde(rename = "type", default)]
    pub action_type: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Type-specific payload (card/list/board snapshots, comment text)
    #[serde(default)]
    pub data: Value,
    /// Creator details, when embedded in the response
    #[serde(default)]
    pub member_creator: Option<Member>,
}

impl Action {
    /// Comment text for `commentCard` actions.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.data.get("text").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_comment_action_from_api_json() {
        let action: Action = serde_json::from_value(json!({
            "id": "a1",
            "idMemberCreator": "m1",
            "type": "commentCard",
            "date": "2024-05-02T08:30:00.000Z",
            "data": { "text": "looks good", "card": { "id": "c1" } },
            "memberCreator": { "id": "m1", "username": "ada" }
        }))
        .unwrap();

        assert_eq!(action.action_type.as_deref(), Some("commentCard"));
        assert_eq!(action.text(), Some("looks good"));
        assert_eq!(
            action.member_creator.and_then(|m| m.username).as_deref(),
            Some("ada")
        );
    }

    #[test]
    fn test_non_comment_action_has_no_text() {
        let action: Action = serde_json::from_value(json!({
            "id": "a2",
            "type": "createList",
            "data": { "list": { "id": "l1" } }
        }))
        .unwrap();
        assert!(action.text().is_none());
    }
}
