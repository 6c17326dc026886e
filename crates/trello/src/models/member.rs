use serde::{Deserialize, Serialize};

/// Trello member (user account).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Unique identifier
    pub id: String,
    /// Login handle
    #[serde(default)]
    pub username: Option<String>,
    /// Display name
    #[serde(default)]
    pub full_name: Option<String>,
    /// Avatar initials
    #[serde(default)]
    pub initials: Option<String>,
    #[serde(default)]
    pub avatar_hash: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    /// Profile URL
    #[serde(default)]
    pub url: Option<String>,
    /// Email address (only visible for the token's own member)
    #[serde(default)]
    pub email: Option<String>,
    /// `normal`, `admin`, `observer`, ...
    #[serde(default)]
    pub member_type: Option<String>,
    #[serde(default)]
    pub confirmed: bool,
    /// Boards the member belongs to
    #[serde(default)]
    pub id_boards: Vec<String>,
    /// Organizations the member belongs to
    #[serde(default)]
    pub id_organizations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_member_from_api_json() {
        let member: Member = serde_json::from_value(json!({
            "id": "m1",
            "username": "ada",
            "fullName": "Ada Lovelace",
            "initials": "AL",
            "confirmed": true,
            "idBoards": ["b1", "b2"],
            "idOrganizations": ["o1"]
        }))
        .unwrap();

        assert_eq!(member.full_name.as_deref(), Some("Ada Lovelace"));
        assert!(member.confirmed);
        assert_eq!(member.id_boards, vec!["b1", "b2"]);
        assert_eq!(member.id_organizations, vec!["o1"]);
        assert!(member.email.is_none());
    }
}
