use serde::{Deserialize, Serialize};

use crate::domain::common::Record;

/// User account with a role assignment, linked to a staff record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    /// Identifier of the linked staff record.
    #[serde(default)]
    pub staff: String,
    pub username: String,
    /// Only sent when set by a create/edit form; never echoed back in lists.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,
    pub role: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    #[serde(default)]
    pub staff: String,
    pub username: String,
    #[serde(default)]
    pub password: String,
    pub role: String,
    pub is_active: bool,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            staff: String::new(),
            username: String::new(),
            password: String::new(),
            role: String::new(),
            is_active: true,
        }
    }
}

impl User {
    pub fn to_draft(&self) -> UserDraft {
        UserDraft {
            staff: self.staff.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            role: self.role.clone(),
            is_active: self.is_active,
        }
    }

    pub fn apply_draft(&self, draft: UserDraft, updated_at: String) -> User {
        User {
            id: self.id.clone(),
            staff: draft.staff,
            username: draft.username,
            password: draft.password,
            role: draft.role,
            is_active: draft.is_active,
            created_at: self.created_at.clone(),
            updated_at: Some(updated_at),
        }
    }
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Assignable role, managed server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_password_not_serialized() {
        let user: User = serde_json::from_str(
            r#"{"_id":"u1","staff":"s1","username":"nimal","role":"Admin","isActive":true}"#,
        )
        .unwrap();
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["isActive"], true);
    }
}
