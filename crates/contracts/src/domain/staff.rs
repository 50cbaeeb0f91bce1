use serde::{Deserialize, Serialize};

use crate::domain::common::Record;

/// Staff member as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    #[serde(rename = "_id")]
    pub id: String,
    pub staff_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub designation: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub joined_date: String,
    #[serde(default)]
    pub resigned_date: String,
    pub status: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub profile_image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffDraft {
    pub staff_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub designation: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub joined_date: String,
    #[serde(default)]
    pub resigned_date: String,
    pub status: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub profile_image_url: String,
}

impl Default for StaffDraft {
    fn default() -> Self {
        Self {
            staff_id: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            designation: String::new(),
            department: String::new(),
            joined_date: String::new(),
            resigned_date: String::new(),
            status: "Active".to_string(),
            note: String::new(),
            profile_image_url: String::new(),
        }
    }
}

impl Staff {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn to_draft(&self) -> StaffDraft {
        StaffDraft {
            staff_id: self.staff_id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            designation: self.designation.clone(),
            department: self.department.clone(),
            joined_date: self.joined_date.clone(),
            resigned_date: self.resigned_date.clone(),
            status: self.status.clone(),
            note: self.note.clone(),
            profile_image_url: self.profile_image_url.clone(),
        }
    }

    pub fn apply_draft(&self, draft: StaffDraft, updated_at: String) -> Staff {
        Staff {
            id: self.id.clone(),
            staff_id: draft.staff_id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            phone: draft.phone,
            designation: draft.designation,
            department: draft.department,
            joined_date: draft.joined_date,
            resigned_date: draft.resigned_date,
            status: draft.status,
            note: draft.note,
            profile_image_url: draft.profile_image_url,
            created_at: self.created_at.clone(),
            updated_at: Some(updated_at),
        }
    }
}

impl Record for Staff {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_trims_missing_parts() {
        let staff: Staff = serde_json::from_str(
            r#"{"_id":"s1","staffId":"ST-001","firstName":"Nimal","lastName":"",
                "email":"n@x.lk","phone":"1","designation":"Chef","status":"Active"}"#,
        )
        .unwrap();
        assert_eq!(staff.full_name(), "Nimal");
    }
}
