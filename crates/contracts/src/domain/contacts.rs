use serde::{Deserialize, Serialize};

use crate::domain::common::Record;

/// Travel agent contact as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelAgent {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub registration_number: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub designation: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub alternate_phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Editable fields of a travel agent, used as the draft for both create
/// (POST body) and edit (merged back into the record before PUT).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelAgentDraft {
    pub name: String,
    #[serde(default)]
    pub registration_number: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub designation: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub alternate_phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub logo_url: String,
}

impl TravelAgent {
    pub fn to_draft(&self) -> TravelAgentDraft {
        TravelAgentDraft {
            name: self.name.clone(),
            registration_number: self.registration_number.clone(),
            description: self.description.clone(),
            owner_name: self.owner_name.clone(),
            designation: self.designation.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            alternate_phone: self.alternate_phone.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            province: self.province.clone(),
            country: self.country.clone(),
            postal_code: self.postal_code.clone(),
            website: self.website.clone(),
            facebook: self.facebook.clone(),
            instagram: self.instagram.clone(),
            status: self.status.clone(),
            logo_url: self.logo_url.clone(),
        }
    }

    /// Merge an edited draft back into this record, stamping `updatedAt`.
    /// Identifier and `createdAt` are preserved.
    pub fn apply_draft(&self, draft: TravelAgentDraft, updated_at: String) -> TravelAgent {
        TravelAgent {
            id: self.id.clone(),
            name: draft.name,
            registration_number: draft.registration_number,
            description: draft.description,
            owner_name: draft.owner_name,
            designation: draft.designation,
            email: draft.email,
            phone: draft.phone,
            alternate_phone: draft.alternate_phone,
            address: draft.address,
            city: draft.city,
            province: draft.province,
            country: draft.country,
            postal_code: draft.postal_code,
            website: draft.website,
            facebook: draft.facebook,
            instagram: draft.instagram,
            status: draft.status,
            logo_url: draft.logo_url,
            created_at: self.created_at.clone(),
            updated_at: Some(updated_at),
        }
    }
}

impl Record for TravelAgent {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let json = r#"{
            "_id": "abc123",
            "name": "Island Tours",
            "ownerName": "Jane Perera",
            "email": "jane@islandtours.lk",
            "phone": "+94 77 123 4567",
            "postalCode": "10100",
            "logoUrl": "https://cdn.example.com/logo.png",
            "createdAt": "2025-07-02T08:30:00.000Z"
        }"#;
        let agent: TravelAgent = serde_json::from_str(json).unwrap();
        assert_eq!(agent.id, "abc123");
        assert_eq!(agent.owner_name, "Jane Perera");
        assert_eq!(agent.postal_code, "10100");
        assert_eq!(agent.city, "");
        assert_eq!(agent.updated_at, None);
    }

    #[test]
    fn test_apply_draft_preserves_identity() {
        let agent: TravelAgent = serde_json::from_str(
            r#"{"_id":"x1","name":"A","email":"a@b.c","phone":"1","createdAt":"2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        let mut draft = agent.to_draft();
        draft.name = "B".to_string();
        let updated = agent.apply_draft(draft, "2025-02-01T00:00:00Z".to_string());
        assert_eq!(updated.id, "x1");
        assert_eq!(updated.name, "B");
        assert_eq!(updated.created_at.as_deref(), Some("2025-01-01T00:00:00Z"));
        assert_eq!(updated.updated_at.as_deref(), Some("2025-02-01T00:00:00Z"));
    }

    #[test]
    fn test_draft_serializes_without_id() {
        let draft = TravelAgentDraft {
            name: "A".into(),
            email: "a@b.c".into(),
            phone: "1".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("_id").is_none());
        assert!(value.get("createdAt").is_none());
        assert_eq!(value["ownerName"], "");
    }
}
