use serde::{Deserialize, Serialize};

use crate::domain::common::Record;

/// Item status that makes "Assigned To" mandatory.
pub const STATUS_IN_USE: &str = "In Use";

/// Inventory item as stored by the backend.
///
/// `warrantExpiraryDate` is the historical wire spelling; the backend keys on
/// it, so it stays renamed explicitly rather than via camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: String,
    pub brand: String,
    #[serde(default)]
    pub model: String,
    pub serial_number: String,
    #[serde(default)]
    pub purchase_date: String,
    #[serde(default, rename = "warrantExpiraryDate")]
    pub warranty_expiry_date: String,
    #[serde(default)]
    pub assigned_to: String,
    #[serde(default)]
    pub assigned_date: String,
    pub status: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemDraft {
    pub name: String,
    pub category: String,
    pub brand: String,
    #[serde(default)]
    pub model: String,
    pub serial_number: String,
    #[serde(default)]
    pub purchase_date: String,
    #[serde(default, rename = "warrantExpiraryDate")]
    pub warranty_expiry_date: String,
    #[serde(default)]
    pub assigned_to: String,
    #[serde(default)]
    pub assigned_date: String,
    pub status: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub image_url: String,
}

impl Default for InventoryItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            brand: String::new(),
            model: String::new(),
            serial_number: String::new(),
            purchase_date: String::new(),
            warranty_expiry_date: String::new(),
            assigned_to: String::new(),
            assigned_date: String::new(),
            // New items start out unassigned and on the shelf.
            status: "Available".to_string(),
            note: String::new(),
            image_url: String::new(),
        }
    }
}

impl InventoryItem {
    pub fn to_draft(&self) -> InventoryItemDraft {
        InventoryItemDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            brand: self.brand.clone(),
            model: self.model.clone(),
            serial_number: self.serial_number.clone(),
            purchase_date: self.purchase_date.clone(),
            warranty_expiry_date: self.warranty_expiry_date.clone(),
            assigned_to: self.assigned_to.clone(),
            assigned_date: self.assigned_date.clone(),
            status: self.status.clone(),
            note: self.note.clone(),
            image_url: self.image_url.clone(),
        }
    }

    pub fn apply_draft(&self, draft: InventoryItemDraft, updated_at: String) -> InventoryItem {
        InventoryItem {
            id: self.id.clone(),
            name: draft.name,
            category: draft.category,
            brand: draft.brand,
            model: draft.model,
            serial_number: draft.serial_number,
            purchase_date: draft.purchase_date,
            warranty_expiry_date: draft.warranty_expiry_date,
            assigned_to: draft.assigned_to,
            assigned_date: draft.assigned_date,
            status: draft.status,
            note: draft.note,
            image_url: draft.image_url,
            created_at: self.created_at.clone(),
            updated_at: Some(updated_at),
        }
    }
}

impl Record for InventoryItem {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Inventory item category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub category_id: String,
    pub category: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCategoryDraft {
    pub category_id: String,
    pub category: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub image_url: String,
}

impl ItemCategory {
    pub fn to_draft(&self) -> ItemCategoryDraft {
        ItemCategoryDraft {
            category_id: self.category_id.clone(),
            category: self.category.clone(),
            note: self.note.clone(),
            image_url: self.image_url.clone(),
        }
    }

    pub fn apply_draft(&self, draft: ItemCategoryDraft, updated_at: String) -> ItemCategory {
        ItemCategory {
            id: self.id.clone(),
            category_id: draft.category_id,
            category: draft.category,
            note: draft.note,
            image_url: draft.image_url,
            created_at: self.created_at.clone(),
            updated_at: Some(updated_at),
        }
    }
}

impl Record for ItemCategory {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warranty_wire_spelling() {
        let item: InventoryItem = serde_json::from_str(
            r#"{"_id":"i1","name":"Projector","category":"AV","brand":"Epson",
                "serialNumber":"SN-1","status":"Available",
                "warrantExpiraryDate":"2026-03-01"}"#,
        )
        .unwrap();
        assert_eq!(item.warranty_expiry_date, "2026-03-01");

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["warrantExpiraryDate"], "2026-03-01");
        assert!(value.get("warrantyExpiryDate").is_none());
    }

    #[test]
    fn test_default_draft_status() {
        assert_eq!(InventoryItemDraft::default().status, "Available");
    }
}
