//! REST client for inventory item records.

use contracts::domain::inventory::{InventoryItem, InventoryItemDraft};

use crate::shared::api::{self, ApiError};

pub async fn fetch_inventory_items() -> Result<Vec<InventoryItem>, ApiError> {
    api::get_json("/inventory/find-all").await
}

pub async fn create_inventory_item(draft: &InventoryItemDraft) -> Result<InventoryItem, ApiError> {
    api::post_json("/inventory/create", draft).await
}

pub async fn update_inventory_item(item: &InventoryItem) -> Result<(), ApiError> {
    api::put_json(&format!("/inventory/update/{}", item.id), item).await
}

pub async fn delete_inventory_items(ids: &[String]) -> Result<(), ApiError> {
    api::delete_all(ids.iter().map(|id| format!("/inventory/delete/{}", id))).await
}
