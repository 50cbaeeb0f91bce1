//! REST client for inventory category records.

use contracts::domain::inventory::{ItemCategory, ItemCategoryDraft};

use crate::shared::api::{self, ApiError};

pub async fn fetch_item_categories() -> Result<Vec<ItemCategory>, ApiError> {
    api::get_json("/item-categories/find-all").await
}

pub async fn create_item_category(draft: &ItemCategoryDraft) -> Result<ItemCategory, ApiError> {
    api::post_json("/item-categories/create", draft).await
}

pub async fn update_item_category(category: &ItemCategory) -> Result<(), ApiError> {
    api::put_json(&format!("/item-categories/update/{}", category.id), category).await
}

pub async fn delete_item_categories(ids: &[String]) -> Result<(), ApiError> {
    api::delete_all(ids.iter().map(|id| format!("/item-categories/delete/{}", id))).await
}
