//! REST client for staff records.

use contracts::domain::staff::{Staff, StaffDraft};

use crate::shared::api::{self, ApiError};

pub async fn fetch_staff() -> Result<Vec<Staff>, ApiError> {
    api::get_json("/staff/find-all").await
}

pub async fn create_staff(draft: &StaffDraft) -> Result<Staff, ApiError> {
    api::post_json("/staff/create", draft).await
}

pub async fn update_staff(staff: &Staff) -> Result<(), ApiError> {
    api::put_json(&format!("/staff/update/{}", staff.id), staff).await
}

pub async fn delete_staff(ids: &[String]) -> Result<(), ApiError> {
    api::delete_all(ids.iter().map(|id| format!("/staff/delete/{}", id))).await
}
