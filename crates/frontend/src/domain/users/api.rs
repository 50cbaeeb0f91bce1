//! REST client for user accounts and assignable roles.

use contracts::domain::users::{User, UserDraft, UserRole};

use crate::shared::api::{self, ApiError};

pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    api::get_json("/users/find-all").await
}

pub async fn fetch_user_roles() -> Result<Vec<UserRole>, ApiError> {
    api::get_json("/user-roles/find-all").await
}

pub async fn create_user(draft: &UserDraft) -> Result<User, ApiError> {
    api::post_json("/users/create", draft).await
}

pub async fn update_user(user: &User) -> Result<(), ApiError> {
    api::put_json(&format!("/users/update/{}", user.id), user).await
}

pub async fn delete_users(ids: &[String]) -> Result<(), ApiError> {
    api::delete_all(ids.iter().map(|id| format!("/users/delete/{}", id))).await
}
