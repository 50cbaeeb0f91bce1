//! REST client for travel agent records.

use contracts::domain::contacts::{TravelAgent, TravelAgentDraft};

use crate::shared::api::{self, ApiError};

pub async fn fetch_travel_agents() -> Result<Vec<TravelAgent>, ApiError> {
    api::get_json("/travel-agents/find-all").await
}

pub async fn create_travel_agent(draft: &TravelAgentDraft) -> Result<TravelAgent, ApiError> {
    api::post_json("/travel-agents/create", draft).await
}

pub async fn update_travel_agent(agent: &TravelAgent) -> Result<(), ApiError> {
    api::put_json(&format!("/travel-agents/update/{}", agent.id), agent).await
}

pub async fn delete_travel_agents(ids: &[String]) -> Result<(), ApiError> {
    api::delete_all(ids.iter().map(|id| format!("/travel-agents/delete/{}", id))).await
}
