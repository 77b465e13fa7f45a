use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::{
    error::{Error, Result},
    AppState,
};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SubscriptionQuery {
    pub user_id: Option<Uuid>,
}

#[axum::debug_handler]
pub async fn list_plans(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let plans = state.subscription_service.list_plans().await?;
    Ok(Json(plans))
}

#[axum::debug_handler]
pub async fn get_subscription(
    State(state): State<AppState>,
    Query(query): Query<SubscriptionQuery>,
) -> Result<impl IntoResponse> {
    let user_id = query
        .user_id
        .ok_or_else(|| Error::BadRequest("User ID is required".to_string()))?;
    let subscription = state.subscription_service.get_subscription(user_id).await?;
    let plan = state.subscription_service.active_plan_for(user_id).await?;
    Ok(Json(json!({
        "subscription": subscription,
        "plan": plan,
    })))
}
