use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    dto::entitlement_dto::{ResetUsagePayload, ResetUsageResponse},
    error::{Error, Result},
    AppState,
};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UsageQuery {
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserListQuery {
    pub limit: Option<i64>,
}

#[axum::debug_handler]
pub async fn analytics(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(state.summary_service.admin_analytics().await)
}

#[axum::debug_handler]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UserListQuery>,
) -> Result<impl IntoResponse> {
    let users = state
        .summary_service
        .list_users(query.limit.unwrap_or(100))
        .await?;
    Ok(Json(users))
}

#[axum::debug_handler]
pub async fn list_usage(
    State(state): State<AppState>,
    Query(query): Query<UsageQuery>,
) -> Result<impl IntoResponse> {
    let user_id = query
        .user_id
        .ok_or_else(|| Error::BadRequest("User ID is required".to_string()))?;
    let rows = state.entitlement_service.list_usage(user_id).await?;
    Ok(Json(rows))
}

/// The only sanctioned path that shrinks the usage ledger.
#[axum::debug_handler]
pub async fn reset_usage(
    State(state): State<AppState>,
    Json(payload): Json<ResetUsagePayload>,
) -> Result<impl IntoResponse> {
    let user_id = payload
        .user_id
        .ok_or_else(|| Error::BadRequest("User ID is required".to_string()))?;
    let deleted = state.entitlement_service.reset_usage(user_id).await?;
    Ok(Json(ResetUsageResponse { deleted }))
}
