use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    dto::entitlement_dto::{
        CheckLimitPayload, LimitStatusResponse, RecordUsagePayload, RecordUsageResponse,
    },
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/check-interview-limit",
    request_body = CheckLimitPayload,
    responses(
        (status = 200, description = "Limit status for the user", body = Json<LimitStatusResponse>),
        (status = 400, description = "Missing user id")
    )
)]
#[axum::debug_handler]
pub async fn check_interview_limit(
    State(state): State<AppState>,
    Json(payload): Json<CheckLimitPayload>,
) -> Result<impl IntoResponse> {
    let user_id = payload
        .user_id
        .ok_or_else(|| Error::BadRequest("User ID is required".to_string()))?;

    let status = state.entitlement_service.check_limit(user_id).await;
    Ok(Json(LimitStatusResponse {
        can_continue: status.can_continue,
        plan_name: status.plan_name,
        used: status.used,
        limit: status.limit,
        remaining: status.remaining,
        message: status.message,
    }))
}

#[utoipa::path(
    post,
    path = "/api/record-interview-usage",
    request_body = RecordUsagePayload,
    responses(
        (status = 200, description = "Usage recorded", body = Json<RecordUsageResponse>),
        (status = 400, description = "Missing user or interview id"),
        (status = 403, description = "Interview limit reached")
    )
)]
#[axum::debug_handler]
pub async fn record_interview_usage(
    State(state): State<AppState>,
    Json(payload): Json<RecordUsagePayload>,
) -> Result<impl IntoResponse> {
    let user_id = payload
        .user_id
        .ok_or_else(|| Error::BadRequest("User ID is required".to_string()))?;
    let interview_id = payload
        .interview_id
        .ok_or_else(|| Error::BadRequest("Interview ID is required".to_string()))?;

    let outcome = state
        .entitlement_service
        .record_usage(user_id, interview_id)
        .await?;
    Ok(Json(RecordUsageResponse {
        recorded: true,
        plan_name: outcome.plan_name,
        limit: outcome.limit,
        remaining: outcome.remaining,
    }))
}
