use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    dto::interview_dto::{InterviewListQuery, InterviewResponse, SaveInterviewPayload},
    error::{Error, Result},
    AppState,
};

#[axum::debug_handler]
pub async fn save_interview(
    State(state): State<AppState>,
    Json(payload): Json<SaveInterviewPayload>,
) -> Result<impl IntoResponse> {
    let interview = state.interview_service.save(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(InterviewResponse::from(interview)),
    ))
}

#[axum::debug_handler]
pub async fn list_interviews(
    State(state): State<AppState>,
    Query(query): Query<InterviewListQuery>,
) -> Result<impl IntoResponse> {
    let user_id = query
        .user_id
        .ok_or_else(|| Error::BadRequest("User ID is required".to_string()))?;
    let limit = query.limit.unwrap_or(50);
    let interviews = state.interview_service.list_for_user(user_id, limit).await?;
    let items: Vec<InterviewResponse> = interviews.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[axum::debug_handler]
pub async fn get_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let interview = state.interview_service.get(id).await?;
    Ok(Json(InterviewResponse::from(interview)))
}
