use axum::{
    extract::{Query, State},
    response::IntoResponse,
};

use crate::{
    dto::summary_dto::RecruiterQuery,
    error::{Error, Result},
    AppState,
};

#[axum::debug_handler]
pub async fn jobs_summary(
    State(state): State<AppState>,
    Query(query): Query<RecruiterQuery>,
) -> Result<impl IntoResponse> {
    let recruiter_id = query
        .recruiter_id
        .ok_or_else(|| Error::BadRequest("Recruiter ID is required".to_string()))?;
    Ok(state.summary_service.jobs_summary(recruiter_id).await)
}

#[axum::debug_handler]
pub async fn activity_log(
    State(state): State<AppState>,
    Query(query): Query<RecruiterQuery>,
) -> Result<impl IntoResponse> {
    let recruiter_id = query
        .recruiter_id
        .ok_or_else(|| Error::BadRequest("Recruiter ID is required".to_string()))?;
    Ok(state.summary_service.activity_log(recruiter_id).await)
}
