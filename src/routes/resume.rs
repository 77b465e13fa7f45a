use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{dto::resume_dto::AnalyzeResumePayload, error::Result, AppState};

#[axum::debug_handler]
pub async fn analyze_resume(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeResumePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let analysis = state
        .resume_service
        .analyze(&payload.resume_text, &payload.job_description)
        .await;
    Ok(Json(analysis))
}
