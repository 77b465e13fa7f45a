use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::linkage_dto::{DiagnoseQuery, RepairLinkagePayload, RepairResult},
    error::{Error, Result},
    AppState,
};

#[axum::debug_handler]
pub async fn diagnose_linkage(
    State(state): State<AppState>,
    Query(query): Query<DiagnoseQuery>,
) -> Result<impl IntoResponse> {
    let recruiter_id = query
        .recruiter_id
        .ok_or_else(|| Error::BadRequest("Recruiter ID is required".to_string()))?;
    let diagnostics = state.linkage_service.diagnose(recruiter_id).await?;
    Ok(Json(diagnostics))
}

#[axum::debug_handler]
pub async fn repair_linkage(
    State(state): State<AppState>,
    Json(payload): Json<RepairLinkagePayload>,
) -> Result<impl IntoResponse> {
    let recruiter_id = payload
        .recruiter_id
        .ok_or_else(|| Error::BadRequest("Recruiter ID is required".to_string()))?;
    let job_id = payload
        .job_id
        .ok_or_else(|| Error::BadRequest("Job ID is required".to_string()))?;

    let updated_count = state
        .linkage_service
        .repair(recruiter_id, job_id, payload.applicant_id)
        .await?;
    Ok(Json(RepairResult { updated_count }))
}
