use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::applicant_dto::{
        ApplicantResponse, CreateApplicantPayload, UpdateApplicantStatusPayload,
    },
    error::{Error, Result},
    AppState,
};

#[axum::debug_handler]
pub async fn submit_application(
    State(state): State<AppState>,
    Json(payload): Json<CreateApplicantPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let applicant = state.applicant_service.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApplicantResponse::from(applicant)),
    ))
}

#[axum::debug_handler]
pub async fn list_job_applicants(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let applicants = state.applicant_service.list_for_job(job_id).await?;
    let items: Vec<ApplicantResponse> = applicants.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[axum::debug_handler]
pub async fn update_applicant_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateApplicantStatusPayload>,
) -> Result<impl IntoResponse> {
    let status = payload
        .status
        .ok_or_else(|| Error::BadRequest("Status is required".to_string()))?;
    let applicant = state.applicant_service.update_status(id, &status).await?;
    Ok(Json(ApplicantResponse::from(applicant)))
}
