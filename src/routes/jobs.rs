use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::job_dto::{CreateJobPayload, JobListQuery, JobResponse, UpdateJobPayload},
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/jobs",
    request_body = CreateJobPayload,
    responses(
        (status = 201, description = "Job created", body = Json<JobResponse>),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Json(payload): Json<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state.job_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(JobResponse::from(job))))
}

#[utoipa::path(
    get,
    path = "/api/jobs",
    params(
        ("recruiterId" = Option<Uuid>, Query, description = "Filter by owning recruiter"),
        ("status" = Option<String>, Query, description = "Filter by status")
    ),
    responses(
        (status = 200, description = "List of jobs")
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<impl IntoResponse> {
    let jobs = state.job_service.list(query).await?;
    let items: Vec<JobResponse> = jobs.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.get_by_id(id).await?;
    Ok(Json(JobResponse::from(job)))
}

#[axum::debug_handler]
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state.job_service.update(id, payload).await?;
    Ok(Json(JobResponse::from(job)))
}

#[axum::debug_handler]
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.job_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
