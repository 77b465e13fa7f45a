use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::applicant::Applicant;

/// Pre-onboarding form submission. The job must already exist; the linker
/// never fabricates applicants under a missing job.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateApplicantPayload {
    pub job_id: Uuid,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub position_applied: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateApplicantStatusPayload {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantResponse {
    pub id: Uuid,
    pub job_id: Uuid,
    pub name: String,
    pub email: String,
    pub position_applied: Option<String>,
    pub status: String,
    pub interview_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Applicant> for ApplicantResponse {
    fn from(value: Applicant) -> Self {
        Self {
            id: value.id,
            job_id: value.job_id,
            name: value.name,
            email: value.email,
            position_applied: value.position_applied,
            status: value.status,
            interview_id: value.interview_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
