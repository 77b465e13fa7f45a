use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DiagnoseQuery {
    pub recruiter_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RepairLinkagePayload {
    pub recruiter_id: Option<Uuid>,
    pub job_id: Option<Uuid>,
    pub applicant_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UnlinkedInterviewSample {
    pub id: Uuid,
    pub user_id: Uuid,
    pub candidate_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkageDiagnostics {
    pub owned_jobs: i64,
    pub linked_interviews: i64,
    pub unlinked_interviews: i64,
    pub sample: Vec<UnlinkedInterviewSample>,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairResult {
    pub updated_count: u64,
}
