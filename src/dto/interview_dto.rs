use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::models::interview::Interview;

/// One turn of the interview transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversationMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SaveInterviewPayload {
    pub user_id: Option<Uuid>,
    pub applicant_id: Option<Uuid>,
    pub job_id: Option<Uuid>,
    pub candidate_name: Option<String>,
    pub candidate_email: Option<String>,
    pub position: Option<String>,
    pub status: Option<String>,
    pub duration: Option<i32>,
    pub skills: Option<Vec<String>>,
    pub conversation: Option<Vec<ConversationMessage>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub applicant_id: Option<Uuid>,
    pub job_id: Option<Uuid>,
    pub candidate_name: Option<String>,
    pub candidate_email: Option<String>,
    pub position: Option<String>,
    pub status: String,
    pub duration: Option<i32>,
    pub skills: JsonValue,
    pub conversation: JsonValue,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct InterviewListQuery {
    pub user_id: Option<Uuid>,
    pub limit: Option<i64>,
}

impl From<Interview> for InterviewResponse {
    fn from(value: Interview) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            applicant_id: value.applicant_id,
            job_id: value.job_id,
            candidate_name: value.candidate_name,
            candidate_email: value.candidate_email,
            position: value.position,
            status: value.status,
            duration: value.duration,
            skills: value.skills,
            conversation: value.conversation,
            created_at: value.created_at,
        }
    }
}
