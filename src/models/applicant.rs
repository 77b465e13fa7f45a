use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One candidate application under a job. `interview_id` is a nullable
/// back-reference set after the fact by the linker, not at insert time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Applicant {
    pub id: Uuid,
    pub job_id: Uuid,
    pub name: String,
    pub email: String,
    pub position_applied: Option<String>,
    /// invited | pending | shortlisted | rejected | accepted | completed
    pub status: String,
    pub interview_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
