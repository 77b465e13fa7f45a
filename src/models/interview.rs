use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use uuid::Uuid;

/// A conducted interview. Inserted once at completion; the only later
/// mutation is linkage backfill of `applicant_id` / `job_id`.
///
/// Rows with `job_id` and `applicant_id` both null predate the linkage
/// reconciliation and are the target of the repair pass.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Interview {
    pub id: Uuid,
    pub user_id: Uuid,
    pub applicant_id: Option<Uuid>,
    pub job_id: Option<Uuid>,
    pub candidate_name: Option<String>,
    pub candidate_email: Option<String>,
    pub position: Option<String>,
    /// completed | submitted | pending
    pub status: String,
    pub duration: Option<i32>,
    /// Ordered JSON array of skill strings.
    pub skills: JsonValue,
    /// Ordered JSON array of message objects ({role, content}).
    pub conversation: JsonValue,
    pub created_at: DateTime<Utc>,
}
