use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Append-only ledger row, one per interview counted against a plan.
/// Never updated; deleted only by an explicit admin reset.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewUsage {
    pub id: Uuid,
    pub user_id: Uuid,
    pub interview_id: Uuid,
    pub created_at: DateTime<Utc>,
}
