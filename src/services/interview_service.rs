use crate::dto::interview_dto::SaveInterviewPayload;
use crate::error::{Error, Result};
use crate::models::interview::Interview;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

const DEFAULT_STATUS: &str = "completed";

const INTERVIEW_COLUMNS: &str = "id, user_id, applicant_id, job_id, candidate_name, \
     candidate_email, position, status, duration, skills, conversation, created_at";

/// Placeholder address for applicants synthesized from an interview that
/// carried no candidate email.
fn placeholder_email(interview_id: Uuid) -> String {
    format!("candidate+{}@interviewverse.local", interview_id)
}

#[derive(Clone)]
pub struct InterviewService {
    pool: PgPool,
}

impl InterviewService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts the interview, then reconciles the applicant/job linkage.
    ///
    /// Reconciliation is best-effort: a failed step is logged and the save
    /// still succeeds. The returned record is the row as originally inserted;
    /// backfilled references are not re-fetched into the response.
    pub async fn save(&self, payload: SaveInterviewPayload) -> Result<Interview> {
        let user_id = payload
            .user_id
            .ok_or_else(|| Error::BadRequest("User ID is required".to_string()))?;
        let status = payload
            .status
            .unwrap_or_else(|| DEFAULT_STATUS.to_string());
        let skills = serde_json::to_value(payload.skills.unwrap_or_default())?;
        let conversation = serde_json::to_value(payload.conversation.unwrap_or_default())?;

        let interview = sqlx::query_as::<_, Interview>(&format!(
            "INSERT INTO interviews
                 (user_id, applicant_id, job_id, candidate_name, candidate_email,
                  position, status, duration, skills, conversation)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {INTERVIEW_COLUMNS}"
        ))
        .bind(user_id)
        .bind(payload.applicant_id)
        .bind(payload.job_id)
        .bind(&payload.candidate_name)
        .bind(&payload.candidate_email)
        .bind(&payload.position)
        .bind(&status)
        .bind(payload.duration)
        .bind(&skills)
        .bind(&conversation)
        .fetch_one(&self.pool)
        .await?;

        if let Some(applicant_id) = interview.applicant_id {
            if let Err(err) = self.complete_applicant(applicant_id, interview.id).await {
                warn!(
                    interview_id = %interview.id, %applicant_id, error = ?err,
                    "Could not mark applicant completed after interview save"
                );
            }
        } else if let Some(job_id) = interview.job_id {
            match self.synthesize_applicant(&interview, job_id).await {
                Ok(applicant_id) => {
                    if let Err(err) = self.backfill_applicant(interview.id, applicant_id).await {
                        warn!(
                            interview_id = %interview.id, %applicant_id, error = ?err,
                            "Could not backfill applicant reference on interview"
                        );
                    }
                }
                Err(err) => {
                    warn!(
                        interview_id = %interview.id, %job_id, error = ?err,
                        "Could not synthesize applicant for interview"
                    );
                }
            }
        }
        // Neither reference supplied: the row stays unlinked until the
        // repair pass claims it.

        Ok(interview)
    }

    async fn complete_applicant(&self, applicant_id: Uuid, interview_id: Uuid) -> Result<()> {
        sqlx::query(
            "UPDATE job_applicants
             SET status = 'completed', interview_id = $1, updated_at = NOW()
             WHERE id = $2",
        )
        .bind(interview_id)
        .bind(applicant_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Creates an applicant under `job_id` from the interview's own fields.
    /// The job must exist; the foreign key rejects orphaned applicants.
    async fn synthesize_applicant(&self, interview: &Interview, job_id: Uuid) -> Result<Uuid> {
        let name = interview
            .candidate_name
            .clone()
            .unwrap_or_else(|| "Unknown Candidate".to_string());
        let email = interview
            .candidate_email
            .clone()
            .unwrap_or_else(|| placeholder_email(interview.id));

        let applicant_id: Uuid = sqlx::query_scalar(
            "INSERT INTO job_applicants (job_id, name, email, position_applied, status, interview_id)
             VALUES ($1, $2, $3, $4, 'completed', $5)
             RETURNING id",
        )
        .bind(job_id)
        .bind(&name)
        .bind(&email)
        .bind(&interview.position)
        .bind(interview.id)
        .fetch_one(&self.pool)
        .await?;
        Ok(applicant_id)
    }

    async fn backfill_applicant(&self, interview_id: Uuid, applicant_id: Uuid) -> Result<()> {
        sqlx::query("UPDATE interviews SET applicant_id = $1 WHERE id = $2")
            .bind(applicant_id)
            .bind(interview_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn get(&self, id: Uuid) -> Result<Interview> {
        let interview = sqlx::query_as::<_, Interview>(&format!(
            "SELECT {INTERVIEW_COLUMNS} FROM interviews WHERE id = $1"
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(interview)
    }

    pub async fn list_for_user(&self, user_id: Uuid, limit: i64) -> Result<Vec<Interview>> {
        let limit = limit.clamp(1, 200);
        let interviews = sqlx::query_as::<_, Interview>(&format!(
            "SELECT {INTERVIEW_COLUMNS} FROM interviews
             WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2"
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(interviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_email_is_unique_per_interview() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_ne!(placeholder_email(a), placeholder_email(b));
        assert!(placeholder_email(a).ends_with("@interviewverse.local"));
    }
}
