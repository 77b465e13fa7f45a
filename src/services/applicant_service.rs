use crate::dto::applicant_dto::CreateApplicantPayload;
use crate::error::{Error, Result};
use crate::models::applicant::Applicant;
use sqlx::PgPool;
use uuid::Uuid;

const APPLICANT_COLUMNS: &str = "id, job_id, name, email, position_applied, status, \
     interview_id, created_at, updated_at";

pub const APPLICANT_STATUSES: [&str; 6] = [
    "invited",
    "pending",
    "shortlisted",
    "rejected",
    "accepted",
    "completed",
];

fn validate_status(status: &str) -> Result<()> {
    if APPLICANT_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(Error::BadRequest(format!(
            "Invalid applicant status '{}', expected one of: {}",
            status,
            APPLICANT_STATUSES.join(", ")
        )))
    }
}

#[derive(Clone)]
pub struct ApplicantService {
    pool: PgPool,
}

impl ApplicantService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Pre-onboarding form submission. Rejects unknown jobs up front instead
    /// of relying on the foreign-key error message.
    pub async fn create(&self, payload: CreateApplicantPayload) -> Result<Applicant> {
        let job_exists: Option<Uuid> = sqlx::query_scalar("SELECT id FROM jobs WHERE id = $1")
            .bind(payload.job_id)
            .fetch_optional(&self.pool)
            .await?;
        if job_exists.is_none() {
            return Err(Error::NotFound("Job not found".to_string()));
        }

        let applicant = sqlx::query_as::<_, Applicant>(&format!(
            "INSERT INTO job_applicants (job_id, name, email, position_applied, status)
             VALUES ($1, $2, $3, $4, 'pending')
             RETURNING {APPLICANT_COLUMNS}"
        ))
        .bind(payload.job_id)
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&payload.position_applied)
        .fetch_one(&self.pool)
        .await?;
        Ok(applicant)
    }

    pub async fn get(&self, id: Uuid) -> Result<Applicant> {
        let applicant = sqlx::query_as::<_, Applicant>(&format!(
            "SELECT {APPLICANT_COLUMNS} FROM job_applicants WHERE id = $1"
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(applicant)
    }

    pub async fn list_for_job(&self, job_id: Uuid) -> Result<Vec<Applicant>> {
        let applicants = sqlx::query_as::<_, Applicant>(&format!(
            "SELECT {APPLICANT_COLUMNS} FROM job_applicants
             WHERE job_id = $1 ORDER BY created_at DESC"
        ))
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(applicants)
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<Applicant> {
        validate_status(status)?;
        let applicant = sqlx::query_as::<_, Applicant>(&format!(
            "UPDATE job_applicants SET status = $1, updated_at = NOW()
             WHERE id = $2
             RETURNING {APPLICANT_COLUMNS}"
        ))
        .bind(status)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(applicant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_statuses_pass_validation() {
        for status in APPLICANT_STATUSES {
            assert!(validate_status(status).is_ok());
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(validate_status("hired").is_err());
        assert!(validate_status("PENDING").is_err());
    }
}
