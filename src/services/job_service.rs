use crate::dto::job_dto::{CreateJobPayload, JobListQuery, UpdateJobPayload};
use crate::error::{Error, Result};
use crate::models::job::Job;
use sqlx::PgPool;
use uuid::Uuid;

const JOB_COLUMNS: &str =
    "id, recruiter_id, title, company, location, description, status, created_at, updated_at";

pub const JOB_STATUSES: [&str; 3] = ["open", "closed", "on-hold"];

fn validate_status(status: &str) -> Result<()> {
    if JOB_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(Error::BadRequest(format!(
            "Invalid job status '{}', expected one of: {}",
            status,
            JOB_STATUSES.join(", ")
        )))
    }
}

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateJobPayload) -> Result<Job> {
        let status = payload.status.unwrap_or_else(|| "open".to_string());
        validate_status(&status)?;

        let job = sqlx::query_as::<_, Job>(&format!(
            "INSERT INTO jobs (recruiter_id, title, company, location, description, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {JOB_COLUMNS}"
        ))
        .bind(payload.recruiter_id)
        .bind(&payload.title)
        .bind(&payload.company)
        .bind(&payload.location)
        .bind(&payload.description)
        .bind(&status)
        .fetch_one(&self.pool)
        .await?;
        Ok(job)
    }

    pub async fn update(&self, id: Uuid, payload: UpdateJobPayload) -> Result<Job> {
        if let Some(ref status) = payload.status {
            validate_status(status)?;
        }

        let job = sqlx::query_as::<_, Job>(&format!(
            "UPDATE jobs
             SET title = COALESCE($2, title),
                 company = COALESCE($3, company),
                 location = COALESCE($4, location),
                 description = COALESCE($5, description),
                 status = COALESCE($6, status),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {JOB_COLUMNS}"
        ))
        .bind(id)
        .bind(&payload.title)
        .bind(&payload.company)
        .bind(&payload.location)
        .bind(&payload.description)
        .bind(&payload.status)
        .fetch_one(&self.pool)
        .await?;
        Ok(job)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Job> {
        let job = sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(job)
    }

    pub async fn list(&self, query: JobListQuery) -> Result<Vec<Job>> {
        let jobs = sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs
             WHERE ($1::uuid IS NULL OR recruiter_id = $1)
               AND ($2::text IS NULL OR status = $2)
             ORDER BY created_at DESC"
        ))
        .bind(query.recruiter_id)
        .bind(&query.status)
        .fetch_all(&self.pool)
        .await?;
        Ok(jobs)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Job not found".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_pass_validation() {
        for status in JOB_STATUSES {
            assert!(validate_status(status).is_ok());
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(validate_status("archived").is_err());
        assert!(validate_status("").is_err());
    }
}
