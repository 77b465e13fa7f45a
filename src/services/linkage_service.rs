use crate::dto::linkage_dto::{LinkageDiagnostics, UnlinkedInterviewSample};
use crate::error::{Error, Result};
use sqlx::PgPool;
use uuid::Uuid;

/// How many legacy rows one bulk repair call may claim.
const BULK_REPAIR_BATCH: i64 = 50;
/// How many unlinked rows the diagnostic samples for inspection.
const DIAGNOSE_SAMPLE: i64 = 100;

fn build_recommendation(owned_jobs: i64, linked: i64, unlinked: i64) -> String {
    if owned_jobs == 0 {
        return "No jobs found for this recruiter. Create a job before repairing interview links."
            .to_string();
    }
    if unlinked == 0 {
        return format!(
            "All {} interview(s) across {} job(s) carry a job reference. No repair needed.",
            linked, owned_jobs
        );
    }
    format!(
        "{} interview(s) lack a job reference ({} linked across {} job(s)). \
         Prefer the single-applicant repair for precision; the bulk repair claims \
         up to {} legacy interviews at once.",
        unlinked, linked, owned_jobs, BULK_REPAIR_BATCH
    )
}

#[derive(Clone)]
pub struct LinkageService {
    pool: PgPool,
}

impl LinkageService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Read-only: partitions interviews into linked-to-owned-jobs vs missing
    /// `job_id`, sampling the latter for inspection.
    pub async fn diagnose(&self, recruiter_id: Uuid) -> Result<LinkageDiagnostics> {
        let job_ids: Vec<Uuid> = sqlx::query_scalar("SELECT id FROM jobs WHERE recruiter_id = $1")
            .bind(recruiter_id)
            .fetch_all(&self.pool)
            .await?;

        let linked: i64 = if job_ids.is_empty() {
            0
        } else {
            sqlx::query_scalar("SELECT COUNT(*) FROM interviews WHERE job_id = ANY($1)")
                .bind(&job_ids)
                .fetch_one(&self.pool)
                .await?
        };

        let unlinked: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM interviews WHERE job_id IS NULL")
                .fetch_one(&self.pool)
                .await?;

        let sample = sqlx::query_as::<_, UnlinkedInterviewSample>(
            "SELECT id, user_id, candidate_name, created_at
             FROM interviews
             WHERE job_id IS NULL
             ORDER BY created_at DESC
             LIMIT $1",
        )
        .bind(DIAGNOSE_SAMPLE)
        .fetch_all(&self.pool)
        .await?;

        Ok(LinkageDiagnostics {
            owned_jobs: job_ids.len() as i64,
            linked_interviews: linked,
            unlinked_interviews: unlinked,
            sample,
            recommendation: build_recommendation(job_ids.len() as i64, linked, unlinked),
        })
    }

    /// Backfills `job_id` on legacy interviews.
    ///
    /// With `applicant_id` this is a precise, idempotent single-row repair:
    /// once the interview is linked the `job_id IS NULL` predicate makes a
    /// second call a no-op. Without it, up to [`BULK_REPAIR_BATCH`] null-job
    /// interviews are claimed unconditionally; the target job must belong to
    /// the calling recruiter, but the claimed interviews themselves are not
    /// ownership-checked.
    pub async fn repair(
        &self,
        recruiter_id: Uuid,
        job_id: Uuid,
        applicant_id: Option<Uuid>,
    ) -> Result<u64> {
        let owner: Option<Uuid> = sqlx::query_scalar("SELECT recruiter_id FROM jobs WHERE id = $1")
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await?;
        match owner {
            None => return Err(Error::NotFound("Job not found".to_string())),
            Some(owner) if owner != recruiter_id => {
                return Err(Error::Forbidden(
                    "Job does not belong to this recruiter".to_string(),
                ))
            }
            Some(_) => {}
        }

        let result = match applicant_id {
            Some(applicant_id) => {
                sqlx::query(
                    "UPDATE interviews SET job_id = $1
                     WHERE applicant_id = $2 AND job_id IS NULL",
                )
                .bind(job_id)
                .bind(applicant_id)
                .execute(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    "UPDATE interviews SET job_id = $1
                     WHERE id IN (
                         SELECT id FROM interviews
                         WHERE job_id IS NULL
                         ORDER BY created_at ASC
                         LIMIT $2
                     )",
                )
                .bind(job_id)
                .bind(BULK_REPAIR_BATCH)
                .execute(&self.pool)
                .await?
            }
        };

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_without_jobs_points_at_job_creation() {
        let text = build_recommendation(0, 0, 7);
        assert!(text.contains("No jobs found"));
    }

    #[test]
    fn recommendation_with_clean_linkage_reports_no_repair() {
        let text = build_recommendation(3, 12, 0);
        assert!(text.contains("No repair needed"));
        assert!(text.contains("12"));
    }

    #[test]
    fn recommendation_with_legacy_rows_mentions_both_paths() {
        let text = build_recommendation(2, 5, 9);
        assert!(text.contains("9 interview(s) lack a job reference"));
        assert!(text.contains("single-applicant repair"));
        assert!(text.contains("50"));
    }
}
