use std::collections::HashMap;

use chrono::{DateTime, Datelike, Utc};
use sqlx::PgPool;
use tracing::{error, warn};
use uuid::Uuid;

use crate::dto::outcome::ApiOutcome;
use crate::dto::summary_dto::{
    ActivityEvent, ActivityLogData, AdminAnalytics, JobSummary, JobsSummaryData, SummaryStats,
};
use crate::error::Result;
use crate::models::applicant::Applicant;
use crate::models::interview::Interview;
use crate::models::job::Job;
use crate::models::user::User;

const ACTIVITY_FETCH_LIMIT: i64 = 50;

#[derive(Clone)]
pub struct SummaryService {
    pool: PgPool,
}

impl SummaryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Recruiter dashboard summary, recomputed on every read.
    ///
    /// Tenant isolation holds on every path: zero owned jobs yields empty
    /// lists, and a datastore fault degrades to the same empty shape rather
    /// than leaking another tenant's rows or breaking the dashboard.
    pub async fn jobs_summary(&self, recruiter_id: Uuid) -> ApiOutcome<JobsSummaryData> {
        match self.jobs_summary_strict(recruiter_id).await {
            Ok(data) => ApiOutcome::Ok(data),
            Err(err) => {
                error!(%recruiter_id, error = ?err, "Jobs summary failed, degrading to empty");
                ApiOutcome::degraded(
                    "Summary temporarily unavailable".to_string(),
                    JobsSummaryData::default(),
                )
            }
        }
    }

    async fn jobs_summary_strict(&self, recruiter_id: Uuid) -> Result<JobsSummaryData> {
        let jobs = sqlx::query_as::<_, Job>(
            "SELECT id, recruiter_id, title, company, location, description, status,
                    created_at, updated_at
             FROM jobs WHERE recruiter_id = $1 ORDER BY created_at DESC",
        )
        .bind(recruiter_id)
        .fetch_all(&self.pool)
        .await?;

        if jobs.is_empty() {
            return Ok(JobsSummaryData::default());
        }

        let job_ids: Vec<Uuid> = jobs.iter().map(|j| j.id).collect();

        let applicants = sqlx::query_as::<_, Applicant>(
            "SELECT id, job_id, name, email, position_applied, status, interview_id,
                    created_at, updated_at
             FROM job_applicants WHERE job_id = ANY($1) ORDER BY created_at DESC",
        )
        .bind(&job_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut interviews = sqlx::query_as::<_, Interview>(
            "SELECT id, user_id, applicant_id, job_id, candidate_name, candidate_email,
                    position, status, duration, skills, conversation, created_at
             FROM interviews WHERE job_id = ANY($1) ORDER BY created_at DESC",
        )
        .bind(&job_ids)
        .fetch_all(&self.pool)
        .await?;

        // Legacy interviews without job_id stay out of the counts unless the
        // applicant back-reference attaches them to one of this recruiter's
        // jobs. Best-effort: a failure here drops the fallback, not the page.
        let applicant_ids: Vec<Uuid> = applicants.iter().map(|a| a.id).collect();
        if !applicant_ids.is_empty() {
            match sqlx::query_as::<_, Interview>(
                "SELECT id, user_id, applicant_id, job_id, candidate_name, candidate_email,
                        position, status, duration, skills, conversation, created_at
                 FROM interviews WHERE job_id IS NULL AND applicant_id = ANY($1)",
            )
            .bind(&applicant_ids)
            .fetch_all(&self.pool)
            .await
            {
                Ok(legacy) => interviews.extend(legacy),
                Err(err) => {
                    warn!(%recruiter_id, error = ?err, "Legacy interview fallback query failed")
                }
            }
        }

        Ok(build_summary(jobs, applicants, interviews, Utc::now()))
    }

    /// Recent applications and interviews for the recruiter's jobs, merged
    /// into one reverse-chronological feed.
    pub async fn activity_log(&self, recruiter_id: Uuid) -> ApiOutcome<ActivityLogData> {
        match self.activity_log_strict(recruiter_id).await {
            Ok(data) => ApiOutcome::Ok(data),
            Err(err) => {
                error!(%recruiter_id, error = ?err, "Activity log failed, degrading to empty");
                ApiOutcome::degraded(
                    "Activity log temporarily unavailable".to_string(),
                    ActivityLogData::default(),
                )
            }
        }
    }

    async fn activity_log_strict(&self, recruiter_id: Uuid) -> Result<ActivityLogData> {
        let job_ids: Vec<Uuid> = sqlx::query_scalar("SELECT id FROM jobs WHERE recruiter_id = $1")
            .bind(recruiter_id)
            .fetch_all(&self.pool)
            .await?;

        if job_ids.is_empty() {
            return Ok(ActivityLogData::default());
        }

        let applicants = sqlx::query_as::<_, Applicant>(
            "SELECT id, job_id, name, email, position_applied, status, interview_id,
                    created_at, updated_at
             FROM job_applicants WHERE job_id = ANY($1)
             ORDER BY created_at DESC LIMIT $2",
        )
        .bind(&job_ids)
        .bind(ACTIVITY_FETCH_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        let interviews = sqlx::query_as::<_, Interview>(
            "SELECT id, user_id, applicant_id, job_id, candidate_name, candidate_email,
                    position, status, duration, skills, conversation, created_at
             FROM interviews WHERE job_id = ANY($1)
             ORDER BY created_at DESC LIMIT $2",
        )
        .bind(&job_ids)
        .bind(ACTIVITY_FETCH_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(ActivityLogData {
            events: merge_events(&applicants, &interviews),
        })
    }

    pub async fn admin_analytics(&self) -> ApiOutcome<AdminAnalytics> {
        match self.admin_analytics_strict().await {
            Ok(data) => ApiOutcome::Ok(data),
            Err(err) => {
                error!(error = ?err, "Admin analytics failed, degrading to zeroes");
                ApiOutcome::degraded(
                    "Analytics temporarily unavailable".to_string(),
                    AdminAnalytics::default(),
                )
            }
        }
    }

    async fn admin_analytics_strict(&self) -> Result<AdminAnalytics> {
        let total_users = self.count("SELECT COUNT(*) FROM users").await?;
        let total_jobs = self.count("SELECT COUNT(*) FROM jobs").await?;
        let total_applicants = self.count("SELECT COUNT(*) FROM job_applicants").await?;
        let total_interviews = self.count("SELECT COUNT(*) FROM interviews").await?;
        let usage_entries = self.count("SELECT COUNT(*) FROM interview_usage").await?;
        let active_subscriptions = self
            .count("SELECT COUNT(*) FROM user_subscriptions WHERE status = 'active'")
            .await?;

        Ok(AdminAnalytics {
            total_users,
            total_jobs,
            total_applicants,
            total_interviews,
            usage_entries,
            active_subscriptions,
        })
    }

    async fn count(&self, query: &str) -> Result<i64> {
        Ok(sqlx::query_scalar(query).fetch_one(&self.pool).await?)
    }

    /// Admin view of recent accounts, newest first.
    pub async fn list_users(&self, limit: i64) -> Result<Vec<User>> {
        let limit = limit.clamp(1, 500);
        let users = sqlx::query_as::<_, User>(
            "SELECT id, email, name, role, is_active, created_at, updated_at
             FROM users ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }
}

/// Joins the fetched row sets into dashboard shape. All statistics come from
/// the rows already in hand; no extra aggregate queries.
fn build_summary(
    jobs: Vec<Job>,
    applicants: Vec<Applicant>,
    interviews: Vec<Interview>,
    now: DateTime<Utc>,
) -> JobsSummaryData {
    let applicant_job: HashMap<Uuid, Uuid> =
        applicants.iter().map(|a| (a.id, a.job_id)).collect();

    let mut applicant_counts: HashMap<Uuid, i64> = HashMap::new();
    for applicant in &applicants {
        *applicant_counts.entry(applicant.job_id).or_default() += 1;
    }

    let mut interview_counts: HashMap<Uuid, i64> = HashMap::new();
    for interview in &interviews {
        let job_id = interview.job_id.or_else(|| {
            interview
                .applicant_id
                .and_then(|aid| applicant_job.get(&aid).copied())
        });
        if let Some(job_id) = job_id {
            *interview_counts.entry(job_id).or_default() += 1;
        }
    }

    let total_interviews = interviews.len() as i64;
    let job_summaries: Vec<JobSummary> = jobs
        .iter()
        .map(|job| {
            let interview_count = interview_counts.get(&job.id).copied().unwrap_or(0);
            let job_percent_of_total = if total_interviews > 0 {
                (interview_count as f64 / total_interviews as f64) * 100.0
            } else {
                0.0
            };
            JobSummary {
                id: job.id,
                title: job.title.clone(),
                status: job.status.clone(),
                applicant_count: applicant_counts.get(&job.id).copied().unwrap_or(0),
                interview_count,
                job_percent_of_total,
            }
        })
        .collect();

    let stats = SummaryStats {
        total_jobs: jobs.len() as i64,
        open_jobs: jobs.iter().filter(|j| j.status == "open").count() as i64,
        jobs_this_month: jobs
            .iter()
            .filter(|j| j.created_at.year() == now.year() && j.created_at.month() == now.month())
            .count() as i64,
        total_applicants: applicants.len() as i64,
        total_interviews,
    };

    JobsSummaryData {
        jobs: job_summaries,
        applicants: applicants.into_iter().map(Into::into).collect(),
        interviews: interviews.into_iter().map(Into::into).collect(),
        stats,
    }
}

fn merge_events(applicants: &[Applicant], interviews: &[Interview]) -> Vec<ActivityEvent> {
    let mut events: Vec<ActivityEvent> = Vec::with_capacity(applicants.len() + interviews.len());

    for applicant in applicants {
        events.push(ActivityEvent {
            kind: "application".to_string(),
            label: format!("{} applied", applicant.name),
            job_id: Some(applicant.job_id),
            occurred_at: applicant.created_at,
        });
    }
    for interview in interviews {
        let who = interview
            .candidate_name
            .clone()
            .unwrap_or_else(|| "A candidate".to_string());
        events.push(ActivityEvent {
            kind: "interview".to_string(),
            label: format!("{} {} an interview", who, interview.status),
            job_id: interview.job_id,
            occurred_at: interview.created_at,
        });
    }

    events.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    events.truncate(ACTIVITY_FETCH_LIMIT as usize);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn job(recruiter: Uuid, status: &str, created_at: DateTime<Utc>) -> Job {
        Job {
            id: Uuid::new_v4(),
            recruiter_id: recruiter,
            title: "Backend Engineer".to_string(),
            company: None,
            location: None,
            description: None,
            status: status.to_string(),
            created_at,
            updated_at: created_at,
        }
    }

    fn applicant(job_id: Uuid, created_at: DateTime<Utc>) -> Applicant {
        Applicant {
            id: Uuid::new_v4(),
            job_id,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            position_applied: None,
            status: "pending".to_string(),
            interview_id: None,
            created_at,
            updated_at: created_at,
        }
    }

    fn interview(
        job_id: Option<Uuid>,
        applicant_id: Option<Uuid>,
        created_at: DateTime<Utc>,
    ) -> Interview {
        Interview {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            applicant_id,
            job_id,
            candidate_name: Some("Alice".to_string()),
            candidate_email: None,
            position: None,
            status: "completed".to_string(),
            duration: Some(30),
            skills: json!([]),
            conversation: json!([]),
            created_at,
        }
    }

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn empty_inputs_produce_empty_summary() {
        let data = build_summary(vec![], vec![], vec![], at(2026, 6, 15));
        assert!(data.jobs.is_empty());
        assert!(data.applicants.is_empty());
        assert!(data.interviews.is_empty());
        assert_eq!(data.stats.total_jobs, 0);
    }

    #[test]
    fn counts_and_percentages_come_from_fetched_rows() {
        let recruiter = Uuid::new_v4();
        let job_a = job(recruiter, "open", at(2026, 6, 1));
        let job_b = job(recruiter, "closed", at(2026, 5, 1));

        let applicants = vec![applicant(job_a.id, at(2026, 6, 2))];
        let interviews = vec![
            interview(Some(job_a.id), None, at(2026, 6, 3)),
            interview(Some(job_a.id), None, at(2026, 6, 4)),
            interview(Some(job_b.id), None, at(2026, 6, 5)),
            interview(Some(job_b.id), None, at(2026, 6, 6)),
        ];

        let data = build_summary(
            vec![job_a.clone(), job_b.clone()],
            applicants,
            interviews,
            at(2026, 6, 15),
        );

        let summary_a = data.jobs.iter().find(|j| j.id == job_a.id).unwrap();
        let summary_b = data.jobs.iter().find(|j| j.id == job_b.id).unwrap();
        assert_eq!(summary_a.applicant_count, 1);
        assert_eq!(summary_a.interview_count, 2);
        assert_eq!(summary_b.interview_count, 2);
        assert!((summary_a.job_percent_of_total - 50.0).abs() < f64::EPSILON);
        assert_eq!(data.stats.open_jobs, 1);
        assert_eq!(data.stats.jobs_this_month, 1);
        assert_eq!(data.stats.total_interviews, 4);
    }

    #[test]
    fn legacy_interview_attaches_through_applicant_reference() {
        let recruiter = Uuid::new_v4();
        let owned_job = job(recruiter, "open", at(2026, 6, 1));
        let app = applicant(owned_job.id, at(2026, 6, 2));
        let legacy = interview(None, Some(app.id), at(2026, 6, 3));

        let data = build_summary(
            vec![owned_job.clone()],
            vec![app],
            vec![legacy],
            at(2026, 6, 15),
        );

        assert_eq!(data.jobs[0].interview_count, 1);
    }

    #[test]
    fn legacy_interview_without_known_applicant_is_excluded_from_counts() {
        let recruiter = Uuid::new_v4();
        let owned_job = job(recruiter, "open", at(2026, 6, 1));
        let stray = interview(None, Some(Uuid::new_v4()), at(2026, 6, 3));

        let data = build_summary(vec![owned_job], vec![], vec![stray], at(2026, 6, 15));

        assert_eq!(data.jobs[0].interview_count, 0);
        // the row itself is still visible in the raw list
        assert_eq!(data.interviews.len(), 1);
    }

    #[test]
    fn activity_feed_is_merged_and_reverse_chronological() {
        let job_id = Uuid::new_v4();
        let applicants = vec![applicant(job_id, at(2026, 6, 2))];
        let interviews = vec![
            interview(Some(job_id), None, at(2026, 6, 4)),
            interview(Some(job_id), None, at(2026, 6, 1)),
        ];

        let events = merge_events(&applicants, &interviews);
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].kind, "interview");
        assert_eq!(events[1].kind, "application");
        assert_eq!(events[2].kind, "interview");
        assert!(events.windows(2).all(|w| w[0].occurred_at >= w[1].occurred_at));
    }
}
