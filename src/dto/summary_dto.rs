use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::applicant_dto::ApplicantResponse;
use crate::dto::interview_dto::InterviewResponse;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RecruiterQuery {
    pub recruiter_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub id: Uuid,
    pub title: String,
    pub status: String,
    pub applicant_count: i64,
    pub interview_count: i64,
    pub job_percent_of_total: f64,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_jobs: i64,
    pub open_jobs: i64,
    pub jobs_this_month: i64,
    pub total_applicants: i64,
    pub total_interviews: i64,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobsSummaryData {
    pub jobs: Vec<JobSummary>,
    pub applicants: Vec<ApplicantResponse>,
    pub interviews: Vec<InterviewResponse>,
    pub stats: SummaryStats,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEvent {
    /// interview | application
    pub kind: String,
    pub label: String,
    pub job_id: Option<Uuid>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogData {
    pub events: Vec<ActivityEvent>,
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdminAnalytics {
    pub total_users: i64,
    pub total_jobs: i64,
    pub total_applicants: i64,
    pub total_interviews: i64,
    pub usage_entries: i64,
    pub active_subscriptions: i64,
}
