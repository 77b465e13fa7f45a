pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    applicant_service::ApplicantService, entitlement_service::EntitlementService,
    interview_service::InterviewService, job_service::JobService, linkage_service::LinkageService,
    resume_service::ResumeService, subscription_service::SubscriptionService,
    summary_service::SummaryService,
};
use crate::utils::retry::RetryPolicy;
use reqwest::Client;
use sqlx::PgPool;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub entitlement_service: EntitlementService,
    pub interview_service: InterviewService,
    pub linkage_service: LinkageService,
    pub job_service: JobService,
    pub applicant_service: ApplicantService,
    pub summary_service: SummaryService,
    pub subscription_service: SubscriptionService,
    pub resume_service: ResumeService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.llm_timeout_secs))
            .build()
            .unwrap();
        let retry_policy = RetryPolicy::new(
            config.llm_max_attempts,
            Duration::from_millis(config.llm_retry_backoff_ms),
        );

        let entitlement_service = EntitlementService::new(pool.clone());
        let interview_service = InterviewService::new(pool.clone());
        let linkage_service = LinkageService::new(pool.clone());
        let job_service = JobService::new(pool.clone());
        let applicant_service = ApplicantService::new(pool.clone());
        let summary_service = SummaryService::new(pool.clone());
        let subscription_service = SubscriptionService::new(pool.clone());
        let resume_service = ResumeService::new(
            config.openai_api_key.clone(),
            config.openai_base_url.clone(),
            http_client,
            retry_policy,
        );

        Self {
            pool,
            entitlement_service,
            interview_service,
            linkage_service,
            job_service,
            applicant_service,
            summary_service,
            subscription_service,
            resume_service,
        }
    }
}
