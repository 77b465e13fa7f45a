pub mod applicant_service;
pub mod entitlement_service;
pub mod interview_service;
pub mod job_service;
pub mod linkage_service;
pub mod resume_service;
pub mod subscription_service;
pub mod summary_service;
