pub mod admin;
pub mod applicants;
pub mod entitlement;
pub mod health;
pub mod interviews;
pub mod jobs;
pub mod linkage;
pub mod plans;
pub mod recruiter;
pub mod resume;
