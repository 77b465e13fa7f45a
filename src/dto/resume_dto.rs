use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnalyzeResumePayload {
    #[validate(length(min = 1))]
    pub resume_text: String,
    #[validate(length(min = 1))]
    pub job_description: String,
}

/// Shape the LLM is asked to produce. Malformed completions are replaced by
/// `ResumeAnalysis::fallback()` rather than failing the request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub score: i32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub skills: Vec<String>,
    pub summary: String,
}

impl ResumeAnalysis {
    pub fn fallback() -> Self {
        Self {
            score: 50,
            strengths: vec![],
            weaknesses: vec![],
            skills: vec![],
            summary: "Automatic analysis unavailable; manual review recommended.".to_string(),
        }
    }
}
