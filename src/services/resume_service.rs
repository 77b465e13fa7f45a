use reqwest::Client;
use serde_json::Value as JsonValue;
use tracing::error;

use crate::dto::resume_dto::ResumeAnalysis;
use crate::utils::retry::{send_with_retry, RetryPolicy};

const SYSTEM_PROMPT: &str = "You are a senior technical recruiter. \
Evaluate how well a candidate resume matches a job description. \
Respond with a JSON object only: \
{\"score\": <0-100>, \"strengths\": [..], \"weaknesses\": [..], \
\"skills\": [..], \"summary\": \"<two sentences>\"}. \
Be strict: a fundamental profession mismatch scores below 20.";

#[derive(Clone)]
pub struct ResumeService {
    client: Client,
    api_key: String,
    base_url: String,
    policy: RetryPolicy,
}

impl ResumeService {
    pub fn new(api_key: String, base_url: String, client: Client, policy: RetryPolicy) -> Self {
        Self {
            client,
            api_key,
            base_url,
            policy,
        }
    }

    /// Scores a resume against a job description via the chat-completion
    /// endpoint. Any failure, including a malformed completion, yields the
    /// fixed fallback object rather than an error.
    pub async fn analyze(&self, resume_text: &str, job_description: &str) -> ResumeAnalysis {
        match self.request_analysis(resume_text, job_description).await {
            Ok(analysis) => analysis,
            Err(err) => {
                error!(error = ?err, "Resume analysis failed, returning fallback");
                ResumeAnalysis::fallback()
            }
        }
    }

    async fn request_analysis(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> anyhow::Result<ResumeAnalysis> {
        let user_content = format!(
            "Job description:\n{}\n\nResume:\n{}",
            job_description, resume_text
        );
        let payload = serde_json::json!({
            "model": "gpt-4o",
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": user_content}
            ],
            "response_format": { "type": "json_object" },
            "temperature": 0.2
        });

        let builder = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload);

        let response = send_with_retry(builder, self.policy).await?;
        let body: JsonValue = response.json().await?;
        let content = body
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| anyhow::anyhow!("Invalid chat completion response shape"))?;

        Ok(parse_analysis(content))
    }
}

/// Lenient parse of the model's reply. `score` must be present and numeric;
/// list fields and the summary are defaulted when absent. Anything that is
/// not a JSON object collapses to the fallback.
pub fn parse_analysis(raw: &str) -> ResumeAnalysis {
    let Ok(value) = serde_json::from_str::<JsonValue>(raw) else {
        return ResumeAnalysis::fallback();
    };
    let Some(score) = value.get("score").and_then(|s| s.as_i64()) else {
        return ResumeAnalysis::fallback();
    };

    ResumeAnalysis {
        score: score.clamp(0, 100) as i32,
        strengths: string_list(&value, "strengths"),
        weaknesses: string_list(&value, "weaknesses"),
        skills: string_list(&value, "skills"),
        summary: value
            .get("summary")
            .and_then(|s| s.as_str())
            .unwrap_or("")
            .to_string(),
    }
}

fn string_list(value: &JsonValue, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(|s| s.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_reply_parses() {
        let raw = r#"{"score": 82, "strengths": ["Rust", "SQL"], "weaknesses": [],
                      "skills": ["backend"], "summary": "Strong match."}"#;
        let analysis = parse_analysis(raw);
        assert_eq!(analysis.score, 82);
        assert_eq!(analysis.strengths, vec!["Rust", "SQL"]);
        assert_eq!(analysis.summary, "Strong match.");
    }

    #[test]
    fn out_of_range_score_is_clamped() {
        assert_eq!(parse_analysis(r#"{"score": 180}"#).score, 100);
        assert_eq!(parse_analysis(r#"{"score": -5}"#).score, 0);
    }

    #[test]
    fn non_json_reply_falls_back() {
        assert_eq!(
            parse_analysis("I could not evaluate this resume."),
            ResumeAnalysis::fallback()
        );
    }

    #[test]
    fn missing_score_falls_back() {
        assert_eq!(
            parse_analysis(r#"{"strengths": ["Rust"]}"#),
            ResumeAnalysis::fallback()
        );
    }

    #[test]
    fn non_string_list_entries_are_skipped() {
        let analysis = parse_analysis(r#"{"score": 50, "skills": ["Rust", 7, null]}"#);
        assert_eq!(analysis.skills, vec!["Rust"]);
    }
}
