use reqwest::{RequestBuilder, Response, StatusCode};
use std::time::Duration;
use tracing::warn;

/// Retry policy for outbound HTTP: 5xx and transport errors are retried with
/// linear backoff, 4xx is terminal. Timeouts come from the client itself.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    /// Linear backoff: attempt 1 waits `backoff`, attempt 2 waits `2 * backoff`.
    pub fn delay_after(&self, completed_attempts: u32) -> Duration {
        self.backoff * completed_attempts
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    Retry,
    Terminal,
}

pub fn classify_status(status: StatusCode) -> RetryDecision {
    if status.is_server_error() {
        RetryDecision::Retry
    } else {
        RetryDecision::Terminal
    }
}

/// Sends `builder`, retrying per `policy`. The builder is cloned for each
/// attempt; bodies must therefore be buffered (JSON payloads are).
pub async fn send_with_retry(
    builder: RequestBuilder,
    policy: RetryPolicy,
) -> anyhow::Result<Response> {
    let mut attempt: u32 = 0;
    loop {
        attempt += 1;
        let request = builder
            .try_clone()
            .ok_or_else(|| anyhow::anyhow!("Request body is not cloneable for retry"))?;

        match request.send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    return Ok(response);
                }
                if classify_status(status) == RetryDecision::Terminal {
                    let body = response.text().await.unwrap_or_default();
                    anyhow::bail!("Upstream returned {}: {}", status, body);
                }
                if attempt >= policy.max_attempts {
                    let body = response.text().await.unwrap_or_default();
                    anyhow::bail!(
                        "Upstream returned {} after {} attempts: {}",
                        status,
                        attempt,
                        body
                    );
                }
                warn!(%status, attempt, "Upstream 5xx, retrying");
            }
            Err(err) => {
                if attempt >= policy.max_attempts {
                    return Err(anyhow::anyhow!(
                        "Transport error after {} attempts: {}",
                        attempt,
                        err
                    ));
                }
                warn!(error = %err, attempt, "Transport error, retrying");
            }
        }

        tokio::time::sleep(policy.delay_after(attempt)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_retryable() {
        assert_eq!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR),
            RetryDecision::Retry
        );
        assert_eq!(
            classify_status(StatusCode::BAD_GATEWAY),
            RetryDecision::Retry
        );
        assert_eq!(
            classify_status(StatusCode::SERVICE_UNAVAILABLE),
            RetryDecision::Retry
        );
    }

    #[test]
    fn client_errors_are_terminal() {
        assert_eq!(
            classify_status(StatusCode::BAD_REQUEST),
            RetryDecision::Terminal
        );
        assert_eq!(
            classify_status(StatusCode::UNAUTHORIZED),
            RetryDecision::Terminal
        );
        assert_eq!(
            classify_status(StatusCode::TOO_MANY_REQUESTS),
            RetryDecision::Terminal
        );
    }

    #[test]
    fn backoff_grows_linearly() {
        let policy = RetryPolicy::new(3, Duration::from_millis(200));
        assert_eq!(policy.delay_after(1), Duration::from_millis(200));
        assert_eq!(policy.delay_after(2), Duration::from_millis(400));
        assert_eq!(policy.delay_after(3), Duration::from_millis(600));
    }

    #[test]
    fn attempts_are_clamped_to_at_least_one() {
        let policy = RetryPolicy::new(0, Duration::from_millis(100));
        assert_eq!(policy.max_attempts, 1);
    }
}
