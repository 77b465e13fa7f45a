use crate::error::{Error, Result};
use crate::models::subscription::{FREE_TRIAL_INTERVIEW_LIMIT, FREE_TRIAL_PLAN_NAME};
use crate::models::usage::InterviewUsage;
use crate::services::subscription_service::SubscriptionService;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct LimitStatus {
    pub can_continue: bool,
    pub plan_name: String,
    pub used: i64,
    pub limit: i64,
    pub remaining: i64,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RecordOutcome {
    pub plan_name: String,
    pub limit: i64,
    pub remaining: i64,
}

/// `remaining` and `can_continue` from a (used, limit) pair. The ledger count
/// is the sole source of truth for `used`.
fn decide(used: i64, limit: i64) -> (bool, i64) {
    (used < limit, (limit - used).max(0))
}

#[derive(Clone)]
pub struct EntitlementService {
    pool: PgPool,
    subscriptions: SubscriptionService,
}

impl EntitlementService {
    pub fn new(pool: PgPool) -> Self {
        let subscriptions = SubscriptionService::new(pool.clone());
        Self {
            pool,
            subscriptions,
        }
    }

    /// Decides whether `user_id` may start another interview.
    ///
    /// Fail-open: a datastore fault must never block a user, so errors
    /// degrade to `can_continue = true` with a warning message.
    pub async fn check_limit(&self, user_id: Uuid) -> LimitStatus {
        match self.check_limit_strict(user_id).await {
            Ok(status) => status,
            Err(err) => {
                warn!(%user_id, error = ?err, "Limit check failed, failing open");
                let limit = FREE_TRIAL_INTERVIEW_LIMIT;
                LimitStatus {
                    can_continue: true,
                    plan_name: FREE_TRIAL_PLAN_NAME.to_string(),
                    used: 0,
                    limit,
                    remaining: limit,
                    message: Some(
                        "Limit check temporarily unavailable; interview allowed.".to_string(),
                    ),
                }
            }
        }
    }

    async fn check_limit_strict(&self, user_id: Uuid) -> Result<LimitStatus> {
        let (plan_name, limit) = match self.subscriptions.active_plan_for(user_id).await? {
            Some(plan) => (plan.name, plan.interview_limit as i64),
            None => {
                // Opportunistic: persist the implicit trial so billing sees it.
                if let Err(err) = self.subscriptions.ensure_free_trial(user_id).await {
                    warn!(%user_id, error = ?err, "Could not persist Free Trial subscription");
                }
                (FREE_TRIAL_PLAN_NAME.to_string(), FREE_TRIAL_INTERVIEW_LIMIT)
            }
        };

        let used: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM interview_usage WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;

        let (can_continue, remaining) = decide(used, limit);
        Ok(LimitStatus {
            can_continue,
            plan_name,
            used,
            limit,
            remaining,
            message: (!can_continue).then(|| {
                format!(
                    "Interview limit reached ({} of {} used). Upgrade your plan to continue.",
                    used, limit
                )
            }),
        })
    }

    /// Appends one ledger row for a consumed interview. The insert itself is
    /// guarded by the limit predicate, so two racing calls cannot both land
    /// once the count reaches the plan limit.
    pub async fn record_usage(&self, user_id: Uuid, interview_id: Uuid) -> Result<RecordOutcome> {
        let status = self.check_limit(user_id).await;
        if !status.can_continue {
            return Err(Error::LimitReached);
        }

        let result = sqlx::query(
            "INSERT INTO interview_usage (user_id, interview_id)
             SELECT $1, $2
             WHERE (SELECT COUNT(*) FROM interview_usage WHERE user_id = $1) < $3",
        )
        .bind(user_id)
        .bind(interview_id)
        .bind(status.limit)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::LimitReached);
        }

        // Reported from the pre-insert status rather than a fresh count.
        Ok(RecordOutcome {
            plan_name: status.plan_name,
            limit: status.limit,
            remaining: (status.remaining - 1).max(0),
        })
    }

    /// Admin view of a user's raw ledger rows, oldest first.
    pub async fn list_usage(&self, user_id: Uuid) -> Result<Vec<InterviewUsage>> {
        let rows = sqlx::query_as::<_, InterviewUsage>(
            "SELECT id, user_id, interview_id, created_at
             FROM interview_usage WHERE user_id = $1 ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Admin-only: the single sanctioned way to shrink the ledger.
    pub async fn reset_usage(&self, user_id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM interview_usage WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_table_matches_contract() {
        // (used, limit) -> (can_continue, remaining)
        let cases = [
            (0, 2, true, 2),
            (1, 2, true, 1),
            (2, 2, false, 0),
            (3, 2, false, 0),
            (0, 0, false, 0),
            (9, 10, true, 1),
            (10, 10, false, 0),
        ];
        for (used, limit, can_continue, remaining) in cases {
            assert_eq!(decide(used, limit), (can_continue, remaining), "used={used} limit={limit}");
        }
    }

    #[test]
    fn can_continue_iff_used_below_limit() {
        for used in 0..20 {
            for limit in 0..20 {
                let (can_continue, remaining) = decide(used, limit);
                assert_eq!(can_continue, used < limit);
                assert_eq!(remaining, (limit - used).max(0));
                assert!(remaining >= 0);
            }
        }
    }
}
