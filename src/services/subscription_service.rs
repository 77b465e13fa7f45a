use crate::error::Result;
use crate::models::subscription::{SubscriptionPlan, UserSubscription, FREE_TRIAL_PLAN_NAME};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct SubscriptionService {
    pool: PgPool,
}

impl SubscriptionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_plans(&self) -> Result<Vec<SubscriptionPlan>> {
        let plans = sqlx::query_as::<_, SubscriptionPlan>(
            "SELECT id, name, interview_limit, price_monthly, currency, created_at
             FROM subscription_plans ORDER BY interview_limit ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(plans)
    }

    pub async fn get_subscription(&self, user_id: Uuid) -> Result<Option<UserSubscription>> {
        let subscription = sqlx::query_as::<_, UserSubscription>(
            "SELECT id, user_id, plan_id, status, created_at, updated_at
             FROM user_subscriptions
             WHERE user_id = $1 AND status = 'active'
             ORDER BY created_at DESC
             LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(subscription)
    }

    /// The plan backing the user's active subscription, if any. Absence means
    /// the implicit Free Trial.
    pub async fn active_plan_for(&self, user_id: Uuid) -> Result<Option<SubscriptionPlan>> {
        let plan = sqlx::query_as::<_, SubscriptionPlan>(
            "SELECT p.id, p.name, p.interview_limit, p.price_monthly, p.currency, p.created_at
             FROM subscription_plans p
             JOIN user_subscriptions s ON s.plan_id = p.id
             WHERE s.user_id = $1 AND s.status = 'active'
             ORDER BY s.created_at DESC
             LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(plan)
    }

    /// Persists a Free Trial subscription for a user that has none. Callers
    /// treat failure here as non-blocking: the implicit trial applies either way.
    pub async fn ensure_free_trial(&self, user_id: Uuid) -> Result<()> {
        sqlx::query(
            "INSERT INTO user_subscriptions (user_id, plan_id, status)
             SELECT $1, p.id, 'active' FROM subscription_plans p WHERE p.name = $2
             ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(FREE_TRIAL_PLAN_NAME)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
