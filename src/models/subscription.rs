use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const FREE_TRIAL_PLAN_NAME: &str = "Free Trial";
pub const FREE_TRIAL_INTERVIEW_LIMIT: i64 = 2;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SubscriptionPlan {
    pub id: Uuid,
    pub name: String,
    pub interview_limit: i32,
    pub price_monthly: Decimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

/// At most one active subscription per user; absence implies the implicit
/// Free Trial plan.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSubscription {
    pub id: Uuid,
    pub user_id: Uuid,
    pub plan_id: Uuid,
    /// active | inactive | cancelled | pending
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
