use crate::config::get_config;
use crate::error::Result;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

pub async fn create_pool() -> Result<PgPool> {
    let config = get_config();
    let pool = PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

/// Builds a pool without eagerly connecting. Connections are established on
/// first acquire, which lets request handlers surface datastore failures per
/// their own degradation policy instead of failing at startup.
pub fn create_lazy_pool(database_url: &str, acquire_timeout: Duration) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(acquire_timeout)
        .connect_lazy(database_url)?;
    Ok(pool)
}
