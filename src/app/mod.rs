//! Application wiring: database connection and schema preparation.

pub mod services;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::infra::config;
use crate::storage::schema;

/// Connects to PostgreSQL and makes sure every entity table exists.
pub async fn connect_and_prepare() -> anyhow::Result<PgPool> {
    dotenv::dotenv().ok();
    let pool = PgPoolOptions::new()
        .max_connections(config::max_connections())
        .connect(&config::database_url())
        .await?;
    schema::ensure_schema(&pool).await?;
    Ok(pool)
}
