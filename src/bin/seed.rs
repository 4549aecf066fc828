//! Wipes every entity table and reloads the initial data set.

use freight_backoffice::{app, infra, storage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    infra::logging::init();

    let pool = app::connect_and_prepare().await?;
    let statements = storage::seed::load_initial_data(&pool).await?;
    tracing::info!(statements, "initial data loaded");

    Ok(())
}
