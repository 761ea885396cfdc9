//! Populate an empty store with sample campers, activities, and signups.

use anyhow::Context;

use camp_api::config::ServerConfig;
use camp_api::seed;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();
    let pool = camp_db::create_pool(&config.database_url)
        .await
        .with_context(|| format!("connecting to {}", config.database_url))?;
    camp_db::run_migrations(&pool)
        .await
        .context("applying migrations")?;

    match seed::seed(&pool).await.context("seeding store")? {
        Some(report) => tracing::info!(
            campers = report.campers,
            activities = report.activities,
            signups = report.signups,
            "Seed complete"
        ),
        None => tracing::warn!("Store already contains campers, skipping seed"),
    }

    pool.close().await;
    Ok(())
}
