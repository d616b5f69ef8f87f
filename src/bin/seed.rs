//! Load the sample stores and reviews into the configured database.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use store_review_server::{db, seed, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "store_review_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let pool = db::create_pool(&config.database_url, config.database_max_connections).await?;
    db::run_migrations(&pool).await?;

    let summary = seed::run(&pool).await?;
    tracing::info!(
        "Seed completed: {} stores, {} reviews in {}",
        summary.stores,
        summary.reviews,
        config.database_url
    );

    Ok(())
}
