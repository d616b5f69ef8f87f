pub mod pool;
pub mod reviews;
pub mod stores;

pub use pool::create_pool;
pub use stores::StoreFilter;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::SqlitePool;

/// Embedded schema migrations from `./migrations`
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Bring the schema up to date
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    tracing::info!("Running database migrations...");
    MIGRATOR.run(pool).await?;
    tracing::info!("Migrations complete");
    Ok(())
}

/// Cheap liveness probe used by the health endpoint
pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
