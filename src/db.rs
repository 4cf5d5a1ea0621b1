use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;

pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
}

/// Creates the five booking tables, referenced tables first.
///
/// Every statement is `CREATE TABLE IF NOT EXISTS`, so running this against an
/// already initialized database is a no-op.
pub async fn init_schema(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("database schema ready");
    Ok(())
}
