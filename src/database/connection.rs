//! Database connection management

use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, Pool, Postgres};
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::utils::errors::ProgClubError;

pub type DatabasePool = Pool<Postgres>;

/// Create a new database connection pool
///
/// Every connection gets a `statement_timeout` so that a stuck query
/// surfaces as an error instead of holding the connection forever.
pub async fn create_pool(config: &DatabaseConfig) -> Result<DatabasePool, ProgClubError> {
    let statement_timeout_ms = config.statement_timeout().as_millis();

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(Some(Duration::from_secs(600)))
        .max_lifetime(Some(Duration::from_secs(1800)))
        .after_connect(move |conn, _meta| {
            Box::pin(async move {
                if statement_timeout_ms > 0 {
                    conn.execute(format!("SET statement_timeout = {}", statement_timeout_ms).as_str())
                        .await?;
                }
                Ok(())
            })
        })
        .connect(&config.url)
        .await?;

    // Test the connection
    health_check(&pool).await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Database connection pool created successfully"
    );
    Ok(pool)
}

/// Run database migrations
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), ProgClubError> {
    tracing::info!("Running database migrations...");

    sqlx::migrate!("./migrations")
        .run(pool)
        .await?;

    tracing::info!("Database migrations completed successfully");
    Ok(())
}

/// Check database health
pub async fn health_check(pool: &DatabasePool) -> Result<(), ProgClubError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await?;

    Ok(())
}
