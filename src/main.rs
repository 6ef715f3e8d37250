//! Programming club API
//!
//! Main application entry point

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use progclub_api::{
    api::{self, AppState},
    config::Settings,
    database::{create_pool, run_migrations, DatabaseService},
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("Failed to load configuration")?;
    settings.validate()?;

    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", progclub_api::info());

    // Initialize database connection
    info!("Connecting to database...");
    let db_pool = create_pool(&settings.database)
        .await
        .context("Failed to connect to the database")?;

    if settings.database.run_migrations {
        run_migrations(&db_pool).await?;
    }

    let database_service = DatabaseService::new(db_pool.clone());
    let state = AppState::new(Arc::new(database_service));
    let router = api::router(state, &settings.cors);

    api::serve(&settings.server, router).await?;

    db_pool.close().await;
    info!("{} has been shut down.", progclub_api::NAME);

    Ok(())
}
