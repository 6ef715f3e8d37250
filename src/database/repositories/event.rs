//! Event repository implementation

use std::time::Instant;

use sqlx::PgPool;

use crate::models::EventRow;
use crate::utils::errors::ProgClubError;
use crate::utils::logging::log_database_operation;

const TABLE: &str = "api_event";

#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch every event, ordered by id
    pub async fn list_all(&self) -> Result<Vec<EventRow>, ProgClubError> {
        let started = Instant::now();
        let result = sqlx::query_as::<_, EventRow>(
            "SELECT id, title, subtitle, description, type, image FROM api_event ORDER BY id ASC"
        )
        .fetch_all(&self.pool)
        .await;

        log_database_operation("select_all", TABLE, started.elapsed().as_millis() as u64, result.is_ok());
        Ok(result?)
    }
}
