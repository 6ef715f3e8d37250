//! Project repository implementation

use std::time::Instant;

use sqlx::PgPool;

use crate::models::ProjectRow;
use crate::utils::errors::ProgClubError;
use crate::utils::logging::log_database_operation;

const TABLE: &str = "api_project";

#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch every project, ordered by id
    pub async fn list_all(&self) -> Result<Vec<ProjectRow>, ProgClubError> {
        let started = Instant::now();
        let result = sqlx::query_as::<_, ProjectRow>(
            "SELECT id, title, subtitle, domain, category, description, image, github FROM api_project ORDER BY id ASC"
        )
        .fetch_all(&self.pool)
        .await;

        log_database_operation("select_all", TABLE, started.elapsed().as_millis() as u64, result.is_ok());
        Ok(result?)
    }
}
