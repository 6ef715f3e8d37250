//! Alumni repository implementation

use std::time::Instant;

use sqlx::PgPool;

use crate::models::AlumnusRow;
use crate::utils::errors::ProgClubError;
use crate::utils::logging::log_database_operation;

const TABLE: &str = "api_alumni";

#[derive(Debug, Clone)]
pub struct AlumniRepository {
    pool: PgPool,
}

impl AlumniRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch every alumnus, ordered by id
    pub async fn list_all(&self) -> Result<Vec<AlumnusRow>, ProgClubError> {
        let started = Instant::now();
        // The admin site created this column with a mixed-case name.
        let result = sqlx::query_as::<_, AlumnusRow>(
            r#"SELECT id, name, passing_year, division, image, "LinkedIn_Profile" FROM api_alumni ORDER BY id ASC"#
        )
        .fetch_all(&self.pool)
        .await;

        log_database_operation("select_all", TABLE, started.elapsed().as_millis() as u64, result.is_ok());
        Ok(result?)
    }
}
