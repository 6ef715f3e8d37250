//! Team repository implementation

use std::time::Instant;

use sqlx::PgPool;

use crate::models::TeamMemberRow;
use crate::utils::errors::ProgClubError;
use crate::utils::logging::log_database_operation;

const TABLE: &str = "api_team";

#[derive(Debug, Clone)]
pub struct TeamRepository {
    pool: PgPool,
}

impl TeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch every team member, ordered by id
    pub async fn list_all(&self) -> Result<Vec<TeamMemberRow>, ProgClubError> {
        let started = Instant::now();
        let result = sqlx::query_as::<_, TeamMemberRow>(
            r#"
            SELECT id, name, email, position, division, year, github, codeforces, linkedin, image
            FROM api_team
            ORDER BY id ASC
            "#
        )
        .fetch_all(&self.pool)
        .await;

        log_database_operation("select_all", TABLE, started.elapsed().as_millis() as u64, result.is_ok());
        Ok(result?)
    }
}
