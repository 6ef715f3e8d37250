//! Database service layer
//! 
//! This module provides the read interface the HTTP layer depends on,
//! and its PostgreSQL implementation.

use async_trait::async_trait;

use crate::database::{health_check, AlumniRepository, DatabasePool, EventRepository, ProjectRepository, TeamRepository};
use crate::models::{AlumnusRow, EventRow, ProjectRow, TeamMemberRow};
use crate::utils::errors::ProgClubError;

/// Source of stored rows for every entity kind.
///
/// Each call returns the full table. Implementations must not hold any
/// connection beyond the call.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn fetch_events(&self) -> Result<Vec<EventRow>, ProgClubError>;

    async fn fetch_projects(&self) -> Result<Vec<ProjectRow>, ProgClubError>;

    async fn fetch_team_members(&self) -> Result<Vec<TeamMemberRow>, ProgClubError>;

    async fn fetch_alumni(&self) -> Result<Vec<AlumnusRow>, ProgClubError>;

    /// Verify the store is reachable
    async fn ping(&self) -> Result<(), ProgClubError>;
}

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pool: DatabasePool,
    pub events: EventRepository,
    pub projects: ProjectRepository,
    pub team: TeamRepository,
    pub alumni: AlumniRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            events: EventRepository::new(pool.clone()),
            projects: ProjectRepository::new(pool.clone()),
            team: TeamRepository::new(pool.clone()),
            alumni: AlumniRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl CatalogStore for DatabaseService {
    async fn fetch_events(&self) -> Result<Vec<EventRow>, ProgClubError> {
        self.events.list_all().await
    }

    async fn fetch_projects(&self) -> Result<Vec<ProjectRow>, ProgClubError> {
        self.projects.list_all().await
    }

    async fn fetch_team_members(&self) -> Result<Vec<TeamMemberRow>, ProgClubError> {
        self.team.list_all().await
    }

    async fn fetch_alumni(&self) -> Result<Vec<AlumnusRow>, ProgClubError> {
        self.alumni.list_all().await
    }

    async fn ping(&self) -> Result<(), ProgClubError> {
        health_check(&self.pool).await
    }
}
