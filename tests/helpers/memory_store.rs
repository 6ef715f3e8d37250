//! In-memory catalog store
//!
//! Serves fixed rows, or fails every call the way an unreachable database
//! does, so the router can be exercised without PostgreSQL.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use progclub_api::api::{self, AppState};
use progclub_api::config::CorsConfig;
use progclub_api::models::{AlumnusRow, EventRow, ProjectRow, TeamMemberRow};
use progclub_api::{CatalogStore, ProgClubError};

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub events: Vec<EventRow>,
    pub projects: Vec<ProjectRow>,
    pub team_members: Vec<TeamMemberRow>,
    pub alumni: Vec<AlumnusRow>,
    pub unreachable: bool,
    pub calls: AtomicUsize,
}

impl MemoryStore {
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    fn read<T: Clone>(&self, rows: &[T]) -> Result<Vec<T>, ProgClubError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable {
            return Err(ProgClubError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(rows.to_vec())
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn fetch_events(&self) -> Result<Vec<EventRow>, ProgClubError> {
        self.read(&self.events)
    }

    async fn fetch_projects(&self) -> Result<Vec<ProjectRow>, ProgClubError> {
        self.read(&self.projects)
    }

    async fn fetch_team_members(&self) -> Result<Vec<TeamMemberRow>, ProgClubError> {
        self.read(&self.team_members)
    }

    async fn fetch_alumni(&self) -> Result<Vec<AlumnusRow>, ProgClubError> {
        self.read(&self.alumni)
    }

    async fn ping(&self) -> Result<(), ProgClubError> {
        self.read::<()>(&[]).map(|_| ())
    }
}

pub fn build_router(store: Arc<MemoryStore>) -> Router {
    api::router(AppState::new(store), &CorsConfig { enabled: true })
}

/// Issue a GET and return the status with the raw body.
pub async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

/// Issue a GET and parse the body as JSON.
pub async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(router, uri).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}
