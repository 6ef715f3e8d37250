//! Route handlers
//!
//! Every collection handler fetches the whole table, projects each row in
//! the order received, and fails the request if any row does not project.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::models::{AlumniList, EventList, ProjectList, TeamMemberList};
use crate::projection::project_all;
use crate::utils::errors::{ErrorBody, ProgClubError};
use crate::utils::logging::log_request_outcome;

use super::AppState;

/// `GET /events`
#[utoipa::path(
    get,
    path = "/events",
    tag = "events",
    responses(
        (status = 200, description = "All events ordered by id", body = EventList),
        (status = 500, description = "A stored row failed validation or the query failed", body = ErrorBody),
        (status = 503, description = "Database unreachable", body = ErrorBody)
    )
)]
pub async fn list_events(State(state): State<AppState>) -> Result<Json<EventList>, ProgClubError> {
    let rows = state.store.fetch_events().await?;
    let events = project_all(&rows)?;

    log_request_outcome("/events", events.len());
    Ok(Json(EventList { events }))
}

/// `GET /projects`
#[utoipa::path(
    get,
    path = "/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects ordered by id", body = ProjectList),
        (status = 500, description = "A stored row failed validation or the query failed", body = ErrorBody),
        (status = 503, description = "Database unreachable", body = ErrorBody)
    )
)]
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<ProjectList>, ProgClubError> {
    let rows = state.store.fetch_projects().await?;
    let projects = project_all(&rows)?;

    log_request_outcome("/projects", projects.len());
    Ok(Json(ProjectList { projects }))
}

/// `GET /team`
#[utoipa::path(
    get,
    path = "/team",
    tag = "team",
    responses(
        (status = 200, description = "All team members ordered by id", body = TeamMemberList),
        (status = 500, description = "A stored row failed validation or the query failed", body = ErrorBody),
        (status = 503, description = "Database unreachable", body = ErrorBody)
    )
)]
pub async fn list_team_members(State(state): State<AppState>) -> Result<Json<TeamMemberList>, ProgClubError> {
    let rows = state.store.fetch_team_members().await?;
    let team_members = project_all(&rows)?;

    log_request_outcome("/team", team_members.len());
    Ok(Json(TeamMemberList { team_members }))
}

/// `GET /alumni`
#[utoipa::path(
    get,
    path = "/alumni",
    tag = "alumni",
    responses(
        (status = 200, description = "All alumni ordered by id", body = AlumniList),
        (status = 500, description = "A stored row failed validation or the query failed", body = ErrorBody),
        (status = 503, description = "Database unreachable", body = ErrorBody)
    )
)]
pub async fn list_alumni(State(state): State<AppState>) -> Result<Json<AlumniList>, ProgClubError> {
    let rows = state.store.fetch_alumni().await?;
    let alumni = project_all(&rows)?;

    log_request_outcome("/alumni", alumni.len());
    Ok(Json(AlumniList { alumni }))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ProgClubError> {
    state.store.ping().await?;
    Ok(Json(json!({ "status": "ok" })))
}
