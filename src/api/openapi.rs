//! OpenAPI document
//!
//! Describes the four collection routes and their item shapes, served as
//! JSON at `/openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use crate::models::{
    AlumniList, AlumnusResponse, Division, EventList, EventResponse, EventType, ProjectList,
    ProjectResponse, StudyYear, TeamMemberList, TeamMemberResponse, TeamPosition,
};
use crate::utils::errors::ErrorBody;

use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Programming Club API",
        description = "Read-only access to the club's events, projects, team and alumni"
    ),
    paths(
        handlers::list_events,
        handlers::list_projects,
        handlers::list_team_members,
        handlers::list_alumni
    ),
    components(schemas(
        EventList,
        EventResponse,
        EventType,
        ProjectList,
        ProjectResponse,
        TeamMemberList,
        TeamMemberResponse,
        TeamPosition,
        Division,
        StudyYear,
        AlumniList,
        AlumnusResponse,
        ErrorBody
    )),
    tags(
        (name = "events", description = "Club events"),
        (name = "projects", description = "Member projects"),
        (name = "team", description = "Current team members"),
        (name = "alumni", description = "Former members")
    )
)]
pub struct ApiDoc;

/// `GET /openapi.json`
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
