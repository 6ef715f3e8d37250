//! Team member model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::choices::{Division, StudyYear, TeamPosition};

/// A row of `api_team` as stored
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct TeamMemberRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub position: String,
    pub division: String,
    pub year: String,
    pub github: String,
    pub codeforces: String,
    pub linkedin: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamMemberResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    pub position: TeamPosition,
    pub division: Division,
    pub year: StudyYear,
    #[schema(example = "https://github.com/johndoe")]
    pub github: String,
    #[schema(example = "https://codeforces.com/johndoe")]
    pub codeforces: String,
    #[schema(example = "https://linkedin.com/in/johndoe")]
    pub linkedin: String,
    #[schema(example = "https://example.com/image.jpg")]
    pub image: String,
    #[schema(example = r#"<img src="https://example.com/image.jpg" width="100" height="100" />"#)]
    pub image_preview: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamMemberList {
    pub team_members: Vec<TeamMemberResponse>,
}
