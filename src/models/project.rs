//! Project model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row of `api_project` as stored
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ProjectRow {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub domain: String,
    pub category: String,
    pub description: String,
    pub image: Option<String>,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Project Title")]
    pub title: String,
    #[schema(example = "Project Subtitle")]
    pub subtitle: String,
    #[schema(example = "Domain")]
    pub domain: String,
    #[schema(example = "Category")]
    pub category: String,
    #[schema(example = "Project description.")]
    pub description: String,
    #[schema(example = "https://example.com/image.jpg")]
    pub image: String,
    #[schema(example = "https://github.com/example")]
    pub github: String,
    #[schema(example = r#"<img src="https://example.com/image.jpg" width="100" height="100" />"#)]
    pub image_preview: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectList {
    pub projects: Vec<ProjectResponse>,
}
