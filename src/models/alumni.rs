//! Alumni model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::choices::Division;

/// A row of `api_alumni` as stored
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct AlumnusRow {
    pub id: i32,
    pub name: String,
    pub passing_year: i32,
    pub division: String,
    pub image: Option<String>,
    #[sqlx(rename = "LinkedIn_Profile")]
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AlumnusResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = 2023)]
    pub passing_year: i32,
    pub division: Division,
    #[schema(example = "https://example.com/image.jpg")]
    pub image: String,
    #[schema(example = "https://example.com/linkedin")]
    pub linkedin: String,
    #[schema(example = r#"<img src="https://example.com/image.jpg" width="100" height="100" />"#)]
    pub image_preview: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AlumniList {
    pub alumni: Vec<AlumnusResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAlumnusRequest {
    pub name: String,
    pub passing_year: i32,
    pub division: Division,
    pub image: String,
    #[serde(alias = "LinkedIn_Profile")]
    pub linkedin: String,
}
