//! Event model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::choices::EventType;

/// A row of `api_event` as stored
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct EventRow {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub image: Option<String>,
}

/// An event as served by `GET /events`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Hack Night")]
    pub title: String,
    #[schema(example = "Weekly")]
    pub subtitle: String,
    #[schema(example = "Event description.")]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    #[schema(example = "https://example.com/image.jpg")]
    pub image: String,
    #[schema(example = r#"<img src="https://example.com/image.jpg" width="100" height="100" />"#)]
    pub image_preview: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventList {
    pub events: Vec<EventResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    pub image: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<EventType>,
    pub image: Option<String>,
}
