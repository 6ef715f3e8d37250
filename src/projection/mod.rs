//! Read-model projection
//!
//! Maps stored rows onto the shapes served over HTTP. Projection is pure:
//! it borrows the row, performs no I/O, and always yields the same response
//! for the same row. Enumerated columns are parsed strictly and a value
//! outside its set is reported as a [`ValidationError`] rather than coerced.

pub mod preview;

use std::str::FromStr;

use thiserror::Error;

use crate::models::{
    AlumnusResponse, AlumnusRow, EventResponse, EventRow, ProjectResponse, ProjectRow,
    TeamMemberResponse, TeamMemberRow, UnknownChoice,
};

pub use preview::image_preview;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid value '{value}' for field {field}")]
    InvalidEnumValue { field: &'static str, value: String },
}

/// A stored row that can be turned into its response shape.
pub trait ReadModel {
    type Response;

    fn project(&self) -> Result<Self::Response, ValidationError>;
}

/// Project every row, preserving order. The first invalid row fails the
/// whole batch.
pub fn project_all<R: ReadModel>(rows: &[R]) -> Result<Vec<R::Response>, ValidationError> {
    rows.iter().map(ReadModel::project).collect()
}

fn parse_choice<T>(field: &'static str, value: &str) -> Result<T, ValidationError>
where
    T: FromStr<Err = UnknownChoice>,
{
    value.parse().map_err(|UnknownChoice(value)| ValidationError::InvalidEnumValue { field, value })
}

fn image_fields(image: &Option<String>) -> (String, String) {
    let image = image.clone().unwrap_or_default();
    let preview = image_preview(&image);
    (image, preview)
}

impl ReadModel for EventRow {
    type Response = EventResponse;

    fn project(&self) -> Result<EventResponse, ValidationError> {
        let kind = parse_choice("event.type", &self.kind)?;
        let (image, image_preview) = image_fields(&self.image);

        Ok(EventResponse {
            id: self.id,
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            description: self.description.clone(),
            kind,
            image,
            image_preview,
        })
    }
}

impl ReadModel for ProjectRow {
    type Response = ProjectResponse;

    fn project(&self) -> Result<ProjectResponse, ValidationError> {
        let (image, image_preview) = image_fields(&self.image);

        Ok(ProjectResponse {
            id: self.id,
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            domain: self.domain.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            image,
            github: self.github.clone(),
            image_preview,
        })
    }
}

impl ReadModel for TeamMemberRow {
    type Response = TeamMemberResponse;

    fn project(&self) -> Result<TeamMemberResponse, ValidationError> {
        let position = parse_choice("team_member.position", &self.position)?;
        let division = parse_choice("team_member.division", &self.division)?;
        let year = parse_choice("team_member.year", &self.year)?;
        let (image, image_preview) = image_fields(&self.image);

        Ok(TeamMemberResponse {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            position,
            division,
            year,
            github: self.github.clone(),
            codeforces: self.codeforces.clone(),
            linkedin: self.linkedin.clone(),
            image,
            image_preview,
        })
    }
}

impl ReadModel for AlumnusRow {
    type Response = AlumnusResponse;

    fn project(&self) -> Result<AlumnusResponse, ValidationError> {
        let division = parse_choice("alumnus.division", &self.division)?;
        let (image, image_preview) = image_fields(&self.image);

        Ok(AlumnusResponse {
            id: self.id,
            name: self.name.clone(),
            passing_year: self.passing_year,
            division,
            image,
            linkedin: self.linkedin.clone(),
            image_preview,
        })
    }
}
