//! Data models module
//!
//! Stored row shapes, their response shapes, and the request types the
//! admin surface exchanges.

pub mod choices;
pub mod event;
pub mod project;
pub mod team;
pub mod alumni;

use serde::{Deserialize, Serialize};

// Re-export commonly used models
pub use choices::{Division, EventType, StudyYear, TeamPosition, UnknownChoice};
pub use event::{EventRow, EventResponse, EventList, CreateEventRequest, UpdateEventRequest};
pub use project::{ProjectRow, ProjectResponse, ProjectList};
pub use team::{TeamMemberRow, TeamMemberResponse, TeamMemberList};
pub use alumni::{AlumnusRow, AlumnusResponse, AlumniList, CreateAlumnusRequest};

/// Identifies a row to remove, for any entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteEntityRequest {
    pub id: i32,
}
