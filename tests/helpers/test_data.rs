//! Row fixtures
//!
//! Builders for stored rows with valid enumerated values. Tests tweak the
//! returned struct to exercise edge cases.

use progclub_api::models::{AlumnusRow, EventRow, ProjectRow, TeamMemberRow};

pub fn event_row(id: i32, kind: &str, image: &str) -> EventRow {
    EventRow {
        id,
        title: "Hack Night".to_string(),
        subtitle: "Weekly".to_string(),
        description: "...".to_string(),
        kind: kind.to_string(),
        image: Some(image.to_string()),
    }
}

pub fn project_row(id: i32, image: &str) -> ProjectRow {
    ProjectRow {
        id,
        title: format!("Project {}", id),
        subtitle: "Built by the club".to_string(),
        domain: "Web".to_string(),
        category: "Tooling".to_string(),
        description: "A project".to_string(),
        image: Some(image.to_string()),
        github: format!("https://github.com/club/project-{}", id),
    }
}

pub fn team_member_row(id: i32, position: &str, division: &str, year: &str) -> TeamMemberRow {
    TeamMemberRow {
        id,
        name: format!("Member {}", id),
        email: format!("member{}@example.com", id),
        position: position.to_string(),
        division: division.to_string(),
        year: year.to_string(),
        github: format!("https://github.com/member{}", id),
        codeforces: format!("https://codeforces.com/profile/member{}", id),
        linkedin: format!("https://linkedin.com/in/member{}", id),
        image: None,
    }
}

pub fn alumnus_row(id: i32, division: &str, image: Option<&str>) -> AlumnusRow {
    AlumnusRow {
        id,
        name: format!("Alumnus {}", id),
        passing_year: 2020 + id,
        division: division.to_string(),
        image: image.map(str::to_string),
        linkedin: format!("https://linkedin.com/in/alumnus{}", id),
    }
}
