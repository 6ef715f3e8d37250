//! Enumerated column values
//!
//! Each enum maps one-to-one onto the strings stored by the admin site.
//! Parsing is strict: anything outside the set is an error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A stored string that is not one of the enum's values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a recognised value")]
pub struct UnknownChoice(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum EventType {
    Upcoming,
    Ongoing,
    Past,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Upcoming => "Upcoming",
            EventType::Ongoing => "Ongoing",
            EventType::Past => "Past",
        }
    }
}

impl FromStr for EventType {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Upcoming" => Ok(EventType::Upcoming),
            "Ongoing" => Ok(EventType::Ongoing),
            "Past" => Ok(EventType::Past),
            other => Err(UnknownChoice(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum TeamPosition {
    President,
    Member,
    Volunteer,
}

impl TeamPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamPosition::President => "President",
            TeamPosition::Member => "Member",
            TeamPosition::Volunteer => "Volunteer",
        }
    }
}

impl FromStr for TeamPosition {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "President" => Ok(TeamPosition::President),
            "Member" => Ok(TeamPosition::Member),
            "Volunteer" => Ok(TeamPosition::Volunteer),
            other => Err(UnknownChoice(other.to_string())),
        }
    }
}

/// Club division, shared by team members and alumni.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Division {
    #[serde(rename = "Competitive Programming")]
    CompetitiveProgramming,
    #[serde(rename = "Cyber Security")]
    CyberSecurity,
    #[serde(rename = "Software Development")]
    SoftwareDevelopment,
}

impl Division {
    pub fn as_str(&self) -> &'static str {
        match self {
            Division::CompetitiveProgramming => "Competitive Programming",
            Division::CyberSecurity => "Cyber Security",
            Division::SoftwareDevelopment => "Software Development",
        }
    }
}

impl FromStr for Division {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Competitive Programming" => Ok(Division::CompetitiveProgramming),
            "Cyber Security" => Ok(Division::CyberSecurity),
            "Software Development" => Ok(Division::SoftwareDevelopment),
            other => Err(UnknownChoice(other.to_string())),
        }
    }
}

/// Year of study of a current team member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum StudyYear {
    First,
    Second,
    Third,
    Fourth,
}

impl StudyYear {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudyYear::First => "First",
            StudyYear::Second => "Second",
            StudyYear::Third => "Third",
            StudyYear::Fourth => "Fourth",
        }
    }
}

impl FromStr for StudyYear {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "First" => Ok(StudyYear::First),
            "Second" => Ok(StudyYear::Second),
            "Third" => Ok(StudyYear::Third),
            "Fourth" => Ok(StudyYear::Fourth),
            other => Err(UnknownChoice(other.to_string())),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TeamPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for StudyYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_parses_stored_strings() {
        assert_eq!("Cyber Security".parse::<Division>(), Ok(Division::CyberSecurity));
        assert_eq!(
            "CyberSecurity".parse::<Division>(),
            Err(UnknownChoice("CyberSecurity".to_string()))
        );
    }

    #[test]
    fn test_parsing_is_case_sensitive() {
        assert!("upcoming".parse::<EventType>().is_err());
        assert!("member".parse::<TeamPosition>().is_err());
        assert!("first".parse::<StudyYear>().is_err());
    }

    #[test]
    fn test_serde_uses_stored_strings() {
        let json = serde_json::to_string(&Division::SoftwareDevelopment).unwrap();
        assert_eq!(json, "\"Software Development\"");
        assert_eq!(serde_json::to_string(&EventType::Past).unwrap(), "\"Past\"");

        for division in [Division::CompetitiveProgramming, Division::CyberSecurity, Division::SoftwareDevelopment] {
            let json = serde_json::to_string(&division).unwrap();
            assert_eq!(json, format!("\"{}\"", division));
        }
    }
}
