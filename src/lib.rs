//! Programming club API
//!
//! Read-only JSON API over the club website's database: events, projects,
//! team members and alumni. Stored rows are validated and projected into
//! response shapes that carry a derived HTML image preview.

pub mod api;
pub mod config;
pub mod database;
pub mod models;
pub mod projection;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ProgClubError, Result};

// Re-export main components for easy access
pub use api::AppState;
pub use database::{CatalogStore, DatabaseService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
