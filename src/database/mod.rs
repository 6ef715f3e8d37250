//! Database module
//!
//! This module handles database connections and read queries

pub mod connection;
pub mod repositories;
pub mod service;

// Re-export commonly used database components
pub use connection::{DatabasePool, create_pool, run_migrations, health_check};
pub use repositories::{EventRepository, ProjectRepository, TeamRepository, AlumniRepository};
pub use service::{CatalogStore, DatabaseService};
