//! Database repositories module
//! 
//! One repository per table; each only reads.

pub mod event;
pub mod project;
pub mod team;
pub mod alumni;

// Re-export repositories
pub use event::EventRepository;
pub use project::ProjectRepository;
pub use team::TeamRepository;
pub use alumni::AlumniRepository;
