//! Utility modules
//! 
//! This module contains common utilities used throughout the application,
//! namely error handling and logging setup.

pub mod errors;
pub mod logging;

pub use errors::{ProgClubError, Result};
