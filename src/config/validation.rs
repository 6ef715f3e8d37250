//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{ProgClubError, Result};
use super::Settings;
use tracing_subscriber::EnvFilter;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_database_config(&settings.database)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate listener configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(ProgClubError::Config(
            "Server host is required".to_string()
        ));
    }

    if config.port == 0 {
        return Err(ProgClubError::Config(
            "Server port must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(ProgClubError::Config(
            "Database URL is required".to_string()
        ));
    }

    if config.max_connections == 0 {
        return Err(ProgClubError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(ProgClubError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    if config.acquire_timeout_seconds == 0 {
        return Err(ProgClubError::Config(
            "Acquire timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
///
/// `level` takes the same directive syntax as `RUST_LOG`, e.g.
/// `info,sqlx=warn`. A bare word must be a level: `EnvFilter` would read it
/// as a target name, which hides typos such as `verbose`.
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(ProgClubError::Config(
            "Log level is required".to_string()
        ));
    }

    if let Err(e) = EnvFilter::try_new(&config.level) {
        return Err(ProgClubError::Config(
            format!("Invalid log level: {}: {}", config.level, e)
        ));
    }

    let valid_levels = ["off", "trace", "debug", "info", "warn", "error"];
    let unknown_bare_level = config
        .level
        .split(',')
        .map(str::trim)
        .filter(|directive| !directive.is_empty() && !directive.contains(['=', '[']))
        .find(|directive| !valid_levels.contains(&directive.to_ascii_lowercase().as_str()));
    if let Some(directive) = unknown_bare_level {
        return Err(ProgClubError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", directive, valid_levels)
        ));
    }

    Ok(())
}
