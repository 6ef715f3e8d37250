//! Error handling for the club API
//!
//! This module defines the main error type used throughout the application
//! and how each failure is rendered to HTTP clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::projection::ValidationError;

/// Main error type for the club API
#[derive(Error, Debug)]
pub enum ProgClubError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for club API operations
pub type Result<T> = std::result::Result<T, ProgClubError>;

/// Body returned to clients for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// `connectivity`, `validation`, `database` or `internal`
    #[schema(example = "validation")]
    pub error_kind: String,
    #[schema(example = "invalid value 'Cancelled' for field event.type")]
    pub message: String,
}

impl ProgClubError {
    /// True when the store could not be reached at all, as opposed to
    /// answering with something we could not use.
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            ProgClubError::Database(
                sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::Io(_)
                    | sqlx::Error::Tls(_)
                    | sqlx::Error::WorkerCrashed
            )
        )
    }

    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            ProgClubError::Database(_) => self.is_connectivity(),
            ProgClubError::Migration(_) => false,
            ProgClubError::Config(_) => false,
            ProgClubError::ConfigLoad(_) => false,
            ProgClubError::Validation(_) => false,
            ProgClubError::Io(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ProgClubError::Migration(_) => ErrorSeverity::Critical,
            ProgClubError::Config(_) => ErrorSeverity::Critical,
            ProgClubError::ConfigLoad(_) => ErrorSeverity::Critical,
            ProgClubError::Database(_) if self.is_connectivity() => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }

    /// Stable machine-readable name reported in [`ErrorBody::error_kind`].
    pub fn error_kind(&self) -> &'static str {
        match self {
            ProgClubError::Database(_) if self.is_connectivity() => "connectivity",
            ProgClubError::Database(_) => "database",
            ProgClubError::Validation(_) => "validation",
            _ => "internal",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        if self.is_connectivity() {
            StatusCode::SERVICE_UNAVAILABLE
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// Message safe to hand to clients. Only validation failures carry
    /// their details; driver errors stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ProgClubError::Validation(e) => e.to_string(),
            ProgClubError::Database(_) if self.is_connectivity() => {
                "database is unreachable".to_string()
            }
            ProgClubError::Database(_) => "database query failed".to_string(),
            _ => "internal server error".to_string(),
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error_kind: self.error_kind().to_string(),
            message: self.public_message(),
        }
    }
}

impl IntoResponse for ProgClubError {
    fn into_response(self) -> Response {
        tracing::error!(
            error = %self,
            error_kind = self.error_kind(),
            severity = %self.severity(),
            "Request failed"
        );
        (self.status_code(), Json(self.to_body())).into_response()
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
