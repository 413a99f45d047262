//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with per-kind process exit codes for scripting.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum SeedError {
    // Configuration
    #[error("Configuration file not found: {0}")]
    ConfigMissing(String),

    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("Required credential {0} is not set")]
    CredentialsUnset(String),

    // Remote service lifecycle
    #[error("{service} client failed to initialize: {reason}")]
    ServiceUnavailable { service: &'static str, reason: String },

    #[error("Document store handle is not available")]
    StoreUnavailable,

    // Remote writes
    #[error("Remote write to {target} failed: {reason}")]
    RemoteWrite { target: String, reason: String },

    // Data production and parsing
    #[error("Synthetic data generation failed: {0}")]
    Generation(String),

    #[error("Malformed {kind} document {id}: {reason}")]
    MalformedRecord {
        kind: &'static str,
        id: String,
        reason: String,
    },

    // Transport
    #[error("HTTP transport error")]
    Http(#[from] reqwest::Error),

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

impl SeedError {
    /// Stable error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            SeedError::ConfigMissing(_) => "CONFIG_MISSING",
            SeedError::ConfigInvalid(_) => "CONFIG_INVALID",
            SeedError::CredentialsUnset(_) => "CREDENTIALS_UNSET",
            SeedError::ServiceUnavailable { .. } => "SERVICE_UNAVAILABLE",
            SeedError::StoreUnavailable => "STORE_UNAVAILABLE",
            SeedError::RemoteWrite { .. } => "REMOTE_WRITE_FAILURE",
            SeedError::Generation(_) => "GENERATION_FAILURE",
            SeedError::MalformedRecord { .. } => "MALFORMED_RECORD",
            SeedError::Http(_) => "HTTP_ERROR",
            SeedError::Io(_) => "IO_ERROR",
        }
    }

    /// Process exit code, one per error kind
    pub fn exit_code(&self) -> i32 {
        match self {
            SeedError::ConfigMissing(_) | SeedError::ConfigInvalid(_) => 2,
            SeedError::CredentialsUnset(_) => 3,
            SeedError::ServiceUnavailable { .. } | SeedError::StoreUnavailable => 4,
            SeedError::RemoteWrite { .. } => 5,
            SeedError::Generation(_) => 6,
            SeedError::MalformedRecord { .. } => 7,
            SeedError::Http(_) | SeedError::Io(_) => 1,
        }
    }
}

/// Result type alias
pub type SeedResult<T> = Result<T, SeedError>;

/// Convenience constructors
impl SeedError {
    pub fn service_unavailable(service: &'static str, reason: impl Into<String>) -> Self {
        SeedError::ServiceUnavailable {
            service,
            reason: reason.into(),
        }
    }

    pub fn remote_write(target: impl Into<String>, reason: impl Into<String>) -> Self {
        SeedError::RemoteWrite {
            target: target.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed(kind: &'static str, id: impl Into<String>, reason: impl Into<String>) -> Self {
        SeedError::MalformedRecord {
            kind,
            id: id.into(),
            reason: reason.into(),
        }
    }

    pub fn generation(msg: impl Into<String>) -> Self {
        SeedError::Generation(msg.into())
    }
}
