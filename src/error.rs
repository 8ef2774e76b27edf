//! Error types for the import pipeline.
//!
//! Every failure is fatal: the pipeline either runs to completion or stops
//! at the first error and reports it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised anywhere in the fetch → validate → map → submit pipeline.
#[derive(Debug, Error)]
pub enum ImportError {
    // IO errors (exit code 3)
    #[error("schema file not found: {path}")]
    SchemaNotFound { path: PathBuf },

    #[error("cannot read schema {path}: {source}")]
    SchemaRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch descriptor from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to submit package to {url}: {source}")]
    Submit {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid schema: {message}")]
    InvalidSchema { message: String },

    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    // Validation errors (exit code 1)
    #[error("descriptor failed schema validation with {} error(s)", errors.len())]
    SchemaViolation { errors: Vec<SchemaError> },

    #[error("unable to submit budget data package to CKAN: {body}")]
    Rejected { status: u16, body: String },
}

impl ImportError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SchemaNotFound { .. }
            | Self::SchemaRead { .. }
            | Self::Fetch { .. }
            | Self::Submit { .. } => 3,
            Self::InvalidJson { .. } | Self::InvalidSchema { .. } | Self::InvalidUrl { .. } => 2,
            Self::SchemaViolation { .. } | Self::Rejected { .. } => 1,
        }
    }
}

/// Single schema violation with path context.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SchemaError {
    /// JSON Pointer (RFC 6901) to the invalid field.
    pub path: String,
    /// Human-readable error message.
    pub message: String,
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}
