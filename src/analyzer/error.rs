//! Error types for the analysis client.
//!
//! Every variant is a request failure from the user's point of view. The
//! variants only exist so the log says what actually went wrong.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while submitting a resume for analysis.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Setup(#[source] reqwest::Error),

    /// The selected file could not be read from disk.
    #[error("Failed to read '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Transport failure (DNS, connect, TLS, timeout).
    #[error("Connection to '{endpoint}' failed: {source}")]
    Connection {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("Analyzer returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The body was not a usable analysis report.
    #[error("Invalid analysis response: {0}")]
    InvalidResponse(String),
}

impl AnalyzeError {
    /// Short machine-friendly kind for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalyzeError::Setup(_) => "setup",
            AnalyzeError::ReadFile { .. } => "read_file",
            AnalyzeError::Connection { .. } => "connection",
            AnalyzeError::Status { .. } => "status",
            AnalyzeError::InvalidResponse(_) => "invalid_response",
        }
    }

    /// Whether the failure came from the server rather than the transport.
    pub fn is_server_side(&self) -> bool {
        matches!(
            self,
            AnalyzeError::Status { .. } | AnalyzeError::InvalidResponse(_)
        )
    }
}
