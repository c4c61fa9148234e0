//! Client side of the remote resume analysis service.
//!
//! The service itself is external. This module only knows how to upload a
//! file as `multipart/form-data` and how to read back
//! `{ "score": number, "suggestions": [string] }`.

mod client;
mod error;
mod file;
mod response;

pub use client::AnalyzerClient;
pub use error::AnalyzeError;
pub use file::{PickError, SelectedFile};
pub use response::{AnalysisReport, MAX_SCORE};
