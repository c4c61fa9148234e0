//! Configuration loading and validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AnalyzerConfig, Config, PageKind, UiConfig, DEFAULT_ENDPOINT};
