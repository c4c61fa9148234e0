//! Terminal resume ATS analyzer with a store-backed counter widget.

pub mod analyzer;
pub mod config;
pub mod logging;
pub mod ui;
