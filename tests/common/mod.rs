//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use resume_desk::analyzer::{AnalysisReport, AnalyzeError, AnalyzerClient, SelectedFile};
use resume_desk::config::{AnalyzerConfig, Config};
use resume_desk::ui::app::App;
use resume_desk::ui::events::AppEvent;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};
use tempfile::TempDir;

pub const PDF_BYTES: &[u8] = b"%PDF-1.4\n% fake resume\n";

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Config pointing at `endpoint` with otherwise default settings.
pub fn config_for(endpoint: &str) -> Config {
    Config {
        analyzer: AnalyzerConfig {
            endpoint: endpoint.to_string(),
            ..AnalyzerConfig::default()
        },
        ..Config::default()
    }
}

/// Write a small PDF into a fresh temp dir.
pub fn temp_resume(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, PDF_BYTES).expect("Failed to write resume");
    (dir, path)
}

pub fn selected(path: &PathBuf) -> SelectedFile {
    SelectedFile::pick(path.to_str().unwrap(), &[".pdf".to_string()]).expect("pick resume")
}

/// Build an `App` bound to the current tokio runtime.
pub fn make_app(config: &Config) -> (App, Receiver<AppEvent>) {
    let client = AnalyzerClient::new(&config.analyzer).expect("client");
    let (tx, rx) = mpsc::channel();
    let app = App::new(
        config,
        client,
        tokio::runtime::Handle::current(),
        tx,
    );
    (app, rx)
}

/// Wait for the next `AnalysisFinished` event without blocking the runtime.
pub async fn next_analysis(
    rx: &Receiver<AppEvent>,
    timeout: Duration,
) -> (u64, Result<AnalysisReport, AnalyzeError>) {
    let deadline = Instant::now() + timeout;
    loop {
        match rx.try_recv() {
            Ok(AppEvent::AnalysisFinished { session, result }) => return (session, result),
            Ok(_) => continue,
            Err(mpsc::TryRecvError::Empty) => {
                assert!(Instant::now() < deadline, "timed out waiting for analysis");
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
            Err(mpsc::TryRecvError::Disconnected) => panic!("event channel closed"),
        }
    }
}
