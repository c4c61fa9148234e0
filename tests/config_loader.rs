use resume_desk::config::{Config, ConfigError, PageKind, DEFAULT_ENDPOINT};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.analyzer.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.analyzer.field_name, "resume");
    assert_eq!(config.analyzer.accept, vec![".pdf".to_string()]);
    assert!(config.analyzer.with_credentials);
    assert!(config.analyzer.cookie.is_none());
    assert!(config.analyzer.timeout_seconds.is_none());
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.initial_page, PageKind::Analyzer);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("resume-desk/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
[analyzer]
endpoint = "http://localhost:5000/analyze-resume"
field_name = "cv"
accept = [".pdf", ".docx"]
with_credentials = false
timeout_seconds = 15

[ui]
tick_rate_ms = 100
initial_page = "counter"
"#,
    );

    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.analyzer.endpoint, "http://localhost:5000/analyze-resume");
    assert_eq!(config.analyzer.field_name, "cv");
    assert_eq!(config.analyzer.accept.len(), 2);
    assert!(!config.analyzer.with_credentials);
    assert_eq!(config.analyzer.timeout_seconds, Some(15));
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.ui.initial_page, PageKind::Counter);
}

#[test]
fn test_partial_file_fills_defaults() {
    let file = write_config("[analyzer]\nfield_name = \"file\"\n");
    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.analyzer.field_name, "file");
    assert_eq!(config.analyzer.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_parse_error_reports_path() {
    let file = write_config("[analyzer\nendpoint = ");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn test_validation_rejects_bad_endpoint() {
    let mut config = Config::default();
    config.analyzer.endpoint = "not a url".into();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));

    config.analyzer.endpoint = "ftp://example.com/upload".into();
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_rejects_empty_field_name() {
    let mut config = Config::default();
    config.analyzer.field_name = "  ".into();
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_rejects_undotted_extension() {
    let mut config = Config::default();
    config.analyzer.accept = vec!["pdf".into()];
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("pdf"));
}

#[test]
fn test_validation_rejects_zero_tick() {
    let file = write_config("[ui]\ntick_rate_ms = 0\n");
    assert!(matches!(
        Config::load_from(file.path()),
        Err(ConfigError::ValidationError { .. })
    ));
}
