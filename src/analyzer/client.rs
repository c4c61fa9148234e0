use std::time::Duration;

use reqwest::header::COOKIE;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use crate::analyzer::error::AnalyzeError;
use crate::analyzer::file::SelectedFile;
use crate::analyzer::response::{error_message, AnalysisReport};
use crate::config::AnalyzerConfig;

/// HTTP client for the resume analysis endpoint.
///
/// Cheap to clone; clones share the connection pool and cookie store.
#[derive(Clone)]
pub struct AnalyzerClient {
    client: Client,
    endpoint: String,
    field_name: String,
    cookie: Option<String>,
}

impl AnalyzerClient {
    pub fn new(config: &AnalyzerConfig) -> Result<Self, AnalyzeError> {
        let mut builder = Client::builder().cookie_store(config.with_credentials);
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(AnalyzeError::Setup)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            field_name: config.field_name.clone(),
            cookie: config
                .cookie
                .clone()
                .filter(|_| config.with_credentials),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Upload `file` once and decode the report.
    ///
    /// No retries: any failure is returned as-is.
    pub async fn analyze(&self, file: &SelectedFile) -> Result<AnalysisReport, AnalyzeError> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|e| AnalyzeError::ReadFile {
                path: file.path.clone(),
                source: e,
            })?;
        let size = bytes.len();

        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(file.mime_type())
            .map_err(AnalyzeError::Setup)?;
        let form = Form::new().part(self.field_name.clone(), part);

        let mut request = self.client.post(&self.endpoint).multipart(form);
        if let Some(cookie) = &self.cookie {
            request = request.header(COOKIE, cookie);
        }

        tracing::info!(
            endpoint = %self.endpoint,
            file = %file.name,
            bytes = size,
            "uploading resume"
        );

        let response = request
            .send()
            .await
            .map_err(|e| AnalyzeError::Connection {
                endpoint: self.endpoint.clone(),
                source: e,
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| AnalyzeError::Connection {
                endpoint: self.endpoint.clone(),
                source: e,
            })?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "analyzer responded");

        if !status.is_success() {
            return Err(AnalyzeError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        AnalysisReport::from_json(&body)
    }
}
