//! Decoding of the analysis endpoint's JSON bodies.

use serde::Deserialize;

use super::error::AnalyzeError;

/// Highest score the endpoint may report.
pub const MAX_SCORE: u8 = 100;

/// Longest slice of an unstructured error body kept for the log.
const MAX_ERROR_BODY: usize = 200;

/// A decoded, validated analysis result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    /// ATS score in `0..=100`.
    pub score: u8,
    /// Improvement hints in server order.
    pub suggestions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawReport {
    score: Option<f64>,
    #[serde(default)]
    suggestions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawError {
    error: Option<String>,
    message: Option<String>,
}

impl AnalysisReport {
    /// Decode a successful response body.
    pub fn from_json(body: &[u8]) -> Result<Self, AnalyzeError> {
        let raw: RawReport = serde_json::from_slice(body)
            .map_err(|e| AnalyzeError::InvalidResponse(e.to_string()))?;

        let score = raw
            .score
            .ok_or_else(|| AnalyzeError::InvalidResponse("missing field `score`".to_string()))?;

        if !score.is_finite() || !(0.0..=f64::from(MAX_SCORE)).contains(&score) {
            return Err(AnalyzeError::InvalidResponse(format!(
                "score {} outside 0..={}",
                score, MAX_SCORE
            )));
        }

        Ok(Self {
            score: score.round() as u8,
            suggestions: raw.suggestions,
        })
    }
}

/// Extract a human-readable message from a non-success body.
///
/// Accepts `{"error": ".."}` or `{"message": ".."}`; anything else is
/// truncated verbatim.
pub fn error_message(body: &[u8]) -> String {
    if let Ok(raw) = serde_json::from_slice::<RawError>(body) {
        if let Some(msg) = raw.error.or(raw.message) {
            return msg;
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return "empty response body".to_string();
    }
    if text.chars().count() <= MAX_ERROR_BODY {
        text.to_string()
    } else {
        let cut: String = text.chars().take(MAX_ERROR_BODY).collect();
        format!("{}...", cut)
    }
}
