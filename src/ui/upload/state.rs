//! State for the resume analyzer page.

use crate::analyzer::SelectedFile;
use crate::ui::mvi::UiState;

/// Blocking notification shown over the page until dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Submit was pressed with nothing selected. No request was sent.
    NoFileSelected,
    /// The upload finished without a usable report.
    AnalysisFailed,
}

impl Notice {
    pub fn title(self) -> &'static str {
        match self {
            Notice::NoFileSelected => "No file",
            Notice::AnalysisFailed => "Analysis failed",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::NoFileSelected => "Please select a file first!",
            Notice::AnalysisFailed => "Failed to analyze resume. Please try again.",
        }
    }
}

/// Path prompt used as the file picker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PickerState {
    pub input: String,
    /// Why the last confirmed path was refused.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadState {
    pub file: Option<SelectedFile>,
    pub loading: bool,
    /// Present only after a successful analysis.
    pub score: Option<u8>,
    pub suggestions: Vec<String>,
    pub notice: Option<Notice>,
    pub picker: Option<PickerState>,
    pub animation_tick: u8,
}

impl UiState for UploadState {}

impl UploadState {
    /// Whether the review control is enabled.
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.loading
    }

    pub fn is_picking(&self) -> bool {
        self.picker.is_some()
    }

    pub fn has_results(&self) -> bool {
        self.score.is_some()
    }
}
