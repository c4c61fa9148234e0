use crate::analyzer::{AnalysisReport, SelectedFile};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum UploadIntent {
    /// Open the path prompt, optionally prefilled.
    OpenPicker { prefill: String },
    PickerInput(char),
    PickerBackspace,
    /// The confirmed path failed the accept filter.
    PickerRejected { reason: String },
    ClosePicker,
    /// A path passed the filter. Replaces any earlier selection.
    FileSelected(SelectedFile),
    /// Submit without a file: raise the notice, send nothing.
    SubmitRejected,
    /// Request is about to go out.
    SubmitStarted,
    AnalysisSucceeded(AnalysisReport),
    AnalysisFailed,
    DismissNotice,
    AnimationTick,
}

impl Intent for UploadIntent {}
