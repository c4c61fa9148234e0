use crate::ui::mvi::Reducer;
use crate::ui::upload::intent::UploadIntent;
use crate::ui::upload::state::{Notice, PickerState, UploadState};

pub struct UploadReducer;

impl Reducer for UploadReducer {
    type State = UploadState;
    type Intent = UploadIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UploadIntent::OpenPicker { prefill } => UploadState {
                picker: Some(PickerState {
                    input: prefill,
                    error: None,
                }),
                ..state
            },
            UploadIntent::PickerInput(ch) => match state.picker {
                Some(mut picker) => {
                    picker.input.push(ch);
                    picker.error = None;
                    UploadState {
                        picker: Some(picker),
                        ..state
                    }
                }
                None => state,
            },
            UploadIntent::PickerBackspace => match state.picker {
                Some(mut picker) => {
                    picker.input.pop();
                    picker.error = None;
                    UploadState {
                        picker: Some(picker),
                        ..state
                    }
                }
                None => state,
            },
            UploadIntent::PickerRejected { reason } => match state.picker {
                Some(picker) => UploadState {
                    picker: Some(PickerState {
                        error: Some(reason),
                        ..picker
                    }),
                    ..state
                },
                None => state,
            },
            UploadIntent::ClosePicker => UploadState {
                picker: None,
                ..state
            },
            UploadIntent::FileSelected(file) => UploadState {
                file: Some(file),
                picker: None,
                ..state
            },
            UploadIntent::SubmitRejected => UploadState {
                notice: Some(Notice::NoFileSelected),
                ..state
            },
            UploadIntent::SubmitStarted => {
                if !state.can_submit() {
                    return state;
                }
                UploadState {
                    loading: true,
                    animation_tick: 0,
                    ..state
                }
            }
            UploadIntent::AnalysisSucceeded(report) => UploadState {
                loading: false,
                score: Some(report.score),
                suggestions: report.suggestions,
                ..state
            },
            // Previous results stay on screen.
            UploadIntent::AnalysisFailed => UploadState {
                loading: false,
                notice: Some(Notice::AnalysisFailed),
                ..state
            },
            UploadIntent::DismissNotice => UploadState {
                notice: None,
                ..state
            },
            UploadIntent::AnimationTick => {
                if !state.loading {
                    return state;
                }
                UploadState {
                    animation_tick: state.animation_tick.wrapping_add(1),
                    ..state
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{AnalysisReport, SelectedFile};
    use std::path::PathBuf;

    fn with_file() -> UploadState {
        UploadState {
            file: Some(SelectedFile {
                name: "cv.pdf".into(),
                path: PathBuf::from("/tmp/cv.pdf"),
            }),
            ..UploadState::default()
        }
    }

    #[test]
    fn submit_started_sets_loading() {
        let state = UploadReducer::reduce(with_file(), UploadIntent::SubmitStarted);
        assert!(state.loading);
    }

    #[test]
    fn submit_started_without_file_is_ignored() {
        let state = UploadReducer::reduce(UploadState::default(), UploadIntent::SubmitStarted);
        assert!(!state.loading);
    }

    #[test]
    fn success_sets_results_and_clears_loading() {
        let loading = UploadReducer::reduce(with_file(), UploadIntent::SubmitStarted);
        let state = UploadReducer::reduce(
            loading,
            UploadIntent::AnalysisSucceeded(AnalysisReport {
                score: 72,
                suggestions: vec!["Add more keywords".into(), "Shorten summary".into()],
            }),
        );
        assert!(!state.loading);
        assert_eq!(state.score, Some(72));
        assert_eq!(state.suggestions, vec!["Add more keywords", "Shorten summary"]);
        assert!(state.notice.is_none());
    }

    #[test]
    fn failure_keeps_previous_results() {
        let mut state = with_file();
        state.score = Some(40);
        state.suggestions = vec!["Use bullet points".into()];
        let state = UploadReducer::reduce(state, UploadIntent::SubmitStarted);
        let state = UploadReducer::reduce(state, UploadIntent::AnalysisFailed);

        assert!(!state.loading);
        assert_eq!(state.score, Some(40));
        assert_eq!(state.suggestions, vec!["Use bullet points"]);
        assert_eq!(state.notice, Some(Notice::AnalysisFailed));
    }

    #[test]
    fn picker_typing_and_rejection() {
        let state = UploadReducer::reduce(
            UploadState::default(),
            UploadIntent::OpenPicker {
                prefill: "/tmp/".into(),
            },
        );
        let state = UploadReducer::reduce(state, UploadIntent::PickerInput('a'));
        let state = UploadReducer::reduce(
            state,
            UploadIntent::PickerRejected {
                reason: "nope".into(),
            },
        );
        let picker = state.picker.clone().unwrap();
        assert_eq!(picker.input, "/tmp/a");
        assert_eq!(picker.error.as_deref(), Some("nope"));

        // Editing clears the hint.
        let state = UploadReducer::reduce(state, UploadIntent::PickerBackspace);
        let picker = state.picker.unwrap();
        assert_eq!(picker.input, "/tmp/");
        assert!(picker.error.is_none());
    }

    #[test]
    fn file_selected_replaces_and_closes_picker() {
        let state = UploadReducer::reduce(
            with_file(),
            UploadIntent::OpenPicker {
                prefill: String::new(),
            },
        );
        let other = SelectedFile {
            name: "other.pdf".into(),
            path: PathBuf::from("/tmp/other.pdf"),
        };
        let state = UploadReducer::reduce(state, UploadIntent::FileSelected(other.clone()));
        assert_eq!(state.file, Some(other));
        assert!(!state.is_picking());
    }

    #[test]
    fn tick_only_animates_while_loading() {
        let idle = UploadReducer::reduce(with_file(), UploadIntent::AnimationTick);
        assert_eq!(idle.animation_tick, 0);

        let loading = UploadReducer::reduce(with_file(), UploadIntent::SubmitStarted);
        let ticked = UploadReducer::reduce(loading, UploadIntent::AnimationTick);
        assert_eq!(ticked.animation_tick, 1);
    }
}
