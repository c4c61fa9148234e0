use std::path::Path;
use std::sync::mpsc::Sender;

use tokio::runtime::Handle;

use crate::analyzer::{AnalysisReport, AnalyzeError, AnalyzerClient, PickError, SelectedFile};
use crate::config::{Config, PageKind};
use crate::ui::counter::{CounterButton, CounterIntent, CounterReducer};
use crate::ui::events::AppEvent;
use crate::ui::mvi::{Reducer, Store};
use crate::ui::upload::{Notice, UploadIntent, UploadReducer, UploadState};

/// Result of pressing "Review Resume".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Request handed to the runtime; loading is now set.
    Started,
    /// Nothing selected; notice raised, no request.
    NoFile,
    /// A request is already in flight; control is disabled.
    Busy,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    page: PageKind,
    /// Process-wide counter store; survives page switches.
    counter: Store<CounterReducer>,
    counter_focus: CounterButton,
    /// Analyzer page session state (MVI pattern). Dropped on navigation.
    upload: UploadState,
    /// Bumped whenever the analyzer session is torn down.
    upload_session: u64,
    client: AnalyzerClient,
    accept: Vec<String>,
    runtime: Handle,
    events: Sender<AppEvent>,
}

impl App {
    pub fn new(
        config: &Config,
        client: AnalyzerClient,
        runtime: Handle,
        events: Sender<AppEvent>,
    ) -> Self {
        Self {
            should_quit: false,
            page: config.ui.initial_page,
            counter: Store::new(),
            counter_focus: CounterButton::default(),
            upload: UploadState::default(),
            upload_session: 0,
            client,
            accept: config.analyzer.accept.clone(),
            runtime,
            events,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn page(&self) -> PageKind {
        self.page
    }

    /// Navigate to `page`. Leaving the analyzer discards its session.
    pub fn switch_page(&mut self, page: PageKind) {
        if page == self.page {
            return;
        }
        if self.page == PageKind::Analyzer {
            if self.upload.loading {
                tracing::info!(
                    session = self.upload_session,
                    "leaving analyzer with upload in flight; result will be dropped"
                );
            }
            self.upload = UploadState::default();
            self.upload_session += 1;
        }
        self.page = page;
    }

    pub fn next_page(&mut self) {
        self.switch_page(self.page.next());
    }

    // -- Counter ------------------------------------------------------------

    /// Shared handle to the counter store.
    pub fn counter_store(&self) -> Store<CounterReducer> {
        self.counter.clone()
    }

    pub fn counter_value(&self) -> i64 {
        self.counter.select(|s| s.value)
    }

    pub fn dispatch_counter(&mut self, intent: CounterIntent) {
        self.counter.dispatch(intent);
    }

    pub fn counter_focus(&self) -> CounterButton {
        self.counter_focus
    }

    pub fn move_counter_focus(&mut self, delta: isize) {
        self.counter_focus = self.counter_focus.shift(delta);
    }

    pub fn press_counter_focus(&mut self) {
        self.dispatch_counter(self.counter_focus.intent());
    }

    // -- Analyzer -----------------------------------------------------------

    pub fn upload(&self) -> &UploadState {
        &self.upload
    }

    pub fn upload_session(&self) -> u64 {
        self.upload_session
    }

    pub fn accept(&self) -> &[String] {
        &self.accept
    }

    pub fn dispatch_upload(&mut self, intent: UploadIntent) {
        dispatch_mvi!(self, upload, UploadReducer, intent);
    }

    /// Open the path prompt, prefilled with the current file's directory.
    pub fn open_picker(&mut self) {
        let prefill = self
            .upload
            .file
            .as_ref()
            .and_then(|f| f.path.parent())
            .map(Path::to_path_buf)
            .or_else(|| std::env::current_dir().ok())
            .map(|dir| {
                let mut s = dir.to_string_lossy().into_owned();
                if !s.ends_with(std::path::MAIN_SEPARATOR) {
                    s.push(std::path::MAIN_SEPARATOR);
                }
                s
            })
            .unwrap_or_default();
        self.dispatch_upload(UploadIntent::OpenPicker { prefill });
    }

    /// Try the picker's current input as the selection.
    pub fn confirm_picker(&mut self) {
        let Some(picker) = &self.upload.picker else {
            return;
        };
        let input = picker.input.clone();
        if let Err(err) = self.select_path(&input) {
            tracing::debug!(input = %input, error = %err, "picker rejected path");
            self.dispatch_upload(UploadIntent::PickerRejected {
                reason: err.to_string(),
            });
        }
    }

    /// Run `input` through the accept filter and select it.
    pub fn select_path(&mut self, input: &str) -> Result<(), PickError> {
        let file = SelectedFile::pick(input, &self.accept)?;
        self.select_file(file);
        Ok(())
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        tracing::debug!(file = %file.name, "resume selected");
        self.dispatch_upload(UploadIntent::FileSelected(file));
    }

    /// Start an analysis of the selected file.
    ///
    /// `loading` is set before this returns; the request itself runs on the
    /// tokio runtime and reports back through [`AppEvent::AnalysisFinished`].
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.upload.loading {
            return SubmitOutcome::Busy;
        }
        let Some(file) = self.upload.file.clone() else {
            tracing::info!("submit rejected: no file selected");
            self.dispatch_upload(UploadIntent::SubmitRejected);
            return SubmitOutcome::NoFile;
        };

        self.dispatch_upload(UploadIntent::SubmitStarted);

        let client = self.client.clone();
        let events = self.events.clone();
        let session = self.upload_session;
        tracing::info!(session, file = %file.name, endpoint = %client.endpoint(), "submit accepted");
        self.runtime.spawn(async move {
            let result = client.analyze(&file).await;
            let _ = events.send(AppEvent::AnalysisFinished { session, result });
        });

        SubmitOutcome::Started
    }

    /// Apply a finished upload to the page, unless its session is gone.
    pub fn on_analysis_finished(
        &mut self,
        session: u64,
        result: Result<AnalysisReport, AnalyzeError>,
    ) {
        if session != self.upload_session {
            tracing::debug!(
                session,
                current = self.upload_session,
                "dropping result for a discarded analyzer session"
            );
            return;
        }

        match result {
            Ok(report) => {
                tracing::info!(
                    score = report.score,
                    suggestions = report.suggestions.len(),
                    "resume analyzed"
                );
                self.dispatch_upload(UploadIntent::AnalysisSucceeded(report));
            }
            Err(err) => {
                tracing::error!(kind = err.kind(), error = %err, "error analyzing resume");
                self.dispatch_upload(UploadIntent::AnalysisFailed);
            }
        }
    }

    pub fn notice(&self) -> Option<Notice> {
        self.upload.notice
    }

    pub fn dismiss_notice(&mut self) {
        self.dispatch_upload(UploadIntent::DismissNotice);
    }

    pub fn on_tick(&mut self) {
        if self.upload.loading {
            self.dispatch_upload(UploadIntent::AnimationTick);
        }
    }
}
