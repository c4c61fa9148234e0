use crate::ui::mvi::UiState;

/// The counter's store state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub value: i64,
}

impl UiState for CounterState {}
