//! Base trait for UI state.

/// Marker trait for page state.
///
/// States are plain values: cloned for snapshots, compared to detect
/// changes, and defaulted when a page is (re)opened.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
