//! Resume analyzer page.
//!
//! Holds the transient upload session (selected file, loading flag, score,
//! suggestions) and renders it. The network call itself lives in
//! [`crate::analyzer`]; [`crate::ui::app::App`] wires the two together.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::UploadIntent;
pub use reducer::UploadReducer;
pub use state::{Notice, PickerState, UploadState};
pub use view::render_upload;
