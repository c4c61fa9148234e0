//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is either something the user did (a key press, a confirmed
/// path) or something that happened to the page (an upload finished, a
/// spinner tick). Reducers turn intents into new states.
pub trait Intent: Send + 'static {}
