//! Shared store holding one reducer's state.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use super::reducer::Reducer;

/// Process-wide holder of a reducer's state.
///
/// Clones share the same state, so any part of the app holding a clone sees
/// every dispatch. Transitions go through [`Store::dispatch`] only.
pub struct Store<R: Reducer> {
    state: Arc<RwLock<R::State>>,
    version: Arc<AtomicU64>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Store<R> {
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    pub fn with_state(state: R::State) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
            version: Arc::new(AtomicU64::new(0)),
            _reducer: PhantomData,
        }
    }

    /// Run the reducer on the current state and store the result.
    pub fn dispatch(&self, intent: R::Intent) {
        let mut guard = self.state.write();
        let current = std::mem::take(&mut *guard);
        *guard = R::reduce(current, intent);
        self.version.fetch_add(1, Ordering::Release);
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.state.read().clone()
    }

    /// Borrow the state for a read without cloning it.
    pub fn select<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        f(&self.state.read())
    }

    /// Number of dispatches so far.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            version: Arc::clone(&self.version),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}
