//! Snapshot handoff for data refreshed by a background process.
//!
//! The built-in dataset and the dependency cache are rebuilt out-of-band on
//! a slow cadence while verification runs read them from worker threads. A
//! run must never observe a half-replaced value: readers take an `Arc` to
//! the current snapshot and keep using it for the whole run, and a refresh
//! swaps in a fully-built replacement without touching live readers.

use std::sync::{Arc, RwLock};

/// Atomic slot holding the current immutable snapshot of `T`.
#[derive(Debug, Default)]
pub struct Slot<T> {
    current: RwLock<Arc<T>>,
}

impl<T> Slot<T> {
    pub fn new(value: T) -> Self {
        Self {
            current: RwLock::new(Arc::new(value)),
        }
    }

    /// The snapshot that is current right now. The returned `Arc` stays
    /// valid across later swaps; a verification run loads once and holds on.
    pub fn load(&self) -> Arc<T> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Replace the snapshot with a fully-built new value.
    pub fn store(&self, value: T) {
        let mut slot = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Arc::new(value);
    }
}
