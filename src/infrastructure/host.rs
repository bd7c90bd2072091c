// SPDX-License-Identifier: MPL-2.0
//! Logging [`ViewerHost`] adapter.
//!
//! Records each global side effect with `tracing` and keeps counters so
//! callers can check that every acquisition was paired with a release.

use crate::application::port::ViewerHost;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A [`ViewerHost`] that logs and counts scroll lock and cancel-key changes.
#[derive(Debug, Default)]
pub struct TracingHost {
    scroll_locks: AtomicUsize,
    scroll_unlocks: AtomicUsize,
    key_installs: AtomicUsize,
    key_removals: AtomicUsize,
}

impl TracingHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `lock_scroll` calls so far.
    #[must_use]
    pub fn scroll_locks(&self) -> usize {
        self.scroll_locks.load(Ordering::SeqCst)
    }

    /// Number of `unlock_scroll` calls so far.
    #[must_use]
    pub fn scroll_unlocks(&self) -> usize {
        self.scroll_unlocks.load(Ordering::SeqCst)
    }

    /// Number of `install_cancel_key` calls so far.
    #[must_use]
    pub fn key_installs(&self) -> usize {
        self.key_installs.load(Ordering::SeqCst)
    }

    /// Number of `remove_cancel_key` calls so far.
    #[must_use]
    pub fn key_removals(&self) -> usize {
        self.key_removals.load(Ordering::SeqCst)
    }

    /// Returns true while the scroll lock is held.
    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locks() > self.scroll_unlocks()
    }

    /// Returns true while the cancel-key listener is installed.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.key_installs() > self.key_removals()
    }
}

impl ViewerHost for TracingHost {
    fn lock_scroll(&self) {
        let count = self.scroll_locks.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(count, "Scroll locked");
    }

    fn unlock_scroll(&self) {
        let count = self.scroll_unlocks.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(count, "Scroll unlocked");
    }

    fn install_cancel_key(&self) {
        let count = self.key_installs.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(count, "Cancel key listener installed");
    }

    fn remove_cancel_key(&self) {
        let count = self.key_removals.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(count, "Cancel key listener removed");
    }
}
