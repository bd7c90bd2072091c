// SPDX-License-Identifier: MPL-2.0
//! Scoped ownership of the viewer's global side effects.

use crate::application::port::ViewerHost;
use std::fmt;
use std::sync::Arc;

/// Holds the scroll lock and cancel-key listener for one viewing session.
///
/// Acquiring the lease installs both; dropping it removes both. The lease
/// lives inside the open/closing session, so every path that tears the
/// session down releases the host exactly once.
pub struct HostLease {
    host: Arc<dyn ViewerHost>,
}

impl HostLease {
    /// Locks scrolling and installs the cancel-key listener.
    #[must_use]
    pub fn acquire(host: Arc<dyn ViewerHost>) -> Self {
        host.lock_scroll();
        host.install_cancel_key();
        Self { host }
    }
}

impl Drop for HostLease {
    fn drop(&mut self) {
        self.host.remove_cancel_key();
        self.host.unlock_scroll();
    }
}

impl fmt::Debug for HostLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostLease").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::TracingHost;

    #[test]
    fn acquire_and_drop_pair_up() {
        let host = Arc::new(TracingHost::new());
        let lease = HostLease::acquire(host.clone());
        assert!(host.is_scroll_locked());
        assert!(host.is_listening());

        drop(lease);
        assert!(!host.is_scroll_locked());
        assert!(!host.is_listening());
        assert_eq!(host.scroll_unlocks(), 1);
        assert_eq!(host.key_removals(), 1);
    }
}
