// SPDX-License-Identifier: MPL-2.0
//! Viewer host port definition.
//!
//! While the viewer is not closed it owns two pieces of global state in
//! the surrounding surface: a scroll lock on the page body and a listener
//! for the cancel key. The viewer never calls these methods directly;
//! they are paired by [`HostLease`](crate::ui::viewer::HostLease).

/// Environment hooks acquired when the viewer opens and released when it closes.
///
/// Implementations receive exactly one `lock_scroll`/`install_cancel_key`
/// pair per viewing session, followed by exactly one
/// `remove_cancel_key`/`unlock_scroll` pair.
pub trait ViewerHost: Send + Sync {
    /// Prevents the page behind the viewer from scrolling.
    fn lock_scroll(&self);

    /// Restores page scrolling.
    fn unlock_scroll(&self);

    /// Starts routing the cancel key to the viewer.
    fn install_cancel_key(&self);

    /// Stops routing the cancel key to the viewer.
    fn remove_cancel_key(&self);
}
