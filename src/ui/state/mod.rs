// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the interaction state kept outside the viewer
//! component, following the principle of separation of concerns.

pub mod gesture;

// Re-export commonly used types for convenience
pub use gesture::GestureTracker;
