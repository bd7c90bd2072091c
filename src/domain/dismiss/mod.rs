// SPDX-License-Identifier: MPL-2.0
//! Dismiss gesture domain types.
//!
//! Pure value objects and rules deciding whether a gesture closes the
//! viewer, and how far along it looks while it is still in progress.

pub mod newtypes;
pub mod policy;
pub mod visual;

// Re-export commonly used types
pub use newtypes::{DragVector, FallbackDelay, Progress, WheelEnergy};
pub use policy::{Axis, Decision, DismissPolicy};
pub use visual::{VisualFeedback, VisualMapper};
