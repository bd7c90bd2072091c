// SPDX-License-Identifier: MPL-2.0
//! Commit/cancel decision for dismiss gestures.
//!
//! Wheel input is evaluated incrementally against an energy threshold.
//! Touch input is evaluated once, on release: each axis is thresholded
//! independently and the axis claiming the dismissal must also dominate
//! the other one, so a diagonal swipe is attributed to exactly one axis.

use super::newtypes::{DragVector, WheelEnergy};
use crate::config::defaults::{SWIPE_X_THRESHOLD, SWIPE_Y_THRESHOLD, WHEEL_CLOSE_THRESHOLD};

/// Axis that claimed a committed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Outcome of evaluating a released swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Close the viewer.
    Commit(Axis),
    /// Snap back to rest.
    Cancel,
}

impl Decision {
    #[must_use]
    pub fn is_commit(self) -> bool {
        matches!(self, Self::Commit(_))
    }
}

/// Thresholds deciding whether a gesture closes the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DismissPolicy {
    x_threshold: f32,
    y_threshold: f32,
    wheel_threshold: f32,
}

impl Default for DismissPolicy {
    fn default() -> Self {
        Self {
            x_threshold: SWIPE_X_THRESHOLD,
            y_threshold: SWIPE_Y_THRESHOLD,
            wheel_threshold: WHEEL_CLOSE_THRESHOLD,
        }
    }
}

impl DismissPolicy {
    /// Returns true once accumulated wheel energy reaches the threshold.
    #[must_use]
    pub fn wheel_commits(&self, energy: WheelEnergy) -> bool {
        energy.value() >= self.wheel_threshold
    }

    /// Evaluates a released swipe.
    ///
    /// Horizontal wins when it exceeds its threshold and strictly exceeds
    /// the vertical magnitude. Vertical wins when it exceeds its threshold
    /// and is at least the horizontal magnitude, so exact ties go to the
    /// vertical axis.
    #[must_use]
    pub fn evaluate(&self, drag: DragVector) -> Decision {
        let (x, y) = (drag.x(), drag.y());

        if x > self.x_threshold && x > y.abs() {
            Decision::Commit(Axis::Horizontal)
        } else if y > self.y_threshold && y >= x.abs() {
            Decision::Commit(Axis::Vertical)
        } else {
            Decision::Cancel
        }
    }
}
