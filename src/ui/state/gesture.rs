// SPDX-License-Identifier: MPL-2.0
//! Dismiss gesture tracking
//!
//! Accumulates wheel and touch input into a clamped drag vector and a
//! separate wheel energy. Only rightward and downward motion counts.

use crate::config::defaults::WHEEL_DRAG_DAMPING;
use crate::domain::dismiss::{DragVector, WheelEnergy};
use iced_core::Point;

/// Tracks one viewing session's dismiss gesture
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    /// Offset accumulated since the gesture started
    drag: DragVector,

    /// Raw downward wheel delta accumulated since playback started
    wheel_energy: WheelEnergy,

    /// Touch position where the current swipe started
    anchor: Option<Point>,
}

impl GestureTracker {
    #[must_use]
    pub fn drag(&self) -> DragVector {
        self.drag
    }

    #[must_use]
    pub fn wheel_energy(&self) -> WheelEnergy {
        self.wheel_energy
    }

    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Applies a wheel delta. Returns false when the delta was ignored.
    ///
    /// The vertical drag follows the wheel at a damped rate so the visual
    /// feedback lags behind the energy that decides the close.
    pub fn on_wheel(&mut self, delta_y: f32) -> bool {
        if !(delta_y > 0.0 && delta_y.is_finite()) {
            return false;
        }

        self.wheel_energy = self.wheel_energy.accumulate(delta_y);
        self.drag = self.drag.with_added_y(delta_y * WHEEL_DRAG_DAMPING);
        true
    }

    /// Starts a swipe at `position`.
    pub fn on_touch_start(&mut self, position: Point) {
        self.anchor = Some(position);
        self.drag = DragVector::ZERO;
    }

    /// Updates the drag vector from the current touch position.
    /// Returns false when no swipe is in progress.
    pub fn on_touch_move(&mut self, position: Point) -> bool {
        let Some(anchor) = self.anchor else {
            return false;
        };

        self.drag = DragVector::new(position.x - anchor.x, position.y - anchor.y);
        true
    }

    /// Ends the swipe, returning the vector to evaluate.
    /// Returns `None` when no swipe was in progress.
    pub fn on_touch_end(&mut self) -> Option<DragVector> {
        self.anchor.take().map(|_| self.drag)
    }

    /// Returns the drag vector to rest after a cancelled swipe.
    /// Wheel energy is kept.
    pub fn snap_back(&mut self) {
        self.drag = DragVector::ZERO;
    }

    /// Discards all gesture state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
