// SPDX-License-Identifier: MPL-2.0
//! Dismiss gesture newtypes.
//!
//! This module provides type-safe wrappers for gesture values,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_FALLBACK_CLOSE_MS, DRAG_X_DISTANCE, DRAG_Y_DISTANCE, MAX_FALLBACK_CLOSE_MS,
    MIN_FALLBACK_CLOSE_MS,
};
use std::time::Duration;

/// Clamps a raw axis value into `[0, max]`, mapping NaN to zero.
fn clamp_axis(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

// =============================================================================
// DragVector
// =============================================================================

/// Accumulated drag offset since the gesture started, in pixels.
///
/// Both components are non-negative and bounded by the normalization
/// distances (`DRAG_X_DISTANCE` × `DRAG_Y_DISTANCE`). Only rightward and
/// downward motion is ever represented.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragVector {
    x: f32,
    y: f32,
}

impl DragVector {
    /// The at-rest vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a drag vector, clamping each axis to its valid range.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: clamp_axis(x, DRAG_X_DISTANCE),
            y: clamp_axis(y, DRAG_Y_DISTANCE),
        }
    }

    /// Horizontal offset.
    #[must_use]
    pub fn x(self) -> f32 {
        self.x
    }

    /// Vertical offset.
    #[must_use]
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns a copy with the vertical offset increased by `delta`.
    #[must_use]
    pub fn with_added_y(self, delta: f32) -> Self {
        Self::new(self.x, self.y + delta)
    }

    /// Returns true if both axes are zero.
    #[must_use]
    pub fn is_at_rest(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

// =============================================================================
// WheelEnergy
// =============================================================================

/// Raw downward wheel delta accumulated during a viewing session.
///
/// Energy only grows; it is discarded by replacing the value, never by
/// subtracting from it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct WheelEnergy(f32);

impl WheelEnergy {
    /// Returns the accumulated energy.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the energy increased by `delta`. Non-positive or non-finite
    /// deltas leave it unchanged.
    #[must_use]
    pub fn accumulate(self, delta: f32) -> Self {
        if delta.is_finite() && delta > 0.0 {
            Self(self.0 + delta)
        } else {
            self
        }
    }
}

// =============================================================================
// Progress
// =============================================================================

/// Normalized dismiss progress, guaranteed to be within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Progress(f32);

impl Progress {
    /// No progress.
    pub const NONE: Self = Self(0.0);
    /// Full progress.
    pub const FULL: Self = Self(1.0);

    /// Creates a progress value, clamping to `[0, 1]`. NaN maps to zero.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(clamp_axis(value, 1.0))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

// =============================================================================
// FallbackDelay
// =============================================================================

/// Delay before the fallback hard close fires, clamped to 50–2000 ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackDelay(u64);

impl FallbackDelay {
    /// Creates a delay from milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_FALLBACK_CLOSE_MS, MAX_FALLBACK_CLOSE_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for FallbackDelay {
    fn default() -> Self {
        Self(DEFAULT_FALLBACK_CLOSE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_vector_clamps_negative_to_zero() {
        let drag = DragVector::new(-15.0, -0.5);
        assert_eq!(drag, DragVector::ZERO);
        assert!(drag.is_at_rest());
    }

    #[test]
    fn drag_vector_clamps_to_distances() {
        let drag = DragVector::new(5_000.0, 5_000.0);
        assert_eq!(drag.x(), DRAG_X_DISTANCE);
        assert_eq!(drag.y(), DRAG_Y_DISTANCE);
    }

    #[test]
    fn drag_vector_maps_nan_to_zero() {
        let drag = DragVector::new(f32::NAN, 12.0);
        assert_eq!(drag.x(), 0.0);
        assert_eq!(drag.y(), 12.0);
    }

    #[test]
    fn with_added_y_saturates() {
        let drag = DragVector::new(10.0, 230.0).with_added_y(50.0);
        assert_eq!(drag.x(), 10.0);
        assert_eq!(drag.y(), DRAG_Y_DISTANCE);
    }

    #[test]
    fn wheel_energy_ignores_non_positive_deltas() {
        let energy = WheelEnergy::default().accumulate(30.0);
        assert_eq!(energy.accumulate(0.0), energy);
        assert_eq!(energy.accumulate(-40.0), energy);
        assert_eq!(energy.accumulate(f32::INFINITY), energy);
        assert_eq!(energy.accumulate(10.0).value(), 40.0);
    }

    #[test]
    fn progress_is_bounded() {
        assert_eq!(Progress::new(-1.0), Progress::NONE);
        assert_eq!(Progress::new(3.0), Progress::FULL);
        assert_eq!(Progress::new(0.25).value(), 0.25);
    }

    #[test]
    fn fallback_delay_clamps() {
        assert_eq!(FallbackDelay::from_millis(0).millis(), MIN_FALLBACK_CLOSE_MS);
        assert_eq!(FallbackDelay::from_millis(99_999).millis(), MAX_FALLBACK_CLOSE_MS);
        assert_eq!(FallbackDelay::default().as_duration(), Duration::from_millis(260));
    }
}
