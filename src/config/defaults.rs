// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for the numeric
//! constants of the dismiss gesture. Constants are organized by category.
//!
//! # Categories
//!
//! - **Wheel**: Wheel energy threshold and visual damping
//! - **Swipe**: Per-axis commit thresholds and normalization distances
//! - **Feedback**: Coefficients of the drag-to-presentation mapping
//! - **Close**: Fallback delay for the closing transition
//! - **Input**: Wheel line height conversion

// ==========================================================================
// Wheel Defaults
// ==========================================================================

/// Accumulated downward wheel delta (px) at which the viewer closes.
pub const WHEEL_CLOSE_THRESHOLD: f32 = 120.0;

/// Fraction of each wheel delta applied to the vertical drag offset.
pub const WHEEL_DRAG_DAMPING: f32 = 0.4;

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Horizontal drag (px) that must be exceeded to commit a swipe.
pub const SWIPE_X_THRESHOLD: f32 = 80.0;

/// Vertical drag (px) that must be exceeded to commit a swipe.
pub const SWIPE_Y_THRESHOLD: f32 = 100.0;

/// Horizontal drag (px) that maps to full progress. Also the drag clamp.
pub const DRAG_X_DISTANCE: f32 = 200.0;

/// Vertical drag (px) that maps to full progress. Also the drag clamp.
pub const DRAG_Y_DISTANCE: f32 = 240.0;

// ==========================================================================
// Feedback Defaults
// ==========================================================================

/// Backdrop alpha when the gesture is at rest.
pub const OVERLAY_BASE_ALPHA: f32 = 0.8;

/// Fraction of the backdrop alpha removed at full progress.
pub const OVERLAY_FADE: f32 = 0.6;

/// Vertical translation per pixel of vertical drag.
pub const TRANSLATE_Y_FACTOR: f32 = 0.6;

/// Horizontal translation per pixel of horizontal drag.
pub const TRANSLATE_X_FACTOR: f32 = 0.5;

/// Scale reduction at full progress.
pub const SCALE_SHRINK: f32 = 0.05;

/// Content opacity reduction at full progress.
pub const CONTENT_FADE: f32 = 0.4;

// ==========================================================================
// Close Defaults
// ==========================================================================

/// Default delay before the fallback hard close fires (in milliseconds).
/// Matches the expected duration of the closing transition.
pub const DEFAULT_FALLBACK_CLOSE_MS: u64 = 260;

/// Minimum fallback delay (in milliseconds).
pub const MIN_FALLBACK_CLOSE_MS: u64 = 50;

/// Maximum fallback delay (in milliseconds).
pub const MAX_FALLBACK_CLOSE_MS: u64 = 2_000;

// ==========================================================================
// Input Defaults
// ==========================================================================

/// Pixels per wheel line for devices that report line deltas.
pub const DEFAULT_WHEEL_LINE_HEIGHT: f32 = 40.0;

/// Minimum wheel line height.
pub const MIN_WHEEL_LINE_HEIGHT: f32 = 1.0;

/// Maximum wheel line height.
pub const MAX_WHEEL_LINE_HEIGHT: f32 = 200.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Thresholds must be reachable inside the clamped drag range
    assert!(SWIPE_X_THRESHOLD > 0.0);
    assert!(SWIPE_Y_THRESHOLD > 0.0);
    assert!(SWIPE_X_THRESHOLD < DRAG_X_DISTANCE);
    assert!(SWIPE_Y_THRESHOLD < DRAG_Y_DISTANCE);
    assert!(WHEEL_CLOSE_THRESHOLD > 0.0);
    assert!(WHEEL_DRAG_DAMPING > 0.0 && WHEEL_DRAG_DAMPING <= 1.0);

    // Feedback coefficients keep every output in [0, 1]
    assert!(OVERLAY_BASE_ALPHA <= 1.0);
    assert!(OVERLAY_FADE < 1.0);
    assert!(SCALE_SHRINK < 1.0);
    assert!(CONTENT_FADE < 1.0);

    // Fallback delay validation
    assert!(MIN_FALLBACK_CLOSE_MS > 0);
    assert!(MAX_FALLBACK_CLOSE_MS >= MIN_FALLBACK_CLOSE_MS);
    assert!(DEFAULT_FALLBACK_CLOSE_MS >= MIN_FALLBACK_CLOSE_MS);
    assert!(DEFAULT_FALLBACK_CLOSE_MS <= MAX_FALLBACK_CLOSE_MS);

    // Wheel line height validation
    assert!(MIN_WHEEL_LINE_HEIGHT > 0.0);
    assert!(MAX_WHEEL_LINE_HEIGHT >= MIN_WHEEL_LINE_HEIGHT);
    assert!(DEFAULT_WHEEL_LINE_HEIGHT >= MIN_WHEEL_LINE_HEIGHT);
    assert!(DEFAULT_WHEEL_LINE_HEIGHT <= MAX_WHEEL_LINE_HEIGHT);
};
