// SPDX-License-Identifier: MPL-2.0
//! Drag-to-presentation mapping.
//!
//! Pure and stateless: a drag vector maps to the parameters the view
//! applies to the backdrop and the content. No easing is applied here;
//! the closing transition owns its own animation curve.

use super::newtypes::{DragVector, Progress};
use crate::config::defaults::{
    CONTENT_FADE, DRAG_X_DISTANCE, DRAG_Y_DISTANCE, OVERLAY_BASE_ALPHA, OVERLAY_FADE,
    SCALE_SHRINK, TRANSLATE_X_FACTOR, TRANSLATE_Y_FACTOR,
};

/// Presentation parameters derived from a drag vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualFeedback {
    /// How far the dismiss gesture has advanced.
    pub progress: Progress,
    /// Backdrop alpha, in `[0.32, 0.8]`.
    pub overlay_alpha: f32,
    /// Horizontal content translation in pixels.
    pub translate_x: f32,
    /// Vertical content translation in pixels.
    pub translate_y: f32,
    /// Content scale, in `[0.95, 1]`.
    pub scale: f32,
    /// Content opacity, in `[0.6, 1]`.
    pub content_opacity: f32,
}

impl VisualFeedback {
    /// Feedback for a gesture at rest.
    #[must_use]
    pub fn at_rest() -> Self {
        VisualMapper::default().map(DragVector::ZERO)
    }
}

impl Default for VisualFeedback {
    fn default() -> Self {
        Self::at_rest()
    }
}

/// Maps drag vectors to [`VisualFeedback`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualMapper {
    x_distance: f32,
    y_distance: f32,
}

impl Default for VisualMapper {
    fn default() -> Self {
        Self {
            x_distance: DRAG_X_DISTANCE,
            y_distance: DRAG_Y_DISTANCE,
        }
    }
}

impl VisualMapper {
    /// Creates a mapper normalizing against the given axis distances.
    ///
    /// A non-positive distance disables its axis: that axis contributes
    /// zero progress.
    #[must_use]
    pub fn new(x_distance: f32, y_distance: f32) -> Self {
        Self {
            x_distance,
            y_distance,
        }
    }

    /// Progress of the dominant axis.
    #[must_use]
    pub fn progress(&self, drag: DragVector) -> Progress {
        let progress_x = axis_progress(drag.x(), self.x_distance);
        let progress_y = axis_progress(drag.y(), self.y_distance);
        Progress::new(progress_x.max(progress_y))
    }

    #[must_use]
    pub fn map(&self, drag: DragVector) -> VisualFeedback {
        let progress = self.progress(drag);
        let p = progress.value();

        VisualFeedback {
            progress,
            overlay_alpha: OVERLAY_BASE_ALPHA * (1.0 - OVERLAY_FADE * p),
            translate_x: drag.x() * TRANSLATE_X_FACTOR,
            translate_y: drag.y() * TRANSLATE_Y_FACTOR,
            scale: 1.0 - SCALE_SHRINK * p,
            content_opacity: 1.0 - CONTENT_FADE * p,
        }
    }
}

fn axis_progress(offset: f32, distance: f32) -> f32 {
    if distance > 0.0 {
        (offset / distance).min(1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn at_rest_is_identity() {
        let feedback = VisualFeedback::at_rest();
        assert_eq!(feedback.progress, Progress::NONE);
        assert_abs_diff_eq!(feedback.overlay_alpha, 0.8);
        assert_abs_diff_eq!(feedback.scale, 1.0);
        assert_abs_diff_eq!(feedback.content_opacity, 1.0);
        assert_abs_diff_eq!(feedback.translate_x, 0.0);
        assert_abs_diff_eq!(feedback.translate_y, 0.0);
    }

    #[test]
    fn full_progress_hits_lower_bounds() {
        let feedback = VisualMapper::default().map(DragVector::new(0.0, 240.0));
        assert_eq!(feedback.progress, Progress::FULL);
        assert_abs_diff_eq!(feedback.overlay_alpha, 0.32, epsilon = 1e-6);
        assert_abs_diff_eq!(feedback.scale, 0.95, epsilon = 1e-6);
        assert_abs_diff_eq!(feedback.content_opacity, 0.6, epsilon = 1e-6);
        assert_abs_diff_eq!(feedback.translate_y, 144.0, epsilon = 1e-4);
    }

    #[test]
    fn dominant_axis_drives_progress() {
        let mapper = VisualMapper::default();
        // x: 100/200 = 0.5, y: 60/240 = 0.25
        let feedback = mapper.map(DragVector::new(100.0, 60.0));
        assert_abs_diff_eq!(feedback.progress.value(), 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(feedback.translate_x, 50.0, epsilon = 1e-4);
        assert_abs_diff_eq!(feedback.translate_y, 36.0, epsilon = 1e-4);
        assert_abs_diff_eq!(feedback.overlay_alpha, 0.8 * 0.7, epsilon = 1e-6);
        assert_abs_diff_eq!(feedback.scale, 0.975, epsilon = 1e-6);
        assert_abs_diff_eq!(feedback.content_opacity, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn outputs_stay_in_bounds_across_the_drag_range() {
        let mapper = VisualMapper::default();
        for xi in 0..=20 {
            for yi in 0..=24 {
                let drag = DragVector::new(xi as f32 * 10.0, yi as f32 * 10.0);
                let feedback = mapper.map(drag);
                let p = feedback.progress.value();
                assert!((0.0..=1.0).contains(&p));
                assert!(feedback.overlay_alpha >= 0.32 - 1e-6 && feedback.overlay_alpha <= 0.8);
                assert!(feedback.scale >= 0.95 - 1e-6 && feedback.scale <= 1.0);
                assert!(
                    feedback.content_opacity >= 0.6 - 1e-6 && feedback.content_opacity <= 1.0
                );
            }
        }
    }

    #[test]
    fn zero_distance_degrades_to_no_progress() {
        let mapper = VisualMapper::new(0.0, 0.0);
        let feedback = mapper.map(DragVector::new(150.0, 150.0));
        assert_eq!(feedback.progress, Progress::NONE);
        assert_abs_diff_eq!(feedback.overlay_alpha, 0.8);
    }
}
