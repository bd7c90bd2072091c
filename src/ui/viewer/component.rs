// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating gesture tracking, dismissal and close lifecycle.
//!
//! Input and playback signals arrive as [`Message`]s; the returned [`Effect`]
//! tells the caller what changed and, when closing starts, which fallback
//! timer to schedule.

use super::lifecycle::{
    self, CloseLifecycle, CloseReason, CloseTicket, LifecycleState, Transition,
    TransitionTarget,
};
use crate::application::port::ViewerHost;
use crate::domain::dismiss::{
    Decision, DismissPolicy, DragVector, FallbackDelay, VisualFeedback, VisualMapper,
};
use crate::domain::media::MediaItem;
use crate::domain::video::PlaybackState;
use crate::ui::state::GestureTracker;
use iced_core::Point;
use std::sync::Arc;
use std::time::Duration;

/// Messages emitted by the environment and routed to the viewer.
#[derive(Debug, Clone)]
pub enum Message {
    // ═══════════════════════════════════════════════════════════════════════
    // LIFECYCLE
    // ═══════════════════════════════════════════════════════════════════════
    /// Show an item.
    Open(Arc<MediaItem>),
    /// Click on the backdrop, outside the content.
    BackdropClicked,
    /// The explicit close control was pressed.
    CloseRequested,
    /// The cancel key was pressed.
    CancelKey,
    /// Tear the viewer down without the closing transition.
    CloseHard,
    /// The rendering layer finished a transition.
    TransitionEnded(TransitionTarget),
    /// The fallback timer scheduled for a closing transition elapsed.
    FallbackElapsed(CloseTicket),

    // ═══════════════════════════════════════════════════════════════════════
    // PLAYBACK
    // ═══════════════════════════════════════════════════════════════════════
    /// The media element started playing.
    PlaybackStarted,
    /// The media element paused (or stalled to buffer).
    PlaybackPaused,
    /// The media element reached the end.
    PlaybackEnded,

    // ═══════════════════════════════════════════════════════════════════════
    // GESTURES
    // ═══════════════════════════════════════════════════════════════════════
    /// Wheel scrolled; positive `delta_y` scrolls toward the content below.
    Wheel { delta_y: f32 },
    /// A swipe started at the given position.
    TouchStart(Point),
    /// The swipe moved to the given position.
    TouchMove(Point),
    /// The swipe was released.
    TouchEnd,
}

/// Effects produced by the viewer that the caller must act on.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// An item is now shown.
    Opened,
    /// The gesture moved; re-render with the new feedback.
    FeedbackChanged(VisualFeedback),
    /// Closing started; deliver [`Message::FallbackElapsed`] with `ticket`
    /// after `delay` unless the viewer closes first.
    CloseScheduled { ticket: CloseTicket, delay: Duration },
    /// The viewer was torn down.
    Closed,
}

impl From<lifecycle::Effect> for Effect {
    fn from(effect: lifecycle::Effect) -> Self {
        match effect {
            lifecycle::Effect::None => Effect::None,
            lifecycle::Effect::Opened => Effect::Opened,
            lifecycle::Effect::CloseScheduled { ticket, delay } => {
                Effect::CloseScheduled { ticket, delay }
            }
            lifecycle::Effect::Closed => Effect::Closed,
        }
    }
}

/// The full-screen media viewer.
#[derive(Debug)]
pub struct Viewer {
    lifecycle: CloseLifecycle,
    policy: DismissPolicy,
    mapper: VisualMapper,
}

impl Viewer {
    #[must_use]
    pub fn new(host: Arc<dyn ViewerHost>, fallback_delay: FallbackDelay) -> Self {
        Self {
            lifecycle: CloseLifecycle::new(host, fallback_delay),
            policy: DismissPolicy::default(),
            mapper: VisualMapper::default(),
        }
    }

    /// Handle a viewer message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Open(item) => self.lifecycle.apply(Transition::Open(item)).into(),
            Message::BackdropClicked => self.close_soft(CloseReason::Backdrop),
            Message::CloseRequested => self.close_soft(CloseReason::CloseControl),
            Message::CancelKey => self.close_soft(CloseReason::CancelKey),
            Message::CloseHard => self.lifecycle.apply(Transition::CloseHard).into(),
            Message::TransitionEnded(target) => self
                .lifecycle
                .apply(Transition::TransitionEnded(target))
                .into(),
            Message::FallbackElapsed(ticket) => self
                .lifecycle
                .apply(Transition::FallbackElapsed(ticket))
                .into(),

            Message::PlaybackStarted => self.set_playback(PlaybackState::Playing),
            Message::PlaybackPaused => self.set_playback(PlaybackState::Paused),
            Message::PlaybackEnded => self.set_playback(PlaybackState::Stopped),

            Message::Wheel { delta_y } => self.handle_wheel(delta_y),
            Message::TouchStart(position) => self.handle_touch_start(position),
            Message::TouchMove(position) => self.handle_touch_move(position),
            Message::TouchEnd => self.handle_touch_end(),
        }
    }

    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    /// Whether the active media is playing, for the surrounding chrome.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.lifecycle.playback().is_playing()
    }

    /// The item being shown, for title, metadata and download affordances.
    #[must_use]
    pub fn active_item(&self) -> Option<&MediaItem> {
        self.lifecycle.active_item()
    }

    /// Presentation parameters for the current frame.
    #[must_use]
    pub fn feedback(&self) -> VisualFeedback {
        self.mapper.map(self.lifecycle.drag())
    }

    /// The gesture tracker, while open.
    #[must_use]
    pub fn gesture(&self) -> Option<&GestureTracker> {
        self.lifecycle.gesture()
    }

    /// The ticket of the pending closing transition, if any.
    #[must_use]
    pub fn pending_close(&self) -> Option<CloseTicket> {
        self.lifecycle.pending_ticket()
    }

    fn close_soft(&mut self, reason: CloseReason) -> Effect {
        self.lifecycle.apply(Transition::CloseSoft(reason)).into()
    }

    fn set_playback(&mut self, playback: PlaybackState) -> Effect {
        self.lifecycle.set_playback(playback);
        Effect::None
    }

    fn handle_wheel(&mut self, delta_y: f32) -> Effect {
        let Some(gesture) = self.lifecycle.tracking_gesture() else {
            return Effect::None;
        };
        if !gesture.on_wheel(delta_y) {
            return Effect::None;
        }

        let energy = gesture.wheel_energy();
        if self.policy.wheel_commits(energy) {
            tracing::debug!(energy = energy.value(), "Wheel gesture committed");
            return self.close_soft(CloseReason::Wheel);
        }

        tracing::trace!(energy = energy.value(), drag_y = gesture.drag().y(), "Wheel");
        Effect::FeedbackChanged(self.mapper.map(gesture.drag()))
    }

    fn handle_touch_start(&mut self, position: Point) -> Effect {
        let Some(gesture) = self.lifecycle.tracking_gesture() else {
            return Effect::None;
        };
        gesture.on_touch_start(position);
        Effect::FeedbackChanged(self.mapper.map(DragVector::ZERO))
    }

    fn handle_touch_move(&mut self, position: Point) -> Effect {
        let Some(gesture) = self.lifecycle.tracking_gesture() else {
            return Effect::None;
        };
        if !gesture.on_touch_move(position) {
            return Effect::None;
        }

        tracing::trace!(x = gesture.drag().x(), y = gesture.drag().y(), "Swipe");
        Effect::FeedbackChanged(self.mapper.map(gesture.drag()))
    }

    fn handle_touch_end(&mut self) -> Effect {
        let Some(gesture) = self.lifecycle.tracking_gesture() else {
            return Effect::None;
        };
        let Some(drag) = gesture.on_touch_end() else {
            return Effect::None;
        };

        match self.policy.evaluate(drag) {
            Decision::Commit(axis) => {
                tracing::debug!(?axis, x = drag.x(), y = drag.y(), "Swipe committed");
                self.close_soft(CloseReason::Swipe(axis))
            }
            Decision::Cancel => {
                gesture.snap_back();
                Effect::FeedbackChanged(self.mapper.map(DragVector::ZERO))
            }
        }
    }
}
