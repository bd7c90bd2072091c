// SPDX-License-Identifier: MPL-2.0
//! Open → Closing → Closed state machine.
//!
//! The viewer's lifecycle is one enumerated phase, changed only by
//! [`CloseLifecycle::apply`]. Session data (active item, playback, gesture,
//! host lease) exists only inside the phases that own it, so a closed
//! viewer cannot hold a stale item or a leaked scroll lock.
//!
//! ## Hard close
//!
//! Closing ends either when the closing transition reports completion on
//! the viewer surface or when the fallback timer for the current
//! [`CloseTicket`] elapses, whichever comes first. The loser arrives in a
//! phase that no longer matches and is ignored.

use super::lease::HostLease;
use crate::application::port::ViewerHost;
use crate::domain::dismiss::{Axis, DragVector, FallbackDelay};
use crate::domain::media::MediaItem;
use crate::domain::video::PlaybackState;
use crate::ui::state::GestureTracker;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Externally visible lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    /// No active item.
    #[default]
    Closed,
    /// Visible and interactive.
    Open,
    /// Closing transition in progress.
    Closing,
}

/// Identifies one closing transition.
///
/// A fallback timer carries the ticket of the transition that scheduled
/// it; it only tears down the viewer if that transition is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CloseTicket(u64);

impl CloseTicket {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Why a soft close was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Click on the backdrop, outside the content.
    Backdrop,
    /// The explicit close control.
    CloseControl,
    /// The cancel key.
    CancelKey,
    /// Wheel energy reached the close threshold.
    Wheel,
    /// A released swipe committed along an axis.
    Swipe(Axis),
}

/// Origin of a transition-completion signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionTarget {
    /// The viewer surface itself.
    Surface,
    /// A descendant whose signal bubbled up to the viewer.
    Descendant,
}

/// Inputs to the lifecycle state machine.
#[derive(Debug, Clone)]
pub enum Transition {
    /// Show an item.
    Open(Arc<MediaItem>),
    /// Start the closing transition.
    CloseSoft(CloseReason),
    /// Tear down immediately.
    CloseHard,
    /// The fallback timer for a closing transition elapsed.
    FallbackElapsed(CloseTicket),
    /// The rendering layer finished a transition.
    TransitionEnded(TransitionTarget),
}

/// Effects produced by lifecycle transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// An item is now shown.
    Opened,
    /// Closing started; the caller must deliver
    /// [`Transition::FallbackElapsed`] with `ticket` after `delay`.
    CloseScheduled { ticket: CloseTicket, delay: Duration },
    /// The viewer was torn down.
    Closed,
}

/// Data owned by a viewing session.
#[derive(Debug)]
struct Session {
    item: Arc<MediaItem>,
    playback: PlaybackState,
    _lease: HostLease,
}

#[derive(Debug)]
enum Phase {
    Closed,
    Open {
        session: Session,
        gesture: GestureTracker,
    },
    Closing {
        session: Session,
        /// Drag vector at the moment closing started.
        drag: DragVector,
        ticket: CloseTicket,
    },
}

impl Phase {
    fn state(&self) -> LifecycleState {
        match self {
            Phase::Closed => LifecycleState::Closed,
            Phase::Open { .. } => LifecycleState::Open,
            Phase::Closing { .. } => LifecycleState::Closing,
        }
    }

    fn session(&self) -> Option<&Session> {
        match self {
            Phase::Closed => None,
            Phase::Open { session, .. } | Phase::Closing { session, .. } => Some(session),
        }
    }

    fn pending_ticket(&self) -> Option<CloseTicket> {
        match self {
            Phase::Closing { ticket, .. } => Some(*ticket),
            _ => None,
        }
    }
}

/// The viewer's lifecycle state machine.
pub struct CloseLifecycle {
    phase: Phase,
    host: Arc<dyn ViewerHost>,
    fallback_delay: FallbackDelay,
    next_ticket: u64,
}

impl CloseLifecycle {
    #[must_use]
    pub fn new(host: Arc<dyn ViewerHost>, fallback_delay: FallbackDelay) -> Self {
        Self {
            phase: Phase::Closed,
            host,
            fallback_delay,
            next_ticket: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.phase.state()
    }

    /// The item being shown, while open or closing.
    #[must_use]
    pub fn active_item(&self) -> Option<&MediaItem> {
        self.phase.session().map(|session| session.item.as_ref())
    }

    #[must_use]
    pub fn playback(&self) -> PlaybackState {
        self.phase
            .session()
            .map_or(PlaybackState::Stopped, |session| session.playback)
    }

    /// The drag vector to present: live while open, frozen while closing.
    #[must_use]
    pub fn drag(&self) -> DragVector {
        match &self.phase {
            Phase::Closed => DragVector::ZERO,
            Phase::Open { gesture, .. } => gesture.drag(),
            Phase::Closing { drag, .. } => *drag,
        }
    }

    /// The gesture tracker, while open.
    #[must_use]
    pub fn gesture(&self) -> Option<&GestureTracker> {
        match &self.phase {
            Phase::Open { gesture, .. } => Some(gesture),
            _ => None,
        }
    }

    /// The ticket of the pending closing transition.
    #[must_use]
    pub fn pending_ticket(&self) -> Option<CloseTicket> {
        self.phase.pending_ticket()
    }

    /// Updates playback while open. Starting playback discards any gesture
    /// left over from before.
    pub fn set_playback(&mut self, playback: PlaybackState) {
        if let Phase::Open { session, gesture } = &mut self.phase {
            if playback.is_playing() {
                gesture.reset();
            }
            session.playback = playback;
        }
    }

    /// The gesture tracker, only while open and playing.
    pub fn tracking_gesture(&mut self) -> Option<&mut GestureTracker> {
        match &mut self.phase {
            Phase::Open { session, gesture } if session.playback.is_playing() => Some(gesture),
            _ => None,
        }
    }

    /// Applies a transition. This is the only place the phase changes.
    pub fn apply(&mut self, transition: Transition) -> Effect {
        let phase = std::mem::replace(&mut self.phase, Phase::Closed);

        let (next, effect) = match (phase, transition) {
            (Phase::Closed, Transition::Open(item)) => {
                tracing::info!(item = %item.id(), "Viewer opened");
                let session = Session {
                    item,
                    playback: PlaybackState::Stopped,
                    _lease: HostLease::acquire(Arc::clone(&self.host)),
                };
                let gesture = GestureTracker::default();
                (Phase::Open { session, gesture }, Effect::Opened)
            }
            (Phase::Open { mut session, .. }, Transition::Open(item)) => {
                tracing::info!(item = %item.id(), "Viewer switched item");
                session.item = item;
                session.playback = PlaybackState::Stopped;
                let gesture = GestureTracker::default();
                (Phase::Open { session, gesture }, Effect::Opened)
            }
            (Phase::Open { session, gesture }, Transition::CloseSoft(reason)) => {
                let ticket = CloseTicket(self.next_ticket);
                self.next_ticket += 1;
                let delay = self.fallback_delay.as_duration();
                tracing::debug!(?reason, ticket = ticket.0, "Viewer closing");

                let drag = gesture.drag();
                (
                    Phase::Closing {
                        session,
                        drag,
                        ticket,
                    },
                    Effect::CloseScheduled { ticket, delay },
                )
            }
            (old, Transition::CloseHard) if old.session().is_some() => teardown(old, "request"),
            (old, Transition::FallbackElapsed(elapsed))
                if old.pending_ticket() == Some(elapsed) =>
            {
                teardown(old, "fallback timer")
            }
            (old, Transition::TransitionEnded(TransitionTarget::Surface))
                if old.pending_ticket().is_some() =>
            {
                teardown(old, "transition end")
            }
            (old, transition) => {
                tracing::debug!(state = ?old.state(), ?transition, "Ignored lifecycle transition");
                (old, Effect::None)
            }
        };

        self.phase = next;
        effect
    }
}

/// Drops the session, releasing its host lease.
fn teardown(old: Phase, source: &str) -> (Phase, Effect) {
    if let Some(session) = old.session() {
        tracing::info!(item = %session.item.id(), source, "Viewer closed");
    }
    drop(old);
    (Phase::Closed, Effect::Closed)
}

impl fmt::Debug for CloseLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloseLifecycle")
            .field("phase", &self.phase)
            .field("fallback_delay", &self.fallback_delay)
            .field("next_ticket", &self.next_ticket)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::MediaId;
    use crate::infrastructure::TracingHost;

    fn item(id: &str) -> Arc<MediaItem> {
        Arc::new(MediaItem::new(MediaId::new(id), id, "clip.mp4", "clip.jpg"))
    }

    fn lifecycle() -> (CloseLifecycle, Arc<TracingHost>) {
        let host = Arc::new(TracingHost::new());
        let lifecycle = CloseLifecycle::new(host.clone(), FallbackDelay::default());
        (lifecycle, host)
    }

    fn schedule(lifecycle: &mut CloseLifecycle) -> CloseTicket {
        match lifecycle.apply(Transition::CloseSoft(CloseReason::CloseControl)) {
            Effect::CloseScheduled { ticket, delay } => {
                assert_eq!(delay, Duration::from_millis(260));
                ticket
            }
            other => panic!("expected CloseScheduled, got {other:?}"),
        }
    }

    #[test]
    fn starts_closed_without_side_effects() {
        let (lifecycle, host) = lifecycle();
        assert_eq!(lifecycle.state(), LifecycleState::Closed);
        assert!(lifecycle.active_item().is_none());
        assert_eq!(host.scroll_locks(), 0);
    }

    #[test]
    fn open_acquires_host_once() {
        let (mut lifecycle, host) = lifecycle();
        assert_eq!(lifecycle.apply(Transition::Open(item("a"))), Effect::Opened);
        assert_eq!(lifecycle.apply(Transition::Open(item("b"))), Effect::Opened);

        assert_eq!(lifecycle.state(), LifecycleState::Open);
        assert_eq!(lifecycle.active_item().map(|i| i.id().as_str()), Some("b"));
        assert_eq!(host.scroll_locks(), 1);
        assert_eq!(host.key_installs(), 1);
    }

    #[test]
    fn soft_close_keeps_item_until_hard_close() {
        let (mut lifecycle, host) = lifecycle();
        lifecycle.apply(Transition::Open(item("a")));
        schedule(&mut lifecycle);

        assert_eq!(lifecycle.state(), LifecycleState::Closing);
        assert!(lifecycle.active_item().is_some());
        assert!(host.is_scroll_locked());
    }

    #[test]
    fn soft_close_is_not_reentered() {
        let (mut lifecycle, _host) = lifecycle();
        lifecycle.apply(Transition::Open(item("a")));
        let ticket = schedule(&mut lifecycle);

        let again = lifecycle.apply(Transition::CloseSoft(CloseReason::CancelKey));
        assert_eq!(again, Effect::None);
        assert_eq!(lifecycle.pending_ticket(), Some(ticket));
    }

    #[test]
    fn soft_close_while_closed_is_ignored() {
        let (mut lifecycle, host) = lifecycle();
        let effect = lifecycle.apply(Transition::CloseSoft(CloseReason::Backdrop));
        assert_eq!(effect, Effect::None);
        assert_eq!(host.scroll_unlocks(), 0);
    }

    #[test]
    fn transition_end_on_surface_closes_and_releases_once() {
        let (mut lifecycle, host) = lifecycle();
        lifecycle.apply(Transition::Open(item("a")));
        let ticket = schedule(&mut lifecycle);

        let effect = lifecycle.apply(Transition::TransitionEnded(TransitionTarget::Surface));
        assert_eq!(effect, Effect::Closed);
        assert_eq!(lifecycle.state(), LifecycleState::Closed);
        assert!(lifecycle.active_item().is_none());

        // The fallback timer loses the race
        assert_eq!(
            lifecycle.apply(Transition::FallbackElapsed(ticket)),
            Effect::None
        );
        assert_eq!(host.scroll_unlocks(), 1);
        assert_eq!(host.key_removals(), 1);
    }

    #[test]
    fn descendant_transition_end_is_ignored() {
        let (mut lifecycle, _host) = lifecycle();
        lifecycle.apply(Transition::Open(item("a")));
        schedule(&mut lifecycle);

        let effect = lifecycle.apply(Transition::TransitionEnded(TransitionTarget::Descendant));
        assert_eq!(effect, Effect::None);
        assert_eq!(lifecycle.state(), LifecycleState::Closing);
    }

    #[test]
    fn transition_end_while_open_is_ignored() {
        let (mut lifecycle, _host) = lifecycle();
        lifecycle.apply(Transition::Open(item("a")));
        let effect = lifecycle.apply(Transition::TransitionEnded(TransitionTarget::Surface));
        assert_eq!(effect, Effect::None);
        assert_eq!(lifecycle.state(), LifecycleState::Open);
    }

    #[test]
    fn fallback_closes_when_no_completion_signal_arrives() {
        let (mut lifecycle, host) = lifecycle();
        lifecycle.apply(Transition::Open(item("a")));
        let ticket = schedule(&mut lifecycle);

        assert_eq!(
            lifecycle.apply(Transition::FallbackElapsed(ticket)),
            Effect::Closed
        );
        assert!(!host.is_scroll_locked());
        assert!(!host.is_listening());
    }

    #[test]
    fn stale_fallback_does_not_close_a_later_session() {
        let (mut lifecycle, _host) = lifecycle();
        lifecycle.apply(Transition::Open(item("a")));
        let first = schedule(&mut lifecycle);
        lifecycle.apply(Transition::CloseHard);

        lifecycle.apply(Transition::Open(item("b")));
        let second = schedule(&mut lifecycle);
        assert_ne!(first, second);

        assert_eq!(lifecycle.apply(Transition::FallbackElapsed(first)), Effect::None);
        assert_eq!(lifecycle.state(), LifecycleState::Closing);
        assert_eq!(
            lifecycle.apply(Transition::FallbackElapsed(second)),
            Effect::Closed
        );
    }

    #[test]
    fn hard_close_is_idempotent() {
        let (mut lifecycle, host) = lifecycle();
        lifecycle.apply(Transition::Open(item("a")));

        assert_eq!(lifecycle.apply(Transition::CloseHard), Effect::Closed);
        assert_eq!(lifecycle.apply(Transition::CloseHard), Effect::None);
        assert_eq!(lifecycle.state(), LifecycleState::Closed);
        assert_eq!(host.scroll_unlocks(), 1);
        assert_eq!(host.key_removals(), 1);
    }

    #[test]
    fn open_while_closing_is_ignored() {
        let (mut lifecycle, host) = lifecycle();
        lifecycle.apply(Transition::Open(item("a")));
        schedule(&mut lifecycle);

        assert_eq!(lifecycle.apply(Transition::Open(item("b"))), Effect::None);
        assert_eq!(lifecycle.active_item().map(|i| i.id().as_str()), Some("a"));
        assert_eq!(host.scroll_locks(), 1);
    }

    #[test]
    fn playback_only_changes_while_open() {
        let (mut lifecycle, _host) = lifecycle();
        lifecycle.set_playback(PlaybackState::Playing);
        assert_eq!(lifecycle.playback(), PlaybackState::Stopped);

        lifecycle.apply(Transition::Open(item("a")));
        lifecycle.set_playback(PlaybackState::Playing);
        assert!(lifecycle.playback().is_playing());
        assert!(lifecycle.tracking_gesture().is_some());

        lifecycle.set_playback(PlaybackState::Paused);
        assert!(lifecycle.tracking_gesture().is_none());
    }

    #[test]
    fn dropping_while_closing_releases_host() {
        let (mut lifecycle, host) = lifecycle();
        lifecycle.apply(Transition::Open(item("a")));
        schedule(&mut lifecycle);

        drop(lifecycle);
        assert!(!host.is_scroll_locked());
        assert_eq!(host.scroll_unlocks(), 1);
    }
}
