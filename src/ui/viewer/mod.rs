// SPDX-License-Identifier: MPL-2.0
//! Full-screen media viewer with gesture dismissal.
//!
//! The viewer is split the same way as the rest of the UI layer: a
//! [`component`] that owns state and turns messages into effects, a
//! [`lifecycle`] state machine for opening and closing, the [`lease`] that
//! scopes global host side effects, and an [`input`] mapper for native
//! events.

pub mod component;
pub mod input;
pub mod lease;
pub mod lifecycle;

pub use component::{Effect, Message, Viewer};
pub use input::InputMapper;
pub use lease::HostLease;
pub use lifecycle::{CloseReason, CloseTicket, LifecycleState, TransitionTarget};
