// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core rules with no presentation dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Beyond `std` it only leans on `chrono` for calendar dates and on
//! `nucleo-matcher` for character folding.
//!
//! # Modules
//!
//! - [`dismiss`]: Dismiss gesture types ([`DragVector`](dismiss::DragVector),
//!   [`DismissPolicy`](dismiss::DismissPolicy), [`VisualMapper`](dismiss::VisualMapper))
//! - [`media`]: Media types ([`MediaItem`](media::MediaItem),
//!   [`SearchQuery`](media::SearchQuery))
//! - [`video`]: Video playback types ([`PlaybackState`](video::PlaybackState))

pub mod dismiss;
pub mod media;
pub mod video;
