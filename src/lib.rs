// SPDX-License-Identifier: MPL-2.0
//! `lightbox_dismiss` is a full-screen media viewer core with gesture dismissal.
//!
//! Wheel and swipe gestures drive a rubber-band visual feedback and close the
//! viewer once they cross a threshold. Closing runs a transition that is
//! completed either by the rendering layer or by a fallback timer, whichever
//! comes first, and releases the scroll lock and cancel-key listener exactly
//! once.

#![doc(html_root_url = "https://docs.rs/lightbox_dismiss/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod ui;
