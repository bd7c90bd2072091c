// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its state, handles its own `Message` type and reports back to the
//! application through return values.
//!
//! - [`gallery`] - Catalog list with search
//! - [`viewer`] - Full-screen media viewer with gesture dismissal
//! - [`state`] - Reusable gesture state

pub mod gallery;
pub mod state;
pub mod viewer;
