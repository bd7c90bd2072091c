// SPDX-License-Identifier: MPL-2.0
//! Input replay scripts.
//!
//! A script is a TOML document with `[[step]]` tables tagged by `kind`:
//!
//! ```toml
//! [[step]]
//! kind = "play"
//!
//! [[step]]
//! kind = "wheel"
//! delta_y = 80.0
//!
//! [[step]]
//! kind = "wait"
//! ms = 300
//! ```

use super::driver::ViewerDriver;
use crate::error::{Error, Result};
use crate::ui::viewer::{Message, TransitionTarget};
use iced_core::Point;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    Play,
    Pause,
    Ended,
    Wheel {
        delta_y: f32,
    },
    TouchStart {
        x: f32,
        y: f32,
    },
    TouchMove {
        x: f32,
        y: f32,
    },
    TouchEnd,
    Backdrop,
    Close,
    Cancel,
    TransitionEnd {
        /// Whether the signal bubbled up from a descendant.
        #[serde(default)]
        descendant: bool,
    },
    /// Let timers run for `ms` milliseconds.
    Wait {
        ms: u64,
    },
}

impl Step {
    /// The viewer message for this step, or `None` for waits.
    #[must_use]
    pub fn to_message(&self) -> Option<Message> {
        let message = match *self {
            Step::Play => Message::PlaybackStarted,
            Step::Pause => Message::PlaybackPaused,
            Step::Ended => Message::PlaybackEnded,
            Step::Wheel { delta_y } => Message::Wheel { delta_y },
            Step::TouchStart { x, y } => Message::TouchStart(Point::new(x, y)),
            Step::TouchMove { x, y } => Message::TouchMove(Point::new(x, y)),
            Step::TouchEnd => Message::TouchEnd,
            Step::Backdrop => Message::BackdropClicked,
            Step::Close => Message::CloseRequested,
            Step::Cancel => Message::CancelKey,
            Step::TransitionEnd { descendant } => Message::TransitionEnded(if descendant {
                TransitionTarget::Descendant
            } else {
                TransitionTarget::Surface
            }),
            Step::Wait { .. } => return None,
        };
        Some(message)
    }
}

/// A parsed script.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Script {
    #[serde(default, rename = "step")]
    steps: Vec<Step>,
}

impl Script {
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

/// Parses a script from TOML text.
pub fn parse(text: &str) -> Result<Script> {
    toml::from_str(text).map_err(|err| Error::Script(err.to_string()))
}

/// Reads and parses a script file.
pub fn load(path: &Path) -> Result<Script> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

/// Replays `script` through `driver`, letting timers run during waits.
pub async fn run(script: &Script, driver: &mut ViewerDriver) {
    for step in script.steps() {
        match step.to_message() {
            Some(message) => {
                tracing::debug!(?step, "Replaying step");
                driver.dispatch(message);
            }
            None => {
                if let Step::Wait { ms } = *step {
                    driver.run_for(Duration::from_millis(ms)).await;
                }
            }
        }
    }
    driver.drain();
}
