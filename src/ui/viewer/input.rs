// SPDX-License-Identifier: MPL-2.0
//! Translation of native input events into viewer messages.
//!
//! Wheel deltas are converted to pixels and flipped so that a positive
//! value means scrolling toward the content below. Only the first finger
//! of a multi-touch sequence drives the swipe.

use super::component::Message;
use crate::config::defaults::DEFAULT_WHEEL_LINE_HEIGHT;
use iced_core::keyboard::{self, key};
use iced_core::mouse::{self, ScrollDelta};
use iced_core::touch::{self, Finger};
use iced_core::{Event, Point, Rectangle};

/// Stateful mapper from native events to [`Message`]s.
#[derive(Debug, Clone)]
pub struct InputMapper {
    /// Bounds of the media content; presses outside hit the backdrop.
    content_bounds: Rectangle,
    /// Pixels per wheel line.
    line_height: f32,
    /// Last known cursor position.
    cursor: Option<Point>,
    /// Finger driving the current swipe.
    finger: Option<Finger>,
}

impl InputMapper {
    #[must_use]
    pub fn new(content_bounds: Rectangle, line_height: f32) -> Self {
        Self {
            content_bounds,
            line_height,
            cursor: None,
            finger: None,
        }
    }

    /// Updates the content bounds after a layout change.
    pub fn set_content_bounds(&mut self, bounds: Rectangle) {
        self.content_bounds = bounds;
    }

    /// Maps a native event, returning the viewer message it produces.
    pub fn map(&mut self, event: &Event) -> Option<Message> {
        match event {
            Event::Mouse(mouse_event) => self.map_mouse(mouse_event),
            Event::Touch(touch_event) => self.map_touch(touch_event),
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(key::Named::Escape),
                ..
            }) => Some(Message::CancelKey),
            _ => None,
        }
    }

    fn map_mouse(&mut self, event: &mouse::Event) -> Option<Message> {
        match event {
            mouse::Event::WheelScrolled { delta } => Some(Message::Wheel {
                delta_y: self.wheel_pixels(delta),
            }),
            mouse::Event::CursorMoved { position } => {
                self.cursor = Some(*position);
                None
            }
            mouse::Event::CursorLeft => {
                self.cursor = None;
                None
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let cursor = self.cursor?;
                (!self.content_bounds.contains(cursor)).then_some(Message::BackdropClicked)
            }
            _ => None,
        }
    }

    fn map_touch(&mut self, event: &touch::Event) -> Option<Message> {
        match *event {
            touch::Event::FingerPressed { id, position } => {
                if self.finger.is_some() {
                    return None;
                }
                self.finger = Some(id);
                Some(Message::TouchStart(position))
            }
            touch::Event::FingerMoved { id, position } if self.finger == Some(id) => {
                Some(Message::TouchMove(position))
            }
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. }
                if self.finger == Some(id) =>
            {
                self.finger = None;
                Some(Message::TouchEnd)
            }
            _ => None,
        }
    }

    /// Converts a wheel delta to downward pixels.
    fn wheel_pixels(&self, delta: &ScrollDelta) -> f32 {
        match delta {
            ScrollDelta::Lines { y, .. } => -y * self.line_height,
            ScrollDelta::Pixels { y, .. } => -y,
        }
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new(Rectangle::default(), DEFAULT_WHEEL_LINE_HEIGHT)
    }
}
