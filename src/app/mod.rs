// SPDX-License-Identifier: MPL-2.0
//! Application root: the gallery list and the viewer driver.
//!
//! The `App` routes gallery messages to the list state, resolves open
//! requests against the loaded catalog and forwards everything else to the
//! viewer through the [`ViewerDriver`].

pub mod driver;
pub mod script;

pub use driver::ViewerDriver;

use crate::application::port::{MediaSource, ViewerHost};
use crate::config::Config;
use crate::domain::media::MediaId;
use crate::ui::gallery;
use crate::ui::viewer::{self, Effect, InputMapper, Viewer};
use iced_core::{Event, Rectangle};
use std::sync::Arc;

/// Top-level messages.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    /// Open the gallery item with this id in the viewer.
    Open(MediaId),
    Viewer(viewer::Message),
}

/// Root application state.
#[derive(Debug)]
pub struct App {
    gallery: gallery::State,
    driver: ViewerDriver,
    input: InputMapper,
}

impl App {
    #[must_use]
    pub fn new(host: Arc<dyn ViewerHost>, config: &Config) -> Self {
        let viewer = Viewer::new(host, config.fallback_delay());
        Self {
            gallery: gallery::State::new(),
            driver: ViewerDriver::new(viewer),
            input: InputMapper::new(Rectangle::default(), config.wheel_line_height()),
        }
    }

    /// Loads the gallery from `source`.
    pub fn load(&mut self, source: &dyn MediaSource) {
        self.update(Message::Gallery(gallery::Message::Loaded(source.load())));
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Gallery(message) => {
                self.gallery.update(message);
                Effect::None
            }
            Message::Open(id) => match self.gallery.find(&id) {
                Some(item) => {
                    tracing::info!(%id, title = item.title(), "Opening item");
                    self.driver.dispatch(viewer::Message::Open(item))
                }
                None => {
                    tracing::warn!(%id, "No gallery item with this id");
                    Effect::None
                }
            },
            Message::Viewer(message) => self.driver.dispatch(message),
        }
    }

    /// Routes a native input event to the viewer.
    pub fn handle_event(&mut self, event: &Event) -> Effect {
        match self.input.map(event) {
            Some(message) => self.driver.dispatch(message),
            None => Effect::None,
        }
    }

    /// Updates the on-screen bounds of the viewer content.
    pub fn set_content_bounds(&mut self, bounds: Rectangle) {
        self.input.set_content_bounds(bounds);
    }

    #[must_use]
    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    #[must_use]
    pub fn viewer(&self) -> &Viewer {
        self.driver.viewer()
    }

    #[must_use]
    pub fn driver(&self) -> &ViewerDriver {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut ViewerDriver {
        &mut self.driver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::CatalogError;
    use crate::domain::media::MediaItem;
    use crate::infrastructure::TracingHost;
    use crate::ui::viewer::LifecycleState;
    use iced_core::{mouse, Point, Size};

    struct FixedSource(Result<Vec<MediaItem>, CatalogError>);

    impl MediaSource for FixedSource {
        fn load(&self) -> Result<Vec<MediaItem>, CatalogError> {
            self.0.clone()
        }
    }

    fn app() -> (App, Arc<TracingHost>) {
        let host = Arc::new(TracingHost::new());
        let mut app = App::new(host.clone(), &Config::default());
        app.load(&FixedSource(Ok(vec![MediaItem::new(
            MediaId::new("final"),
            "Final",
            "final.mp4",
            "final.jpg",
        )])));
        (app, host)
    }

    #[test]
    fn open_resolves_gallery_item() {
        let (mut app, host) = app();
        let effect = app.update(Message::Open(MediaId::new("final")));

        assert_eq!(effect, Effect::Opened);
        assert_eq!(app.viewer().state(), LifecycleState::Open);
        assert_eq!(
            app.viewer().active_item().map(|item| item.title()),
            Some("Final")
        );
        assert!(host.is_scroll_locked());
    }

    #[test]
    fn open_unknown_id_is_ignored() {
        let (mut app, host) = app();
        let effect = app.update(Message::Open(MediaId::new("missing")));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.viewer().state(), LifecycleState::Closed);
        assert_eq!(host.scroll_locks(), 0);
    }

    #[test]
    fn failed_load_leaves_nothing_to_open() {
        let host = Arc::new(TracingHost::new());
        let mut app = App::new(host, &Config::default());
        app.load(&FixedSource(Err(CatalogError::IoError("offline".into()))));

        assert_eq!(app.gallery().status(), gallery::Status::Empty);
        assert_eq!(app.update(Message::Open(MediaId::new("final"))), Effect::None);
    }

    #[tokio::test]
    async fn backdrop_press_starts_closing() {
        let (mut app, _host) = app();
        app.update(Message::Open(MediaId::new("final")));
        app.set_content_bounds(Rectangle::new(
            Point::new(100.0, 100.0),
            Size::new(200.0, 200.0),
        ));

        app.handle_event(&Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(10.0, 10.0),
        }));
        let effect = app.handle_event(&Event::Mouse(mouse::Event::ButtonPressed(
            mouse::Button::Left,
        )));

        assert!(matches!(effect, Effect::CloseScheduled { .. }));
        assert_eq!(app.viewer().state(), LifecycleState::Closing);
        assert!(app.driver().pending_timer().is_some());
    }
}
