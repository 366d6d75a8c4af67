// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media;
use crate::ui::theming::ThemeMode;
use crate::ui::{feed, image_viewer, navbar, notifications};
use iced::Size;

/// Command-line flags parsed in `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Theme override; falls back to the saved config, then to System.
    pub theme: Option<ThemeMode>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Feed(feed::Message),
    Navbar(navbar::Message),
    Viewer(image_viewer::Message),
    Notification(notifications::Message),
    /// A remote image finished downloading (or failed).
    ImageFetched {
        url: String,
        result: Result<media::Fetched, Error>,
    },
    /// Periodic tick for toast auto-dismiss.
    Tick,
    /// The window was resized; drives drag-to-dismiss thresholds.
    WindowResized(Size),
}
