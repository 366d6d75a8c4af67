// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the feed, navigation chrome, image viewer, and
//! toast notifications together and translates component events into side
//! effects like image fetching. Policy decisions (window sizing, theme
//! resolution, what an unimplemented action says) stay close to the update
//! loop so user-facing behavior is easy to audit.

mod message;
pub mod navigator;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use navigator::{Navigator, Route};

use crate::media::{self, ImageCache, Shape};
use crate::model::{dummy, Post, User};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::{ColorScheme, ThemeMode};
use crate::ui::{feed, image_viewer};
use crate::{config, error::Error};
use iced::{window, Element, Size, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Root Iced application state.
pub struct App {
    mode: ThemeMode,
    scheme: ColorScheme,
    navigator: Navigator,
    current_user: User,
    posts: Vec<Post>,
    feed: feed::State,
    /// Open full-screen viewer, if any.
    viewer: Option<image_viewer::State>,
    cache: ImageCache,
    notifications: notifications::Manager,
    /// Last known window size; the drag-to-dismiss threshold scales with it.
    window_size: Size,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_error) = match config::load() {
            Ok(config) => (config, None),
            Err(err) => {
                eprintln!("Failed to load settings: {}", err);
                (config::Config::default(), Some(err))
            }
        };

        let mode = flags.theme.or(config.theme).unwrap_or_default();

        let current_user = dummy::current_user();
        let posts = dummy::feed();

        let mut notifications = notifications::Manager::new();
        if config_error.is_some() {
            notifications.push(Notification::warning(
                "Settings could not be loaded; using defaults.",
            ));
        }

        let fetches = fetch_all(&current_user, &posts);

        let app = Self {
            mode,
            scheme: mode.scheme(),
            navigator: Navigator::new(),
            current_user,
            posts,
            feed: feed::State::new(),
            viewer: None,
            cache: ImageCache::new(),
            notifications,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        };

        (app, fetches)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Feed(message) => {
                let event = feed::update(&mut self.feed, message, &self.posts);
                self.handle_feed_event(event);
            }
            Message::Navbar(message) => self.handle_navbar(message),
            Message::Viewer(message) => {
                if let Some(viewer) = &mut self.viewer {
                    let event = viewer.update(message, self.window_size.height);
                    if event == image_viewer::Event::Dismissed {
                        self.viewer = None;
                    }
                }
            }
            Message::Notification(message) => self.notifications.handle(message),
            Message::Tick => self.notifications.tick(),
            Message::ImageFetched { url, result } => match result {
                Ok(fetched) => self.cache.insert(url, fetched),
                Err(err) => {
                    eprintln!("Failed to fetch {}: {}", url, err);
                    self.notifications
                        .push(Notification::warning("Couldn't load an image."));
                }
            },
            Message::WindowResized(size) => self.window_size = size,
        }

        Task::none()
    }

    fn handle_feed_event(&mut self, event: feed::Event) {
        match event {
            feed::Event::None => {}
            feed::Event::NotImplemented(action) => self.not_implemented(action.label()),
            feed::Event::AvatarTapped => self.not_implemented("Profile"),
            feed::Event::HashtagTapped(tag) => {
                self.notifications
                    .push(Notification::info(format!("Clicked on: #{}", tag)));
            }
            feed::Event::OpenImage(image) => {
                self.viewer = Some(image_viewer::State::open(image));
            }
        }
    }

    fn handle_navbar(&mut self, message: crate::ui::navbar::Message) {
        use crate::ui::navbar;

        match message {
            navbar::Message::AvatarPressed => self.not_implemented("Profile"),
            navbar::Message::ActionPressed => self.not_implemented("Highlights"),
            navbar::Message::Navigate(route) => {
                // Single-top: tapping the active item does nothing
                self.navigator.navigate(route);
            }
        }
    }

    fn not_implemented(&mut self, what: &str) {
        self.notifications
            .push(Notification::info(format!("{} is not implemented yet.", what)));
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    pub fn title(&self) -> String {
        "Crier".to_string()
    }

    pub fn theme(&self) -> Theme {
        self.mode.iced_theme()
    }
}

/// One fetch task per unique image in the feed, avatars circle-masked.
fn fetch_all(current_user: &User, posts: &[Post]) -> Task<Message> {
    let mut seen = std::collections::HashSet::new();
    let mut tasks = Vec::new();

    let mut spawn = |url: &str, shape: Shape| {
        if !seen.insert(url.to_string()) {
            return;
        }
        let url = url.to_string();
        let reply_url = url.clone();
        tasks.push(Task::perform(
            media::fetch(url, shape),
            move |result: Result<media::Fetched, Error>| Message::ImageFetched {
                url: reply_url.clone(),
                result,
            },
        ));
    };

    spawn(&current_user.avatar.url, Shape::Circle);
    for post in posts {
        spawn(&post.user.avatar.url, Shape::Circle);
        for image in &post.images {
            spawn(&image.url, Shape::Plain);
        }
    }

    Task::batch(tasks)
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window_settings())
        .run()
}

// Used by the view module and tests.
impl App {
    pub(crate) fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub(crate) fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    pub(crate) fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub(crate) fn current_user(&self) -> &User {
        &self.current_user
    }

    pub(crate) fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub(crate) fn feed_state(&self) -> &feed::State {
        &self.feed
    }

    pub(crate) fn viewer(&self) -> Option<&image_viewer::State> {
        self.viewer.as_ref()
    }

    pub(crate) fn cache(&self) -> &ImageCache {
        &self.cache
    }

    pub(crate) fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    pub(crate) fn window_size(&self) -> Size {
        self.window_size
    }
}
