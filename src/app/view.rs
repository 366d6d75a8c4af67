// SPDX-License-Identifier: MPL-2.0
//! Top-level layout: navigation chrome around the current screen, with the
//! image viewer and toast overlays stacked on top.

use super::{App, Message, Route};
use crate::ui::notifications::toast;
use crate::ui::{feed, navbar, screens};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let scheme = app.scheme();

    let bars = navbar::ViewContext {
        current: app.navigator().current(),
        user: app.current_user(),
        cache: app.cache(),
        scheme,
    };

    let content: Element<'_, Message> = match app.navigator().current() {
        Route::Home => feed::view(app.feed_state(), app.posts(), app.cache(), scheme)
            .map(Message::Feed),
        route => screens::view(route.glyph(), route.title(), scheme),
    };

    let base = Column::new()
        .push(navbar::top_bar(&bars).map(Message::Navbar))
        .push(Container::new(content).width(Length::Fill).height(Length::Fill))
        .push(navbar::bottom_bar(&bars).map(Message::Navbar));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if let Some(viewer) = app.viewer() {
        layers = layers.push(
            viewer
                .view(app.cache(), scheme, app.window_size())
                .map(Message::Viewer),
        );
    }

    if !app.notifications().is_empty() {
        layers = layers.push(toast::view_overlay(app.notifications(), scheme).map(Message::Notification));
    }

    layers.into()
}
