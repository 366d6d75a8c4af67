// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use crate::ui::{icons, styles};
use iced::widget::{button, container, text, Column, Container, Row};
use iced::{alignment, Element, Length};

/// Renders a single toast notification.
pub fn view<'a>(notification: &'a Notification, scheme: &ColorScheme) -> Element<'a, Message> {
    let accent = notification.severity().color(scheme);

    let message_widget = text(notification.message()).size(typography::BODY);

    let dismiss_button = button(icons::sized(icons::CROSS, sizing::ICON_SM, scheme.text_secondary))
        .on_press(Message::Dismiss(notification.id()))
        .padding(spacing::XXS)
        .style(styles::flat(scheme.text_secondary));

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::MD)
        .style(styles::toast(
            scheme.surface_secondary,
            accent,
            scheme.text_primary,
        ))
        .into()
}

/// Renders the toast overlay with all visible notifications, stacked in the
/// bottom-right corner.
pub fn view_overlay<'a>(manager: &'a Manager, scheme: &ColorScheme) -> Element<'a, Message> {
    let toasts: Vec<Element<'a, Message>> = manager
        .visible()
        .map(|notification| view(notification, scheme))
        .collect();

    if toasts.is_empty() {
        return container(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let toast_column = Column::with_children(toasts)
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Right);

    Container::new(toast_column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::LG)
        .into()
}
