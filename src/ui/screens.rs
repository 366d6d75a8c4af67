// SPDX-License-Identifier: MPL-2.0
//! Placeholder screens for routes that only exist as navigation targets so
//! far (Search, Notifications, Messages).

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::theming::ColorScheme;
use iced::widget::{text, Column, Container};
use iced::{alignment, Element, Length};

/// Centered glyph, title, and a short hint.
pub fn view<'a, Message: 'a>(
    glyph: &'a str,
    title: &'a str,
    scheme: &ColorScheme,
) -> Element<'a, Message> {
    let title_color = scheme.text_primary;
    let hint_color = scheme.text_tertiary;

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(icons::sized(glyph, sizing::ICON_LG, scheme.text_secondary))
        .push(
            text(title)
                .size(typography::TITLE)
                .style(move |_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(title_color),
                }),
        )
        .push(
            text("Nothing here yet.")
                .size(typography::BODY)
                .style(move |_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(hint_color),
                }),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
