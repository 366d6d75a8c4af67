// SPDX-License-Identifier: MPL-2.0
//! Top and bottom navigation bars.
//!
//! The top bar shows the signed-in user's avatar, the brand mark (or the
//! screen title off Home), and a single action button. The bottom bar lists
//! every route and highlights the one matching the navigator's current
//! route.

use crate::app::navigator::Route;
use crate::media::ImageCache;
use crate::model::User;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use crate::ui::{icons, styles};
use iced::font::Weight;
use iced::widget::{button, mouse_area, rule, text, Column, Container, Row, Space};
use iced::{alignment, ContentFit, Element, Font, Length};

/// Messages emitted by the navigation chrome.
#[derive(Debug, Clone)]
pub enum Message {
    /// The avatar button on the top bar.
    AvatarPressed,
    /// The action button on the top bar.
    ActionPressed,
    /// A bottom bar item was tapped.
    Navigate(Route),
}

/// Contextual data needed to render the bars.
pub struct ViewContext<'a> {
    pub current: Route,
    pub user: &'a User,
    pub cache: &'a ImageCache,
    pub scheme: &'a ColorScheme,
}

/// Renders the top bar. On Home the brand mark sits centered; elsewhere the
/// screen title follows the avatar.
pub fn top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let avatar = mouse_area(avatar_image(ctx)).on_press(Message::AvatarPressed);

    let action = button(icons::sized(
        icons::SPARKLE,
        sizing::ICON_MD,
        ctx.scheme.text_secondary,
    ))
    .padding(spacing::XS)
    .style(styles::flat(ctx.scheme.text_secondary))
    .on_press(Message::ActionPressed);

    let middle: Element<'a, Message> = if ctx.current == Route::Home {
        Container::new(icons::sized(
            icons::BRAND,
            sizing::ICON_LG,
            ctx.scheme.brand_primary,
        ))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
    } else {
        let title_color = ctx.scheme.text_primary;
        Container::new(
            text(ctx.current.title())
                .size(typography::TITLE)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                })
                .style(move |_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(title_color),
                }),
        )
        .width(Length::Fill)
        .padding(iced::Padding {
            left: spacing::LG,
            ..iced::Padding::ZERO
        })
        .align_x(alignment::Horizontal::Left)
        .into()
    };

    let row = Row::new()
        .padding(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(avatar)
        .push(middle)
        .push(action);

    Column::new()
        .push(
            Container::new(row)
                .width(Length::Fill)
                .style(styles::bar(ctx.scheme.surface_primary)),
        )
        .push(rule::horizontal(1))
        .into()
}

/// Renders the bottom bar. An item is selected iff its route equals the
/// current route.
pub fn bottom_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().width(Length::Fill).align_y(alignment::Vertical::Center);

    for route in Route::ALL {
        let selected = route == ctx.current;
        let color = if selected {
            ctx.scheme.brand_primary
        } else {
            ctx.scheme.text_secondary
        };

        let item = button(
            Container::new(icons::sized(route.glyph(), sizing::ICON_MD, color))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::flat(color))
        .on_press(Message::Navigate(route));

        row = row.push(item);
    }

    Column::new()
        .push(rule::horizontal(1))
        .push(
            Container::new(row)
                .width(Length::Fill)
                .style(styles::bar(ctx.scheme.surface_primary)),
        )
        .into()
}

fn avatar_image<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let size = Length::Fixed(sizing::AVATAR_SM);
    let avatar = &ctx.user.avatar;

    match ctx.cache.get(&avatar.url) {
        Some(fetched) => iced::widget::image(fetched.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(size)
            .height(size)
            .into(),
        None => Container::new(Space::new().width(size).height(size))
            .style(styles::circle(avatar.color_average, sizing::AVATAR_SM))
            .into(),
    }
}
