// SPDX-License-Identifier: MPL-2.0
//! One feed post: avatar, author line, hashtag-annotated body, optional
//! image block, and the action row.

use crate::media::ImageCache;
use crate::model::{ImageHolder, Post};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use crate::ui::{hashtag, icons, image_grid, styles};
use chrono::Utc;
use iced::font::Weight;
use iced::widget::{button, mouse_area, text, Column, Container, Row, Space};
use iced::{alignment, ContentFit, Element, Font, Length};

/// Post actions that are not implemented yet; the host answers each with a
/// notice instead of failing silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Comment,
    Reblog,
    Like,
    Share,
}

impl Action {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Action::Comment => "Comment",
            Action::Reblog => "Reblog",
            Action::Like => "Like",
            Action::Share => "Share",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    AvatarPressed,
    HashtagPressed(String),
    ActionPressed(Action),
    Grid(image_grid::Message),
}

/// Everything needed to render one post.
pub struct ViewContext<'a> {
    pub post: &'a Post,
    /// Current carousel page, ignored by non-paged layouts.
    pub page: usize,
    pub cache: &'a ImageCache,
    pub scheme: &'a ColorScheme,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(author_line(ctx.post, ctx.scheme))
        .push(content(&ctx));

    Row::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(avatar(&ctx.post.user.avatar, ctx.cache))
        .push(body)
        .into()
}

/// Circular avatar; a circle-masked bitmap once fetched, a solid disc of
/// the average color before that.
fn avatar<'a>(image: &'a ImageHolder, cache: &ImageCache) -> Element<'a, Message> {
    let size = Length::Fixed(sizing::AVATAR);

    let picture: Element<'a, Message> = match cache.get(&image.url) {
        Some(fetched) => iced::widget::image(fetched.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(size)
            .height(size)
            .into(),
        None => Container::new(Space::new().width(size).height(size))
            .style(styles::circle(image.color_average, sizing::AVATAR))
            .into(),
    };

    mouse_area(picture).on_press(Message::AvatarPressed).into()
}

fn author_line<'a>(post: &'a Post, scheme: &ColorScheme) -> Element<'a, Message> {
    let bold = Font {
        weight: Weight::Bold,
        ..Font::default()
    };

    let name_color = scheme.text_primary;
    let meta_color = scheme.text_tertiary;

    let mut line = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            text(post.user.name.as_str())
                .size(typography::BODY_LG)
                .font(bold)
                .style(move |_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(name_color),
                }),
        );

    if post.user.verified {
        line = line.push(icons::sized(
            icons::VERIFIED,
            sizing::ICON_SM,
            scheme.brand_primary,
        ));
    }

    line.push(
        text(format!("@{}", post.user.handle))
            .size(typography::CAPTION)
            .style(move |_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(meta_color),
            }),
    )
    .push(icons::sized("·", typography::CAPTION, meta_color))
    .push(
        text(post.age_label(Utc::now()))
            .size(typography::CAPTION)
            .style(move |_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(meta_color),
            }),
    )
    .into()
}

fn content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let segments = hashtag::parse(&ctx.post.content);
    let body = hashtag::rich_content(&segments, ctx.scheme, Message::HashtagPressed);

    let mut column = Column::new().spacing(spacing::SM).push(body);

    if !ctx.post.images.is_empty() {
        column = column.push(
            image_grid::view(&ctx.post.images, ctx.page, ctx.cache, ctx.scheme)
                .map(Message::Grid),
        );
    }

    column.push(actions(ctx.post, ctx.scheme)).into()
}

/// Comment / reblog / like / share with counts; reblog and like tint brand
/// when the flag is set.
fn actions<'a>(post: &'a Post, scheme: &ColorScheme) -> Element<'a, Message> {
    let base = scheme.text_secondary;
    let active = scheme.brand_primary;

    let reblog_color = if post.reblogged { active } else { base };
    let like_color = if post.liked { active } else { base };
    let like_glyph = if post.liked {
        icons::LIKE
    } else {
        icons::LIKE_OUTLINE
    };

    Row::new()
        .width(Length::Fill)
        .padding(iced::Padding {
            right: spacing::XL,
            ..iced::Padding::ZERO
        })
        .align_y(alignment::Vertical::Center)
        .push(action_button(
            icons::COMMENT,
            Some(post.comments_count),
            base,
            scheme,
            Action::Comment,
        ))
        .push(Space::new().width(Length::Fill))
        .push(action_button(
            icons::REBLOG,
            Some(post.reblog_count),
            reblog_color,
            scheme,
            Action::Reblog,
        ))
        .push(Space::new().width(Length::Fill))
        .push(action_button(
            like_glyph,
            Some(post.like_count),
            like_color,
            scheme,
            Action::Like,
        ))
        .push(Space::new().width(Length::Fill))
        .push(action_button(icons::SHARE, None, base, scheme, Action::Share))
        .into()
}

fn action_button<'a>(
    glyph: &'a str,
    count: Option<u32>,
    color: iced::Color,
    scheme: &ColorScheme,
    action: Action,
) -> Element<'a, Message> {
    let count_color = scheme.text_secondary;

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(glyph, sizing::ICON_MD, color));

    if let Some(count) = count {
        row = row.push(
            text(count.to_string())
                .size(typography::CAPTION)
                .style(move |_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(count_color),
                }),
        );
    }

    button(row)
        .padding(spacing::XS)
        .style(styles::flat(color))
        .on_press(Message::ActionPressed(action))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dummy;

    #[test]
    fn action_labels_are_distinct() {
        let labels = [
            Action::Comment.label(),
            Action::Reblog.label(),
            Action::Like.label(),
            Action::Share.label(),
        ];
        let mut deduped = labels.to_vec();
        deduped.dedup();
        assert_eq!(deduped.len(), labels.len());
    }

    #[test]
    fn post_view_renders_for_every_dummy_post() {
        let cache = ImageCache::new();
        let scheme = ColorScheme::light();

        for post in dummy::feed() {
            let _element = view(ViewContext {
                post: &post,
                page: 0,
                cache: &cache,
                scheme: &scheme,
            });
        }
    }
}
