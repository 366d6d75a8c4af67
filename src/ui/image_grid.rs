// SPDX-License-Identifier: MPL-2.0
//! Image block layouts for a post.
//!
//! [`GridLayout::select`] dispatches purely on image count; the renderers
//! are reached only through it, so a layout never indexes past the length
//! its variant proves. Tiles draw the image's average color until the
//! decoded bitmap is cached, and every tile opens the full-screen viewer
//! on press.

use crate::media::ImageCache;
use crate::model::ImageHolder;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::theming::ColorScheme;
use crate::ui::{icons, styles};
use iced::widget::{container, mouse_area, Column, Container, Row, Space};
use iced::{alignment, ContentFit, Element, Length};

/// The five tile arrangements, one per supported image count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLayout {
    One,
    Two,
    Three,
    Four,
    /// Five or more images: swipeable paged carousel.
    Paged,
}

impl GridLayout {
    /// Picks the arrangement for `count` images; `None` when there is
    /// nothing to render.
    #[must_use]
    pub fn select(count: usize) -> Option<Self> {
        match count {
            0 => None,
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => Some(Self::Paged),
        }
    }
}

/// Keeps a carousel page inside `0..count`.
#[must_use]
pub fn clamp_page(page: usize, count: usize) -> usize {
    page.min(count.saturating_sub(1))
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A tile was pressed; the payload is the image's index in the list.
    ImagePressed(usize),
    PagePrev,
    PageNext,
}

/// Renders the image block for `images`. `page` only matters for the paged
/// layout and is clamped internally.
pub fn view<'a>(
    images: &'a [ImageHolder],
    page: usize,
    cache: &ImageCache,
    scheme: &ColorScheme,
) -> Element<'a, Message> {
    match GridLayout::select(images.len()) {
        None => Space::new().into(),
        Some(GridLayout::One) => one(&images[0], cache),
        Some(GridLayout::Two) => two(images, cache),
        Some(GridLayout::Three) => three(images, cache),
        Some(GridLayout::Four) => four(images, cache),
        Some(GridLayout::Paged) => paged(images, page, cache, scheme),
    }
}

/// One tile: average-color fill with the bitmap drawn over it once cached.
fn tile<'a>(index: usize, image: &'a ImageHolder, cache: &ImageCache, height: Length) -> Element<'a, Message> {
    let content: Element<'a, Message> = match cache.get(&image.url) {
        Some(fetched) => iced::widget::image(fetched.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Space::new().width(Length::Fill).height(Length::Fill).into(),
    };

    mouse_area(
        Container::new(content)
            .width(Length::Fill)
            .height(height)
            .style(styles::tile(image.color_average)),
    )
    .on_press(Message::ImagePressed(index))
    .into()
}

fn one<'a>(image: &'a ImageHolder, cache: &ImageCache) -> Element<'a, Message> {
    tile(0, image, cache, Length::Fixed(sizing::TILE_HEIGHT_SINGLE))
}

fn two<'a>(images: &'a [ImageHolder], cache: &ImageCache) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .height(Length::Fixed(sizing::TILE_HEIGHT))
        .push(tile(0, &images[0], cache, Length::Fill))
        .push(tile(1, &images[1], cache, Length::Fill))
        .into()
}

fn three<'a>(images: &'a [ImageHolder], cache: &ImageCache) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .height(Length::Fixed(sizing::TILE_HEIGHT))
        .push(tile(0, &images[0], cache, Length::Fill))
        .push(stacked_pair(1, &images[1], 2, &images[2], cache))
        .into()
}

fn four<'a>(images: &'a [ImageHolder], cache: &ImageCache) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .height(Length::Fixed(sizing::TILE_HEIGHT))
        .push(stacked_pair(0, &images[0], 1, &images[1], cache))
        .push(stacked_pair(2, &images[2], 3, &images[3], cache))
        .into()
}

/// Two tiles stacked in one column, sharing the row height evenly.
fn stacked_pair<'a>(
    top_index: usize,
    top: &'a ImageHolder,
    bottom_index: usize,
    bottom: &'a ImageHolder,
    cache: &ImageCache,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(tile(top_index, top, cache, Length::Fill))
        .push(tile(bottom_index, bottom, cache, Length::Fill))
        .into()
}

/// Carousel for five or more images: current page plus prev/next controls
/// and a dot indicator.
fn paged<'a>(
    images: &'a [ImageHolder],
    page: usize,
    cache: &ImageCache,
    scheme: &ColorScheme,
) -> Element<'a, Message> {
    let page = clamp_page(page, images.len());

    let current = tile(page, &images[page], cache, Length::Fixed(sizing::TILE_HEIGHT));

    let prev = nav_button(icons::PAGE_PREV, (page > 0).then_some(Message::PagePrev), scheme);
    let next = nav_button(
        icons::PAGE_NEXT,
        (page + 1 < images.len()).then_some(Message::PageNext),
        scheme,
    );

    let dots = indicator(images.len(), page, scheme);

    let controls = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(prev)
        .push(
            Container::new(dots)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .push(next);

    Column::new()
        .spacing(spacing::SM)
        .push(current)
        .push(controls)
        .into()
}

fn nav_button<'a>(
    glyph: &'a str,
    on_press: Option<Message>,
    scheme: &ColorScheme,
) -> Element<'a, Message> {
    let color = if on_press.is_some() {
        scheme.text_primary
    } else {
        scheme.text_tertiary
    };

    let mut button = iced::widget::button(icons::sized(glyph, sizing::ICON_MD, color))
        .padding(spacing::XS)
        .style(styles::flat(color));

    if let Some(message) = on_press {
        button = button.on_press(message);
    }

    button.into()
}

fn indicator<'a>(count: usize, page: usize, scheme: &ColorScheme) -> Element<'a, Message> {
    let mut dots = Row::new().spacing(spacing::XS);
    for i in 0..count {
        let (glyph, color) = if i == page {
            (icons::DOT_ACTIVE, scheme.text_primary)
        } else {
            (icons::DOT_INACTIVE, scheme.text_tertiary)
        };
        dots = dots.push(icons::sized(glyph, sizing::INDICATOR_DOT, color));
    }
    container(dots).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_names_the_exact_count() {
        assert_eq!(GridLayout::select(0), None);
        assert_eq!(GridLayout::select(1), Some(GridLayout::One));
        assert_eq!(GridLayout::select(2), Some(GridLayout::Two));
        assert_eq!(GridLayout::select(3), Some(GridLayout::Three));
        assert_eq!(GridLayout::select(4), Some(GridLayout::Four));
    }

    #[test]
    fn five_or_more_selects_paged_regardless_of_count() {
        assert_eq!(GridLayout::select(5), Some(GridLayout::Paged));
        assert_eq!(GridLayout::select(6), Some(GridLayout::Paged));
        assert_eq!(GridLayout::select(60), Some(GridLayout::Paged));
    }

    #[test]
    fn clamp_page_stays_in_range() {
        assert_eq!(clamp_page(0, 6), 0);
        assert_eq!(clamp_page(5, 6), 5);
        assert_eq!(clamp_page(6, 6), 5);
        assert_eq!(clamp_page(100, 6), 5);
        assert_eq!(clamp_page(3, 0), 0);
    }
}
