// SPDX-License-Identifier: MPL-2.0
//! Full-screen image viewer with vertical drag-to-dismiss.
//!
//! While the user drags, the scrim fades proportionally to how far the
//! image has moved: `1 - |offset| / viewport_height`, clamped to [0, 1].
//! Releasing beyond a quarter of the viewport height dismisses the viewer;
//! anything less snaps the image back to center.

use crate::media::ImageCache;
use crate::model::ImageHolder;
use crate::ui::theming::{self, ColorScheme};
use iced::widget::{mouse_area, Container};
use iced::{alignment, ContentFit, Element, Length, Padding, Point, Size};

/// How far (as a fraction of viewport height) the image must travel before
/// release dismisses the viewer.
const DISMISS_FRACTION: f32 = 0.25;

/// Blend factor pulling the scrim toward the image's average color.
const SCRIM_TINT: f32 = 0.2;

#[derive(Debug, Clone)]
pub struct State {
    image: ImageHolder,
    /// Current vertical displacement of the image, zero when centered.
    offset: f32,
    /// Last known cursor position inside the overlay.
    cursor_y: Option<f32>,
    /// Cursor y and offset captured when the drag started.
    grab: Option<Grab>,
}

#[derive(Debug, Clone, Copy)]
struct Grab {
    start_y: f32,
    start_offset: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    Pressed,
    CursorMoved(Point),
    Released,
}

/// Outcome of an update, reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The drag passed the dismiss threshold; the host should close the
    /// viewer.
    Dismissed,
}

impl State {
    /// Opens the viewer on `image` with the drag offset at zero.
    #[must_use]
    pub fn open(image: ImageHolder) -> Self {
        Self {
            image,
            offset: 0.0,
            cursor_y: None,
            grab: None,
        }
    }

    #[must_use]
    pub fn image(&self) -> &ImageHolder {
        &self.image
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Scrim opacity for the current offset.
    #[must_use]
    pub fn background_opacity(&self, viewport_height: f32) -> f32 {
        if viewport_height <= 0.0 {
            return 1.0;
        }
        (1.0 - self.offset.abs() / viewport_height).clamp(0.0, 1.0)
    }

    pub fn update(&mut self, message: Message, viewport_height: f32) -> Event {
        match message {
            Message::Pressed => {
                if let Some(start_y) = self.cursor_y {
                    self.grab = Some(Grab {
                        start_y,
                        start_offset: self.offset,
                    });
                }
                Event::None
            }
            Message::CursorMoved(position) => {
                self.cursor_y = Some(position.y);
                if let Some(grab) = self.grab {
                    self.offset = grab.start_offset + (position.y - grab.start_y);
                }
                Event::None
            }
            Message::Released => {
                self.grab = None;
                let travelled = self.offset.abs();
                self.offset = 0.0;

                if travelled > viewport_height * DISMISS_FRACTION {
                    Event::Dismissed
                } else {
                    Event::None
                }
            }
        }
    }

    /// Renders the overlay at the given viewport size.
    pub fn view<'a>(
        &'a self,
        cache: &ImageCache,
        scheme: &ColorScheme,
        viewport: Size,
    ) -> Element<'a, Message> {
        let opacity = self.background_opacity(viewport.height);
        let scrim_color = theming::with_alpha(
            theming::lerp(scheme.surface_primary, self.image.color_average, SCRIM_TINT),
            opacity,
        );

        let picture: Element<'a, Message> = match cache.get(&self.image.url) {
            Some(fetched) => iced::widget::image(fetched.handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => Container::new(iced::widget::Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(crate::ui::styles::tile(self.image.color_average))
                .into(),
        };

        // Doubling the one-sided padding shifts the centered image by
        // exactly `offset`.
        let shift = Padding {
            top: (self.offset * 2.0).max(0.0),
            bottom: (-self.offset * 2.0).max(0.0),
            ..Padding::ZERO
        };

        let content = Container::new(picture)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(shift)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        mouse_area(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(crate::ui::styles::scrim(scrim_color)),
        )
        .on_press(Message::Pressed)
        .on_release(Message::Released)
        .on_move(Message::CursorMoved)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Color;

    const VIEWPORT_HEIGHT: f32 = 800.0;

    fn state() -> State {
        State::open(ImageHolder {
            url: "https://example.com/a.jpg".to_string(),
            width: 100,
            height: 100,
            color_average: Color::from_rgb(0.5, 0.5, 0.5),
        })
    }

    fn drag_to(state: &mut State, offset: f32) {
        state.update(Message::CursorMoved(Point::new(0.0, 100.0)), VIEWPORT_HEIGHT);
        state.update(Message::Pressed, VIEWPORT_HEIGHT);
        state.update(
            Message::CursorMoved(Point::new(0.0, 100.0 + offset)),
            VIEWPORT_HEIGHT,
        );
    }

    #[test]
    fn opens_with_zero_offset_and_full_opacity() {
        let state = state();
        assert_eq!(state.offset(), 0.0);
        assert_eq!(state.background_opacity(VIEWPORT_HEIGHT), 1.0);
    }

    #[test]
    fn opacity_fades_linearly_with_offset() {
        let mut state = state();

        drag_to(&mut state, VIEWPORT_HEIGHT / 2.0);
        assert!((state.background_opacity(VIEWPORT_HEIGHT) - 0.5).abs() < 1e-5);

        drag_to(&mut state, VIEWPORT_HEIGHT);
        assert_eq!(state.background_opacity(VIEWPORT_HEIGHT), 0.0);
    }

    #[test]
    fn opacity_clamps_past_viewport_height() {
        let mut state = state();
        drag_to(&mut state, VIEWPORT_HEIGHT * 3.0);
        assert_eq!(state.background_opacity(VIEWPORT_HEIGHT), 0.0);
    }

    #[test]
    fn release_past_quarter_dismisses() {
        let mut state = state();
        drag_to(&mut state, VIEWPORT_HEIGHT / 4.0 + 1.0);

        let event = state.update(Message::Released, VIEWPORT_HEIGHT);
        assert_eq!(event, Event::Dismissed);
    }

    #[test]
    fn release_under_quarter_snaps_back() {
        let mut state = state();
        drag_to(&mut state, VIEWPORT_HEIGHT / 4.0 - 1.0);

        let event = state.update(Message::Released, VIEWPORT_HEIGHT);
        assert_eq!(event, Event::None);
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn upward_drag_counts_the_same() {
        let mut state = state();
        drag_to(&mut state, -(VIEWPORT_HEIGHT / 4.0 + 1.0));

        let event = state.update(Message::Released, VIEWPORT_HEIGHT);
        assert_eq!(event, Event::Dismissed);
    }

    #[test]
    fn press_without_known_cursor_does_not_drag() {
        let mut state = state();
        state.update(Message::Pressed, VIEWPORT_HEIGHT);
        state.update(Message::Released, VIEWPORT_HEIGHT);
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn moves_without_press_do_not_change_offset() {
        let mut state = state();
        state.update(Message::CursorMoved(Point::new(0.0, 300.0)), VIEWPORT_HEIGHT);
        assert_eq!(state.offset(), 0.0);
    }
}
