// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for buttons and containers.
//!
//! Style functions take the colors they need by value so the returned
//! closures are `'static` and independent of the scheme's lifetime.

use crate::ui::design_tokens::{opacity, radius};
use crate::ui::theming::with_alpha;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Flat button showing only its content; hover adds a subtle wash.
pub fn flat(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(
                with_alpha(text_color, opacity::OVERLAY_SUBTLE),
            )),
            _ => None,
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Solid surface container, used for the navigation bars.
pub fn bar(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..container::Style::default()
    }
}

/// Rounded solid fill, used for image tiles while the bitmap loads.
pub fn tile(fill: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fill)),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Circular solid fill, used as the avatar loading placeholder.
pub fn circle(fill: Color, diameter: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fill)),
        border: Border {
            radius: (diameter / 2.0).into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Full-window scrim behind the image viewer.
pub fn scrim(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..container::Style::default()
    }
}

/// Toast card: surface fill with a severity-colored border accent.
pub fn toast(surface: Color, accent: Color, text: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(surface)),
        border: Border {
            color: accent,
            width: 2.0,
            radius: radius::MD.into(),
        },
        ..container::Style::default()
    }
}
