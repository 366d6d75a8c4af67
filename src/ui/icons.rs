// SPDX-License-Identifier: MPL-2.0
//! Semantic glyph mapping.
//!
//! Icons are rendered as unicode glyphs through the regular text pipeline,
//! which keeps the binary free of bundled assets. Components never hardcode
//! a glyph; they go through these names so swapping in an icon font later
//! touches one file.

use crate::ui::design_tokens::typography;
use iced::widget::{text, Text};
use iced::Color;

// Navigation
pub const HOME: &str = "⌂";
pub const SEARCH: &str = "🔍";
pub const NOTIFICATIONS: &str = "🔔";
pub const MESSAGES: &str = "✉";

// Top bar
pub const BRAND: &str = "📣";
pub const SPARKLE: &str = "✨";

// Post
pub const VERIFIED: &str = "✔";
pub const COMMENT: &str = "🗨";
pub const REBLOG: &str = "⟳";
pub const LIKE: &str = "♥";
pub const LIKE_OUTLINE: &str = "♡";
pub const SHARE: &str = "↗";

// Carousel
pub const PAGE_PREV: &str = "‹";
pub const PAGE_NEXT: &str = "›";
pub const DOT_ACTIVE: &str = "●";
pub const DOT_INACTIVE: &str = "○";

// Toasts
pub const CROSS: &str = "✕";

/// A glyph sized and tinted for inline use.
pub fn sized<'a>(glyph: &'a str, size: f32, color: Color) -> Text<'a> {
    text(glyph)
        .size(size)
        .style(move |_theme: &iced::Theme| iced::widget::text::Style { color: Some(color) })
}

/// A glyph at body size.
pub fn inline<'a>(glyph: &'a str, color: Color) -> Text<'a> {
    sized(glyph, typography::BODY, color)
}
