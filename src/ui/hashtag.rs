// SPDX-License-Identifier: MPL-2.0
//! Hashtag-aware post body text.
//!
//! [`parse`] splits a body string into plain and tag runs; [`rich_content`]
//! renders them as rich text with clickable, brand-colored tag spans.
//!
//! The written form of the runs always concatenates back to the exact input
//! string. A `#` immediately followed by whitespace, another `#`, or the end
//! of the input yields no tag; the `#` stays in the plain text instead of
//! producing an empty clickable span.

use crate::ui::design_tokens::typography;
use crate::ui::theming::ColorScheme;
use iced::font::Weight;
use iced::widget::{rich_text, span};
use iced::{Element, Font};

/// One run of post body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Verbatim text.
    Plain(String),
    /// A hashtag, stored without the leading `#`.
    Tag(String),
}

impl Segment {
    /// The run as it appears in the original string.
    #[must_use]
    pub fn written(&self) -> String {
        match self {
            Segment::Plain(text) => text.clone(),
            Segment::Tag(tag) => format!("#{}", tag),
        }
    }
}

/// Splits `content` into plain and tag runs.
///
/// A tag is the maximal run of non-whitespace, non-`#` characters following
/// a `#`. Inputs without any `#` come back as a single plain run equal to
/// the input (including the empty string).
#[must_use]
pub fn parse(content: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut plain = String::new();
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '#' {
            plain.push(c);
            continue;
        }

        let mut tag = String::new();
        while let Some(&next) = chars.peek() {
            if next.is_whitespace() || next == '#' {
                break;
            }
            tag.push(next);
            chars.next();
        }

        if tag.is_empty() {
            // Bare '#': no tag to report, keep the character as plain text
            plain.push('#');
        } else {
            if !plain.is_empty() {
                segments.push(Segment::Plain(std::mem::take(&mut plain)));
            }
            segments.push(Segment::Tag(tag));
        }
    }

    if !plain.is_empty() || segments.is_empty() {
        segments.push(Segment::Plain(plain));
    }

    segments
}

/// Renders parsed segments as wrapping rich text. Tag spans carry the bare
/// tag string as their link payload; `on_tag` turns a tapped tag into the
/// host's message.
pub fn rich_content<'a, Message: 'a>(
    segments: &[Segment],
    scheme: &ColorScheme,
    on_tag: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let bold = Font {
        weight: Weight::Bold,
        ..Font::default()
    };

    let spans: Vec<iced::widget::text::Span<'a, String>> = segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain(run) => span(run.clone()).color(scheme.text_primary),
            Segment::Tag(tag) => span(format!("#{}", tag))
                .color(scheme.brand_primary)
                .font(bold)
                .link(tag.clone()),
        })
        .collect();

    rich_text(spans)
        .size(typography::BODY)
        .on_link_click(on_tag)
        .into()
}
