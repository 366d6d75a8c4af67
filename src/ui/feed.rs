// SPDX-License-Identifier: MPL-2.0
//! Home timeline: a scrollable list of posts.
//!
//! The feed owns the transient per-post UI state (carousel pages) and
//! translates post messages into events the app can act on. Carousel pages
//! are clamped against the post's actual image count, so a stale page index
//! can never push a renderer out of bounds.

use crate::media::ImageCache;
use crate::model::{ImageHolder, Post, PostId};
use crate::ui::theming::ColorScheme;
use crate::ui::{image_grid, post};
use iced::widget::{rule, scrollable, Column};
use iced::{Element, Length};
use std::collections::BTreeMap;

/// Transient feed UI state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Carousel page per post; absent means page zero.
    pages: BTreeMap<PostId, usize>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn page(&self, id: PostId) -> usize {
        self.pages.get(&id).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Post(PostId, post::Message),
}

/// Events propagated to the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// An interaction the app has no implementation for yet.
    NotImplemented(post::Action),
    /// The avatar was tapped (also unimplemented, kept separate for the
    /// profile screen to hook into later).
    AvatarTapped,
    /// A hashtag was tapped; payload is the bare tag.
    HashtagTapped(String),
    /// An image tile was tapped; open the full-screen viewer on it.
    OpenImage(ImageHolder),
}

pub fn update(state: &mut State, message: Message, posts: &[Post]) -> Event {
    let Message::Post(id, message) = message;

    let Some(target) = posts.iter().find(|p| p.id == id) else {
        // Message for a post that left the feed; nothing to do
        return Event::None;
    };

    match message {
        post::Message::AvatarPressed => Event::AvatarTapped,
        post::Message::ActionPressed(action) => Event::NotImplemented(action),
        post::Message::HashtagPressed(tag) => Event::HashtagTapped(tag),
        post::Message::Grid(grid) => match grid {
            image_grid::Message::ImagePressed(index) => match target.images.get(index) {
                Some(image) => Event::OpenImage(image.clone()),
                None => Event::None,
            },
            image_grid::Message::PagePrev => {
                let page = state.page(id).saturating_sub(1);
                state.pages.insert(id, page);
                Event::None
            }
            image_grid::Message::PageNext => {
                let page = image_grid::clamp_page(state.page(id) + 1, target.images.len());
                state.pages.insert(id, page);
                Event::None
            }
        },
    }
}

pub fn view<'a>(
    state: &State,
    posts: &'a [Post],
    cache: &'a ImageCache,
    scheme: &'a ColorScheme,
) -> Element<'a, Message> {
    let mut column = Column::new().width(Length::Fill);

    for (i, item) in posts.iter().enumerate() {
        if i > 0 {
            column = column.push(rule::horizontal(1));
        }

        let id = item.id;
        column = column.push(
            post::view(post::ViewContext {
                post: item,
                page: state.page(id),
                cache,
                scheme,
            })
            .map(move |message| Message::Post(id, message)),
        );
    }

    scrollable(column).height(Length::Fill).into()
}
