// SPDX-License-Identifier: MPL-2.0
//! Feed data model.
//!
//! Entities are supplied by the data layer and read-only during a render
//! pass. The app currently runs on [`dummy`] data; a sync layer would swap
//! in real posts without touching the UI components.

use chrono::{DateTime, Utc};
use iced::Color;

pub mod dummy;

/// Identifier for a post within the loaded feed.
pub type PostId = u64;

/// A remote image reference with enough metadata to render a placeholder
/// before the bitmap arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageHolder {
    pub url: String,
    /// Intrinsic width in pixels.
    pub width: u32,
    /// Intrinsic height in pixels.
    pub height: u32,
    /// Precomputed average color, used as the loading background fill.
    pub color_average: Color,
}

impl ImageHolder {
    /// Width over height, guarding against zero-height metadata.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// The author of a post.
#[derive(Debug, Clone)]
pub struct User {
    pub name: String,
    pub handle: String,
    pub avatar: ImageHolder,
    pub verified: bool,
}

/// One feed post. Immutable per render; counts and flags are mutated only
/// by data-layer events outside this crate.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub user: User,
    pub content: String,
    pub images: Vec<ImageHolder>,
    pub comments_count: u32,
    pub reblog_count: u32,
    pub like_count: u32,
    pub liked: bool,
    pub reblogged: bool,
    pub posted_at: DateTime<Utc>,
}

impl Post {
    /// Compact relative age for the author line ("now", "5m", "2h", "3d").
    #[must_use]
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        let elapsed = now.signed_duration_since(self.posted_at);
        let minutes = elapsed.num_minutes();

        if minutes < 1 {
            "now".to_string()
        } else if minutes < 60 {
            format!("{}m", minutes)
        } else if minutes < 60 * 24 {
            format!("{}h", elapsed.num_hours())
        } else {
            format!("{}d", elapsed.num_days())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn post_at(posted_at: DateTime<Utc>) -> Post {
        Post {
            id: 1,
            user: dummy::current_user(),
            content: String::new(),
            images: Vec::new(),
            comments_count: 0,
            reblog_count: 0,
            like_count: 0,
            liked: false,
            reblogged: false,
            posted_at,
        }
    }

    #[test]
    fn age_label_scales_with_elapsed_time() {
        let now = Utc::now();

        assert_eq!(post_at(now).age_label(now), "now");
        assert_eq!(post_at(now - Duration::minutes(5)).age_label(now), "5m");
        assert_eq!(post_at(now - Duration::hours(2)).age_label(now), "2h");
        assert_eq!(post_at(now - Duration::days(3)).age_label(now), "3d");
    }

    #[test]
    fn aspect_ratio_guards_zero_height() {
        let image = ImageHolder {
            url: String::new(),
            width: 100,
            height: 0,
            color_average: Color::BLACK,
        };
        assert_eq!(image.aspect_ratio(), 100.0);
    }
}
