// SPDX-License-Identifier: MPL-2.0
//! Dummy feed data used until a real data layer exists.
//!
//! Image URLs point at picsum.photos with stable seeds so the same picture
//! comes back on every run and the precomputed average colors stay roughly
//! truthful.

use super::{ImageHolder, Post, User};
use chrono::{Duration, Utc};
use iced::Color;

fn picture(seed: u32, width: u32, height: u32, color_average: Color) -> ImageHolder {
    ImageHolder {
        url: format!("https://picsum.photos/seed/crier{}/{}/{}", seed, width, height),
        width,
        height,
        color_average,
    }
}

/// The signed-in user shown in the top bar.
#[must_use]
pub fn current_user() -> User {
    User {
        name: "Cold Zero".to_string(),
        handle: "cold0".to_string(),
        avatar: picture(99, 128, 128, Color::from_rgb8(0x6b, 0x72, 0x80)),
        verified: true,
    }
}

fn authors() -> Vec<User> {
    vec![
        User {
            name: "Maya Lindqvist".to_string(),
            handle: "maya".to_string(),
            avatar: picture(11, 128, 128, Color::from_rgb8(0x8a, 0x5a, 0x44)),
            verified: true,
        },
        User {
            name: "Jonas Petit".to_string(),
            handle: "jpetit".to_string(),
            avatar: picture(12, 128, 128, Color::from_rgb8(0x44, 0x62, 0x8a)),
            verified: false,
        },
        User {
            name: "River Okafor".to_string(),
            handle: "river_o".to_string(),
            avatar: picture(13, 128, 128, Color::from_rgb8(0x3f, 0x70, 0x52)),
            verified: false,
        },
    ]
}

/// Builds the dummy timeline, newest first. Image counts cover every grid
/// layout variant (0, 1, 2, 3, 4 and a 6-image carousel).
#[must_use]
pub fn feed() -> Vec<Post> {
    let authors = authors();
    let now = Utc::now();

    vec![
        Post {
            id: 1,
            user: authors[0].clone(),
            content: "Morning light over the harbor. #photography #goldenhour worth the 5am alarm".to_string(),
            images: vec![picture(21, 1200, 800, Color::from_rgb8(0xd9, 0xa0, 0x66))],
            comments_count: 12,
            reblog_count: 34,
            like_count: 210,
            liked: true,
            reblogged: false,
            posted_at: now - Duration::minutes(18),
        },
        Post {
            id: 2,
            user: authors[1].clone(),
            content: "Two takes on the same street corner, film vs digital. #film".to_string(),
            images: vec![
                picture(22, 900, 1200, Color::from_rgb8(0x55, 0x52, 0x4e)),
                picture(23, 900, 1200, Color::from_rgb8(0x6e, 0x6a, 0x63)),
            ],
            comments_count: 4,
            reblog_count: 9,
            like_count: 87,
            liked: false,
            reblogged: true,
            posted_at: now - Duration::hours(1),
        },
        Post {
            id: 3,
            user: authors[2].clone(),
            content: "No picture does the aurora justice but here are three attempts #aurora #northernlights".to_string(),
            images: vec![
                picture(24, 1600, 900, Color::from_rgb8(0x1f, 0x38, 0x4a)),
                picture(25, 800, 600, Color::from_rgb8(0x24, 0x45, 0x3c)),
                picture(26, 800, 600, Color::from_rgb8(0x2e, 0x2a, 0x4f)),
            ],
            comments_count: 31,
            reblog_count: 122,
            like_count: 980,
            liked: true,
            reblogged: false,
            posted_at: now - Duration::hours(3),
        },
        Post {
            id: 4,
            user: authors[0].clone(),
            content: "Studio reorganization day. Before, during, after, and the inevitable coffee break.".to_string(),
            images: vec![
                picture(27, 1000, 750, Color::from_rgb8(0x9a, 0x8c, 0x7a)),
                picture(28, 1000, 750, Color::from_rgb8(0x7d, 0x74, 0x68)),
                picture(29, 1000, 750, Color::from_rgb8(0xa8, 0x9e, 0x90)),
                picture(30, 1000, 750, Color::from_rgb8(0x5c, 0x54, 0x4b)),
            ],
            comments_count: 7,
            reblog_count: 2,
            like_count: 54,
            liked: false,
            reblogged: false,
            posted_at: now - Duration::hours(7),
        },
        Post {
            id: 5,
            user: authors[1].clone(),
            content: "Full roll from the coast trip. Swipe through. #35mm #ontheroad".to_string(),
            images: (31..37)
                .map(|seed| picture(seed, 1200, 800, Color::from_rgb8(0x4a, 0x66, 0x70)))
                .collect(),
            comments_count: 19,
            reblog_count: 41,
            like_count: 305,
            liked: false,
            reblogged: false,
            posted_at: now - Duration::days(1),
        },
        Post {
            id: 6,
            user: authors[2].clone(),
            content: "Hot take: the best camera is the one with a charged battery. # discuss".to_string(),
            images: Vec::new(),
            comments_count: 88,
            reblog_count: 15,
            like_count: 402,
            liked: false,
            reblogged: false,
            posted_at: now - Duration::days(2),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_covers_every_grid_variant() {
        let posts = feed();
        let counts: Vec<usize> = posts.iter().map(|p| p.images.len()).collect();

        for expected in [0, 1, 2, 3, 4] {
            assert!(counts.contains(&expected), "missing {}-image post", expected);
        }
        assert!(counts.iter().any(|&c| c >= 5), "missing carousel post");
    }

    #[test]
    fn post_ids_are_unique() {
        let posts = feed();
        let mut ids: Vec<_> = posts.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), posts.len());
    }
}
