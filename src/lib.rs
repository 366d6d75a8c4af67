// SPDX-License-Identifier: MPL-2.0
//! `crier` is a Twitter/Mastodon-style feed client built with the Iced GUI framework.
//!
//! It renders a timeline of posts with hashtag-aware body text, image grids
//! with a full-screen swipe-to-dismiss viewer, and top/bottom navigation bars,
//! driven by dummy feed data.

pub mod app;
pub mod config;
pub mod error;
pub mod media;
pub mod model;
pub mod ui;
