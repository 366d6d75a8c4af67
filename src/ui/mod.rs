// SPDX-License-Identifier: MPL-2.0
//! User interface components, following a component-based architecture with
//! the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`feed`] - Home timeline of posts
//! - [`screens`] - Placeholder screens for the remaining routes
//! - [`image_viewer`] - Full-screen image overlay with drag-to-dismiss
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System color schemes
//! - [`styles`] - Centralized button/container styling
//! - [`icons`] - Semantic glyph mapping
//! - [`hashtag`] - Hashtag span parsing and rich-text rendering
//! - [`post`] / [`image_grid`] - Post card and its image block layouts
//! - [`navbar`] - Top/bottom navigation bars
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod feed;
pub mod hashtag;
pub mod icons;
pub mod image_grid;
pub mod image_viewer;
pub mod navbar;
pub mod notifications;
pub mod post;
pub mod screens;
pub mod styles;
pub mod theming;
