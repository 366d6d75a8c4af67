// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Unimplemented interactions ("not implemented") and informational events
//! ("tag tapped") surface here instead of failing silently.

pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, NotificationId, Severity};
