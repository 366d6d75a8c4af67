// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal. It limits
//! the number of visible toasts and promotes queued ones as space frees up.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification. If fewer than `MAX_VISIBLE` are showing it
    /// appears immediately, otherwise it queues until space frees up.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Processes a tick, dismissing any notifications whose display time has
    /// elapsed. Call periodically while toasts are visible.
    pub fn tick(&mut self) {
        let to_dismiss: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();

        for id in to_dismiss {
            self.dismiss(id);
        }
    }

    /// Handles a notification message.
    pub fn handle(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::Tick => self.tick(),
        }
    }

    /// Iterates over visible notifications, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_front(notification),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn push_makes_notification_visible() {
        let mut manager = Manager::new();
        manager.push(Notification::info("one"));

        assert_eq!(manager.visible().count(), 1);
        assert!(!manager.is_empty());
    }

    #[test]
    fn overflow_goes_to_queue_and_promotes_on_dismiss() {
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.push(Notification::info(format!("toast {}", i)));
        }
        assert_eq!(manager.visible().count(), MAX_VISIBLE);

        let first_id = manager.visible().next().unwrap().id();
        assert!(manager.dismiss(first_id));

        // One queued notification took the freed slot
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
    }

    #[test]
    fn dismiss_unknown_id_is_false() {
        let mut manager = Manager::new();
        assert!(!manager.dismiss(NotificationId::new()));
    }

    #[test]
    fn tick_removes_expired_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::info("gone").auto_dismiss(Duration::ZERO));
        manager.push(Notification::info("stays"));

        manager.tick();

        let remaining: Vec<&str> = manager.visible().map(Notification::message).collect();
        assert_eq!(remaining, vec!["stays"]);
    }

    #[test]
    fn handle_routes_messages() {
        let mut manager = Manager::new();
        manager.push(Notification::info("x"));
        let id = manager.visible().next().unwrap().id();

        manager.handle(Message::Dismiss(id));
        assert!(manager.is_empty());
    }
}
