// SPDX-License-Identifier: MPL-2.0
//! Runtime event subscriptions.

use super::{App, Message};
use iced::Subscription;
use std::time::Duration;

/// Interval between toast auto-dismiss checks.
const TOAST_TICK: Duration = Duration::from_millis(500);

/// Window resizes are always tracked; the toast timer only runs while there
/// is something to expire.
pub fn subscription(app: &App) -> Subscription<Message> {
    let resizes =
        iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

    if app.notifications().is_empty() {
        resizes
    } else {
        let ticks = iced::time::every(TOAST_TICK).map(|_instant| Message::Tick);
        Subscription::batch([resizes, ticks])
    }
}
