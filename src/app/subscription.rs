// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between lifecycle ticks. Bounds how late a delayed step can
/// be noticed.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Creates a periodic tick subscription while anything notification-related
/// is on screen or pending.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
