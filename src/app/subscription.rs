// SPDX-License-Identifier: MPL-2.0
//! Periodic subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between animation and toast-expiry ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Ticks only while something on screen changes over time: a spinner is
/// turning or a toast may expire.
pub fn create_tick_subscription(is_animating: bool, has_notifications: bool) -> Subscription<Message> {
    if is_animating || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
