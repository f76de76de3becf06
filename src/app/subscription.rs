// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only recurring event this application needs is a periodic tick while
//! a toast is open, to drive its auto-dismiss timer.

use super::Message;
use iced::{time, Subscription};

/// Creates a periodic tick subscription for notification auto-dismiss.
///
/// Idle when no toast is open, so the app does not wake up needlessly.
pub fn create_tick_subscription(has_open_toast: bool) -> Subscription<Message> {
    if has_open_toast {
        time::every(std::time::Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
