// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` holds the single current notification and its open flag.
//! Showing a new notification replaces the previous one — there is no queue.
//! Closing only flips the open flag; the message and severity stick around
//! until overwritten, so the card never flashes empty while it animates out.

use super::notification::Notification;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss the current notification.
    Dismiss,
    /// Tick for checking the auto-dismiss timer.
    Tick,
}

/// Manages the current notification and its visibility.
#[derive(Debug, Default)]
pub struct Manager {
    current: Option<Notification>,
    open: bool,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a notification, replacing whatever is currently displayed.
    pub fn show(&mut self, notification: Notification) {
        self.current = Some(notification);
        self.open = true;
    }

    /// Closes the panel. The notification itself is retained so the card
    /// keeps its content during the close transition.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Processes a tick event, closing the panel once the current
    /// notification has outlived the auto-hide timeout.
    ///
    /// Should be called periodically (e.g., every 100-500ms) while open.
    pub fn tick(&mut self) {
        if self.open
            && self
                .current
                .as_ref()
                .is_some_and(Notification::should_auto_dismiss)
        {
            self.close();
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss => self.close(),
            Message::Tick => self.tick(),
        }
    }

    /// Returns the notification to render, if the panel is open.
    #[must_use]
    pub fn visible(&self) -> Option<&Notification> {
        if self.open {
            self.current.as_ref()
        } else {
            None
        }
    }

    /// Returns whether the panel is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the retained notification, open or not.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn current_mut(&mut self) -> Option<&mut Notification> {
        self.current.as_mut()
    }
}
