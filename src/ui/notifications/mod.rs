// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! A notification is an i18n message key plus a severity; the [`Manager`]
//! holds at most one notification at a time — showing a new one replaces
//! whatever is on screen. The manager is plain state owned by the
//! application root and passed by reference into views, so screens stay
//! testable in isolation.

mod manager;
mod notification;
pub mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, Severity};
