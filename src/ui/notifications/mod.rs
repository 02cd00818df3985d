// SPDX-License-Identifier: MPL-2.0
//! Toasts reporting the outcome of user actions.
//!
//! Transient, auto-dismissing toasts report the outcome of user actions
//! (publish success, upload errors, sign-out) without blocking interaction.
//! At most three show at once in the bottom-right corner; the rest wait in
//! a backlog and get their full display time once a slot frees up.
//!
//! Messages are i18n keys resolved at render time. Warnings and errors are
//! additionally copied into the diagnostics ring buffer when a handle is
//! attached to the [`Manager`].
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-publish-success"));
//!
//! // In the view, stacked over the active screen:
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
