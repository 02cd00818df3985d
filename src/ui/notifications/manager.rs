// SPDX-License-Identifier: MPL-2.0
//! Which toasts show, and for how long.
//!
//! The `Manager` decides which toasts are on screen. At most `MAX_VISIBLE`
//! show at once; the rest wait in a backlog. Display time is measured from
//! the moment a toast is shown, not from when it was pushed, so nothing
//! expires while it is still waiting its turn.

use super::notification::{Notification, NotificationId, Severity};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType, WarningEvent, WarningType};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of toasts on screen at once.
const MAX_VISIBLE: usize = 3;

/// Messages emitted by the toast widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user pressed the dismiss button of one toast.
    Dismiss(NotificationId),
}

/// A toast that is currently on screen, with its display clock.
#[derive(Debug)]
struct Active {
    notification: Notification,
    shown_at: Instant,
}

impl Active {
    fn now(notification: Notification) -> Self {
        Self {
            notification,
            shown_at: Instant::now(),
        }
    }

    fn expired(&self) -> bool {
        self.shown_at.elapsed() >= self.notification.display_duration()
    }
}

/// Owns the visible toasts and the backlog behind them.
#[derive(Debug, Default)]
pub struct Manager {
    /// On-screen toasts, newest first.
    shown: Vec<Active>,
    /// Toasts waiting for a free slot, in arrival order.
    backlog: VecDeque<Notification>,
    /// Ring buffer that warnings and errors are copied into.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the diagnostics buffer warnings and errors get recorded to.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Accepts a notification, showing it right away when a slot is free.
    ///
    /// Warnings and errors are also recorded to diagnostics. Push sites set
    /// the classification with `with_warning_type()` / `with_error_type()`;
    /// `Other` is the fallback.
    pub fn push(&mut self, notification: Notification) {
        self.record(&notification);

        if self.shown.len() < MAX_VISIBLE {
            self.shown.insert(0, Active::now(notification));
        } else {
            self.backlog.push_back(notification);
        }
    }

    /// Removes a toast wherever it currently is.
    ///
    /// Returns `true` if the id named a known toast.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.shown.iter().position(|a| a.notification.id() == id) {
            self.shown.remove(pos);
            self.promote();
            return true;
        }
        if let Some(pos) = self.backlog.iter().position(|n| n.id() == id) {
            self.backlog.remove(pos);
            return true;
        }
        false
    }

    /// Drops every toast whose display time is up and fills the freed slots.
    ///
    /// Driven by the app's periodic tick subscription.
    pub fn tick(&mut self) {
        self.shown.retain(|active| !active.expired());
        self.promote();
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// The toasts currently on screen, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.shown.iter().map(|active| &active.notification)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.shown.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.backlog.len()
    }

    /// Whether any toast exists, on screen or waiting.
    ///
    /// The tick subscription runs only while this is true.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.shown.is_empty() || !self.backlog.is_empty()
    }

    /// Drops everything, shown and waiting.
    pub fn clear(&mut self) {
        self.shown.clear();
        self.backlog.clear();
    }

    fn record(&self, notification: &Notification) {
        let Some(handle) = &self.diagnostics else {
            return;
        };
        match notification.severity() {
            Severity::Warning => {
                let warning_type = notification.warning_type().unwrap_or(WarningType::Other);
                handle.log_warning(WarningEvent::new(warning_type, notification.message_key()));
            }
            Severity::Error => {
                let error_type = notification.error_type().unwrap_or(ErrorType::Other);
                handle.log_error(ErrorEvent::new(error_type, notification.message_key()));
            }
            Severity::Success | Severity::Info => {}
        }
    }

    /// Moves backlog entries into free slots, starting their display clocks.
    fn promote(&mut self) {
        while self.shown.len() < MAX_VISIBLE {
            match self.backlog.pop_front() {
                Some(notification) => self.shown.push(Active::now(notification)),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::BufferCapacity;
    use std::time::Duration;

    fn visible_keys(manager: &Manager) -> Vec<&str> {
        manager.visible().map(Notification::message_key).collect()
    }

    #[test]
    fn starts_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn newest_toast_shows_first() {
        let mut manager = Manager::new();
        manager.push(Notification::success("first"));
        manager.push(Notification::info("second"));

        assert_eq!(visible_keys(&manager), vec!["second", "first"]);
    }

    #[test]
    fn overflow_waits_in_the_backlog() {
        let mut manager = Manager::new();
        for i in 0..=MAX_VISIBLE {
            manager.push(Notification::success(format!("toast-{i}")));
        }

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
        assert!(manager.has_notifications());
    }

    #[test]
    fn dismiss_frees_a_slot_for_the_backlog() {
        let mut manager = Manager::new();
        let first = Notification::success("first");
        let first_id = first.id();
        manager.push(first);
        for i in 1..MAX_VISIBLE {
            manager.push(Notification::success(format!("toast-{i}")));
        }
        manager.push(Notification::success("waiting"));

        assert!(manager.dismiss(first_id));

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
        assert!(visible_keys(&manager).contains(&"waiting"));
    }

    #[test]
    fn dismissing_an_unknown_id_changes_nothing() {
        let mut manager = Manager::new();
        manager.push(Notification::success("kept"));

        let unknown = Notification::success("never-pushed").id();
        assert!(!manager.dismiss(unknown));
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn dismiss_reaches_into_the_backlog() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("toast-{i}")));
        }
        let waiting = Notification::success("waiting");
        let waiting_id = waiting.id();
        manager.push(waiting);

        assert!(manager.dismiss(waiting_id));
        assert_eq!(manager.queued_count(), 0);
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
    }

    #[test]
    fn dismiss_message_routes_to_the_manager() {
        let mut manager = Manager::new();
        let toast = Notification::success("toast");
        let id = toast.id();
        manager.push(toast);

        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn fresh_toasts_survive_a_tick() {
        let mut manager = Manager::new();
        manager.push(Notification::error("just-arrived"));

        manager.tick();
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn expired_toasts_leave_on_tick() {
        let mut manager = Manager::new();
        manager.push(Notification::success("gone").keep_for(Duration::ZERO));

        manager.tick();
        assert!(!manager.has_notifications());
    }

    #[test]
    fn a_waiting_toast_gets_its_full_time_once_shown() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("short-{i}")).keep_for(Duration::ZERO));
        }
        manager.push(Notification::success("patient").keep_for(Duration::from_millis(200)));

        // Older than its own display time by the first tick, but its clock
        // only starts when it reaches the screen.
        std::thread::sleep(Duration::from_millis(250));
        manager.tick();
        manager.tick();

        assert_eq!(visible_keys(&manager), vec!["patient"]);
    }

    #[test]
    fn clear_drops_everything() {
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.push(Notification::success(format!("toast-{i}")));
        }

        manager.clear();
        assert!(!manager.has_notifications());
    }

    #[test]
    fn warnings_and_errors_land_in_diagnostics() {
        let mut manager = Manager::new();
        let handle = DiagnosticsHandle::new(BufferCapacity::default());
        manager.set_diagnostics(handle.clone());

        manager.push(
            Notification::warning("notification-state-read-error")
                .with_warning_type(WarningType::StatePersist),
        );
        manager.push(
            Notification::error("notification-publish-error").with_error_type(ErrorType::Publish),
        );
        manager.push(Notification::success("notification-publish-success"));
        manager.push(Notification::info("notification-brand-welcome"));

        // Only the warning and the error are copied in
        assert_eq!(handle.len(), 2);
    }
}
