// SPDX-License-Identifier: MPL-2.0
//! Shared writer handle for the diagnostics buffer.

use std::sync::{Arc, Mutex};

use super::{
    sanitize_message, BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind,
    ErrorEvent, WarningEvent,
};

/// Cheap-to-clone handle recording events into a shared ring buffer.
///
/// All methods are non-panicking: diagnostics exist to explain failures and
/// must never cause one. A poisoned lock silently drops the event.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    buffer: Arc<Mutex<CircularBuffer<DiagnosticEvent>>>,
}

impl DiagnosticsHandle {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
        }
    }

    /// Records a warning. The message is sanitized before storage.
    pub fn log_warning(&self, warning_event: WarningEvent) {
        let event = WarningEvent {
            message: sanitize_message(&warning_event.message),
            ..warning_event
        };
        self.push(DiagnosticEvent::new(DiagnosticEventKind::Warning {
            event,
        }));
    }

    /// Records an error. The message is sanitized before storage.
    pub fn log_error(&self, error_event: ErrorEvent) {
        let event = ErrorEvent {
            message: sanitize_message(&error_event.message),
            ..error_event
        };
        self.push(DiagnosticEvent::new(DiagnosticEventKind::Error { event }));
    }

    /// Copies out the recorded events, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DiagnosticEvent> {
        self.buffer
            .lock()
            .map(|buffer| buffer.iter().cloned().collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.lock().map(|buffer| buffer.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.clear();
        }
    }

    fn push(&self, event: DiagnosticEvent) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(event);
        }
    }
}

impl Default for DiagnosticsHandle {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{ErrorType, WarningType};

    #[test]
    fn logged_events_appear_in_snapshot() {
        let handle = DiagnosticsHandle::default();
        handle.log_warning(WarningEvent::new(WarningType::ConfigLoad, "bad settings"));
        handle.log_error(ErrorEvent::new(ErrorType::Publish, "server said no"));

        let events = handle.snapshot();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0].kind,
            DiagnosticEventKind::Warning { .. }
        ));
        assert!(matches!(events[1].kind, DiagnosticEventKind::Error { .. }));
    }

    #[test]
    fn messages_are_sanitized_on_write() {
        let handle = DiagnosticsHandle::default();
        handle.log_error(ErrorEvent::new(
            ErrorType::Upload,
            "failed to read /home/user/clip.mp4",
        ));

        let events = handle.snapshot();
        match &events[0].kind {
            DiagnosticEventKind::Error { event } => {
                assert_eq!(event.message, "failed to read <path>");
            }
            other => panic!("expected error event, got {other:?}"),
        }
    }

    #[test]
    fn clones_share_the_same_buffer() {
        let handle = DiagnosticsHandle::default();
        let clone = handle.clone();
        clone.log_warning(WarningEvent::new(WarningType::Other, "shared"));

        assert_eq!(handle.len(), 1);
    }

    #[test]
    fn clear_empties_the_buffer() {
        let handle = DiagnosticsHandle::default();
        handle.log_warning(WarningEvent::new(WarningType::Other, "w"));
        handle.clear();

        assert!(handle.is_empty());
    }
}
