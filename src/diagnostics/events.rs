// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.
//!
//! Warnings and errors are categorized so a buffer dump groups naturally by
//! subsystem, and every message passes through [`sanitize_message`] before
//! storage.

use std::time::Instant;

/// Category of a recorded warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningType {
    /// The settings file could not be loaded.
    ConfigLoad,
    /// The persisted app state could not be loaded or saved.
    StatePersist,
    /// A feed thumbnail could not be fetched.
    ThumbnailFetch,
    /// Anything else.
    Other,
}

/// Category of a recorded error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// A media transfer to the upload service failed.
    Upload,
    /// Publishing a video to the catalog failed.
    Publish,
    /// Loading the video feed failed.
    FeedLoad,
    /// A session operation (sign-out) failed.
    Session,
    /// Anything else.
    Other,
}

/// A recorded warning with its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// A recorded error with its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations).
    pub timestamp: Instant,
    /// The type and data of the event.
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data of a diagnostic event.
#[derive(Debug, Clone)]
pub enum DiagnosticEventKind {
    /// Non-critical issue that may affect behavior.
    Warning { event: WarningEvent },
    /// Issue that caused an operation to fail.
    Error { event: ErrorEvent },
}

/// Masks path-like tokens in a message.
///
/// Recorded events must not retain local file locations: any token that
/// looks like a filesystem path is replaced with `<path>`.
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    message
        .split_whitespace()
        .map(|token| {
            let looks_like_path = (token.contains('/') && token.len() > 1 && !token.contains("://"))
                || (token.contains('\\') && token.len() > 1);
            if looks_like_path {
                "<path>"
            } else {
                token
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
