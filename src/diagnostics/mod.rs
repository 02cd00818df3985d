// SPDX-License-Identifier: MPL-2.0
//! In-memory diagnostics for troubleshooting.
//!
//! The app has no log file; instead, warnings and errors raised while talking
//! to the backend (or while loading local state) are recorded into a
//! memory-bounded ring buffer. The notification manager feeds it
//! automatically, so every toast with warning or error severity leaves a
//! trace that outlives the toast itself.
//!
//! # Pieces
//!
//! - [`CircularBuffer`]: Generic ring buffer with validated capacity
//! - [`DiagnosticEvent`]: Timestamped warning/error record
//! - [`DiagnosticsHandle`]: Cheap-to-clone, thread-safe writer handle
//!
//! # What gets recorded
//!
//! Messages are sanitized before storage: path-like tokens are masked so a
//! recorded upload failure never retains the local file location.

mod buffer;
mod events;
mod handle;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{
    sanitize_message, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, WarningEvent,
    WarningType,
};
pub use handle::DiagnosticsHandle;
