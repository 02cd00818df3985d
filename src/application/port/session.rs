// SPDX-License-Identifier: MPL-2.0
//! Session port definition.
//!
//! The client never performs authentication itself; it holds a session some
//! other flow established and can give it up. Reading the session is cheap
//! and synchronous so the view layer can branch on it every frame.

use crate::domain::Session;
use async_trait::async_trait;
use std::fmt;

// =============================================================================
// SessionError
// =============================================================================

/// Errors that can occur during session operations.
#[derive(Debug, Clone)]
pub enum SessionError {
    /// The backend rejected the operation.
    Backend {
        /// HTTP status code.
        status: u16,
        /// Human-readable message from the server.
        message: String,
    },

    /// The backend could not be reached.
    Network(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Backend { status, message } => {
                write!(f, "sign-out rejected ({status}): {message}")
            }
            SessionError::Network(msg) => write!(f, "network error: {msg}"),
        }
    }
}

impl std::error::Error for SessionError {}

// =============================================================================
// SessionGateway Trait
// =============================================================================

/// Port for session access.
///
/// Implementations must be `Send + Sync`; the app shares one instance
/// between the update loop and spawned tasks.
#[async_trait]
pub trait SessionGateway: Send + Sync {
    /// The currently signed-in session, if any.
    fn current(&self) -> Option<Session>;

    /// Terminates the session on the backend and forgets it locally.
    ///
    /// One attempt, no retry: the caller reports success or failure to the
    /// user and otherwise leaves the session state as the gateway says.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] when the backend rejects the request or is
    /// unreachable. The local session is kept in that case.
    async fn sign_out(&self) -> Result<(), SessionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_error_display() {
        let err = SessionError::Backend {
            status: 401,
            message: "token expired".to_string(),
        };
        assert_eq!(format!("{err}"), "sign-out rejected (401): token expired");

        let err = SessionError::Network("connection refused".to_string());
        assert!(format!("{err}").contains("connection refused"));
    }
}
