// SPDX-License-Identifier: MPL-2.0
//! Video catalog port definition.
//!
//! The catalog is the backend API that owns video documents. Publishing
//! posts the four-field draft; the backend applies playback defaults and
//! the delivery transformation itself.

use crate::domain::{NewVideo, VideoAsset};
use async_trait::async_trait;
use std::fmt;

// =============================================================================
// CatalogError
// =============================================================================

/// Errors reported by the video catalog.
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// The backend answered with a failure status.
    Backend {
        /// HTTP status code.
        status: u16,
        /// Human-readable message from the server body.
        message: String,
    },

    /// The backend could not be reached.
    Network(String),

    /// The backend answered with a payload the client could not parse.
    InvalidResponse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // The server's own message, verbatim: notifications show this
            // Display output directly to the user.
            CatalogError::Backend { message, .. } => write!(f, "{message}"),
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::InvalidResponse(msg) => write!(f, "invalid server response: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

// =============================================================================
// VideoCatalog Trait
// =============================================================================

/// Port for the backend video API.
#[async_trait]
pub trait VideoCatalog: Send + Sync {
    /// Publishes a drafted video.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the backend rejects the draft or is
    /// unreachable. The draft itself is untouched; callers may retry with
    /// the same value.
    async fn create_video(&self, draft: &NewVideo) -> Result<(), CatalogError>;

    /// Lists published videos, newest first.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the backend is unreachable or
    /// answers with something that is not a video list.
    async fn list_videos(&self) -> Result<Vec<VideoAsset>, CatalogError>;
}
