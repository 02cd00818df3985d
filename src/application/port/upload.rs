// SPDX-License-Identifier: MPL-2.0
//! Media upload port definition.
//!
//! Transferring a video to the storage service is delegated entirely to the
//! implementation: chunking, retries and authentication are its business.
//! The caller only sees a progress stream and a final receipt.

use async_trait::async_trait;
use iced::futures::channel::mpsc;
use std::fmt;
use std::path::PathBuf;

// =============================================================================
// UploadError
// =============================================================================

/// Errors that can occur during a media transfer.
#[derive(Debug, Clone)]
pub enum UploadError {
    /// The local source file could not be read.
    Source(String),

    /// The upload service rejected the transfer.
    Service {
        /// HTTP status code.
        status: u16,
        /// Human-readable message from the service.
        message: String,
    },

    /// The upload service could not be reached.
    Network(String),

    /// The service answered with a payload the client could not parse.
    InvalidResponse(String),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Source(msg) => write!(f, "could not read the video file: {msg}"),
            UploadError::Service { status, message } => {
                write!(f, "upload rejected ({status}): {message}")
            }
            UploadError::Network(msg) => write!(f, "network error: {msg}"),
            UploadError::InvalidResponse(msg) => write!(f, "invalid upload response: {msg}"),
        }
    }
}

impl std::error::Error for UploadError {}

// =============================================================================
// TransferRequest / UploadReceipt
// =============================================================================

/// A transfer order for one local video file.
#[derive(Debug, Clone)]
pub struct TransferRequest {
    /// The file to upload.
    pub source: PathBuf,
}

impl TransferRequest {
    #[must_use]
    pub fn new(source: PathBuf) -> Self {
        Self { source }
    }

    /// File name sent to the service, or `"video"` for pathological paths.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "video".to_string())
    }
}

/// What the upload service hands back for a stored video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    /// Delivery path of the stored media.
    pub media_path: String,

    /// Delivery path of a generated poster, when the service made one.
    pub thumbnail_path: Option<String>,
}

// =============================================================================
// MediaUploader Trait
// =============================================================================

/// Port for transferring media to the storage service.
#[async_trait]
pub trait MediaUploader: Send + Sync {
    /// Uploads one file, reporting progress as integer percent (0-100).
    ///
    /// Progress sends are best-effort: implementations use `try_send` and
    /// drop updates the receiver has no room for. Values are monotone
    /// non-decreasing.
    ///
    /// # Errors
    ///
    /// Returns an [`UploadError`] when the source cannot be read, the
    /// service rejects the transfer, or the connection drops.
    async fn transfer(
        &self,
        request: TransferRequest,
        progress: mpsc::Sender<u8>,
    ) -> Result<UploadReceipt, UploadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_error_display() {
        let err = UploadError::Service {
            status: 413,
            message: "file too large".to_string(),
        };
        assert_eq!(format!("{err}"), "upload rejected (413): file too large");

        let err = UploadError::Source("permission denied".to_string());
        assert!(format!("{err}").contains("permission denied"));
    }

    #[test]
    fn transfer_request_extracts_file_name() {
        let request = TransferRequest::new(PathBuf::from("/home/user/clips/skate.mp4"));
        assert_eq!(request.file_name(), "skate.mp4");
    }

    #[test]
    fn transfer_request_falls_back_for_rootless_path() {
        let request = TransferRequest::new(PathBuf::from("/"));
        assert_eq!(request.file_name(), "video");
    }
}
