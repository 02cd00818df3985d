// SPDX-License-Identifier: MPL-2.0
//! HTTP adapters for the ReelsBook backend.
//!
//! The backend exposes a small REST surface; each adapter owns one slice of it:
//!
//! - [`HttpVideoCatalog`]: `GET`/`POST {base}/api/videos`
//! - [`CdnUploader`]: `POST {base}/api/upload` (multipart, streamed)
//! - [`HttpSessionGateway`]: `POST {base}/api/auth/signout`
//!
//! Error bodies follow the backend's `{ "error": "..." }` convention; the
//! helpers here extract that message so port errors can surface the server's
//! own wording to the user.

pub mod catalog;
pub mod poster;
pub mod session;
pub mod uploader;

pub use catalog::HttpVideoCatalog;
pub use session::HttpSessionGateway;
pub use uploader::CdnUploader;

use std::time::Duration;

/// Builds the shared `reqwest` client used by an adapter.
///
/// `timeout` bounds the whole request when present. Upload requests pass
/// `None` since their duration scales with file size.
pub(crate) fn build_client(timeout: Option<Duration>) -> crate::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Pulls the backend's error message out of a `{ "error": "..." }` body.
///
/// Returns `None` when the body is not JSON or carries no `error` field, so
/// callers can fall back to the raw body or the status line.
pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

/// Reads a failed response into `(status, message)` for a port error.
///
/// Preference order: the backend's `error` field, then the raw body, then the
/// HTTP status line when the body is empty.
pub(crate) async fn error_parts(response: reqwest::Response) -> (u16, String) {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = match extract_error_message(&body) {
        Some(message) => message,
        None if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
        None => body.trim().to_string(),
    };
    (status.as_u16(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_error_field_from_json_body() {
        let body = r#"{"error":"Failed to create video"}"#;
        assert_eq!(
            extract_error_message(body),
            Some("Failed to create video".to_string())
        );
    }

    #[test]
    fn ignores_bodies_without_an_error_field() {
        assert_eq!(extract_error_message(r#"{"ok":true}"#), None);
        assert_eq!(extract_error_message("internal server error"), None);
        assert_eq!(extract_error_message(""), None);
    }

    #[test]
    fn ignores_non_string_error_fields() {
        assert_eq!(extract_error_message(r#"{"error":42}"#), None);
    }

    #[test]
    fn builds_clients_with_and_without_timeout() {
        assert!(build_client(Some(Duration::from_secs(5))).is_ok());
        assert!(build_client(None).is_ok());
    }
}
