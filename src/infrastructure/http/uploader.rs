// SPDX-License-Identifier: MPL-2.0
//! HTTP implementation of the [`MediaUploader`] port.
//!
//! Streams the picked file to the backend's upload route as multipart form
//! data. The request body is chunked so progress can be reported while bytes
//! are still in flight; each chunk handed to `reqwest` bumps the percentage
//! on the port's progress channel.
//!
//! [`MediaUploader`]: crate::application::port::MediaUploader

use async_trait::async_trait;
use futures_util::StreamExt;
use iced::futures::channel::mpsc;
use serde::Deserialize;

use crate::application::port::{MediaUploader, TransferRequest, UploadError, UploadReceipt};

use super::{build_client, error_parts};

/// Wire shape of a successful upload response.
///
/// The backend answers with the CDN path of the stored video and, when its
/// pipeline generated one, a poster thumbnail.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    file_path: String,
    #[serde(default)]
    thumbnail_url: Option<String>,
}

/// Streaming multipart client for the backend's `/api/upload` route.
pub struct CdnUploader {
    client: reqwest::Client,
    base_url: String,
    chunk_bytes: usize,
}

impl CdnUploader {
    /// Creates an uploader for `base_url`.
    ///
    /// `chunk_bytes` sets the granularity of both the request stream and the
    /// progress updates. The client carries no overall timeout; transfer
    /// duration scales with file size.
    pub fn new(base_url: &str, chunk_bytes: usize) -> crate::Result<Self> {
        Ok(Self {
            client: build_client(None)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            chunk_bytes: chunk_bytes.max(1),
        })
    }

    fn upload_url(&self) -> String {
        format!("{}/api/upload", self.base_url)
    }
}

#[async_trait]
impl MediaUploader for CdnUploader {
    async fn transfer(
        &self,
        request: TransferRequest,
        progress: mpsc::Sender<u8>,
    ) -> Result<UploadReceipt, UploadError> {
        let data = tokio::fs::read(&request.source)
            .await
            .map_err(|e| UploadError::Source(e.to_string()))?;

        let file_name = request.file_name();
        let total = data.len();
        let chunks: Vec<Vec<u8>> = data.chunks(self.chunk_bytes).map(<[u8]>::to_vec).collect();

        let mut sent = 0usize;
        let mut progress = progress;
        let body = reqwest::Body::wrap_stream(futures_util::stream::iter(chunks).map(
            move |chunk| {
                sent += chunk.len();
                let _ = progress.try_send(percent_complete(sent, total));
                Ok::<Vec<u8>, std::io::Error>(chunk)
            },
        ));

        let part = reqwest::multipart::Part::stream_with_length(body, total as u64)
            .file_name(file_name.clone());
        let form = reqwest::multipart::Form::new()
            .text("fileName", file_name)
            .part("file", part);

        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let (status, message) = error_parts(response).await;
            return Err(UploadError::Service { status, message });
        }

        let parsed: UploadResponse = response
            .json()
            .await
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))?;

        Ok(UploadReceipt {
            media_path: parsed.file_path,
            thumbnail_path: parsed.thumbnail_url,
        })
    }
}

/// Maps bytes handed to the transport onto a 0-100 percentage.
///
/// An empty file counts as fully sent; the result never exceeds 100 even if
/// padding pushes `sent` past `total`.
fn percent_complete(sent: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let percent = sent.saturating_mul(100) / total;
    u8::try_from(percent.min(100)).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_scales_with_bytes_sent() {
        assert_eq!(percent_complete(0, 200), 0);
        assert_eq!(percent_complete(50, 200), 25);
        assert_eq!(percent_complete(199, 200), 99);
        assert_eq!(percent_complete(200, 200), 100);
    }

    #[test]
    fn percent_is_clamped_to_one_hundred() {
        assert_eq!(percent_complete(300, 200), 100);
        assert_eq!(percent_complete(0, 0), 100);
    }

    #[test]
    fn parses_upload_response_with_thumbnail() {
        let parsed: UploadResponse = serde_json::from_str(
            r#"{"filePath":"/videos/clip.mp4","thumbnailUrl":"/thumbs/clip.jpg"}"#,
        )
        .expect("response should parse");

        assert_eq!(parsed.file_path, "/videos/clip.mp4");
        assert_eq!(parsed.thumbnail_url.as_deref(), Some("/thumbs/clip.jpg"));
    }

    #[test]
    fn thumbnail_is_optional_in_upload_response() {
        let parsed: UploadResponse =
            serde_json::from_str(r#"{"filePath":"/videos/clip.mp4"}"#)
                .expect("response should parse");

        assert_eq!(parsed.file_path, "/videos/clip.mp4");
        assert!(parsed.thumbnail_url.is_none());
    }

    #[test]
    fn upload_route_is_joined_onto_the_base_url() {
        let uploader =
            CdnUploader::new("http://localhost:3000/", 1024).expect("client should build");
        assert_eq!(uploader.upload_url(), "http://localhost:3000/api/upload");
    }
}
