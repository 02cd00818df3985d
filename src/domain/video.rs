// SPDX-License-Identifier: MPL-2.0
//! Video asset types.
//!
//! These types mirror the backend's video documents. Serde renames follow the
//! server's JSON field names (`_id`, `videoUrl`, `thumbnailUrl`, ...), so the
//! structs double as the wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// File extensions the upload picker offers.
///
/// Containers the backend's transcoding pipeline accepts; everything else is
/// rejected before it leaves the user's disk.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "m4v", "webm", "mkv", "avi"];

// =============================================================================
// VideoId
// =============================================================================

/// Opaque backend identifier of a video document.
///
/// The client never interprets the contents; it only passes the id back to
/// the server and uses it as a map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Pixel dimensions a video is rendered at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

/// The fixed portrait rendering target for reels (9:16).
///
/// Every card and the detail screen display videos at this shape; the
/// backend's delivery transformation uses the same dimensions.
pub const PORTRAIT: Resolution = Resolution {
    width: 1080,
    height: 1920,
};

impl Resolution {
    /// Width divided by height.
    #[must_use]
    pub fn aspect_ratio(self) -> f32 {
        self.width as f32 / self.height as f32
    }

    #[must_use]
    pub fn is_portrait(self) -> bool {
        self.height > self.width
    }
}

// =============================================================================
// VideoAsset
// =============================================================================

/// A published video as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAsset {
    /// Backend document id.
    #[serde(rename = "_id")]
    pub id: VideoId,

    pub title: String,

    pub description: String,

    /// Delivery path of the video media.
    pub video_url: String,

    /// Delivery path of the poster image.
    pub thumbnail_url: String,

    /// Whether playback controls are shown for this video.
    #[serde(default = "default_controls")]
    pub controls: bool,

    /// Server-side creation timestamp; list payloads may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_controls() -> bool {
    true
}

// =============================================================================
// NewVideo
// =============================================================================

/// Payload for publishing a video.
///
/// Exactly the four fields the create endpoint accepts; playback defaults
/// (controls, delivery transformation) are applied server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVideo {
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
}
