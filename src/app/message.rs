// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::{CatalogError, SessionError, UploadError, UploadReceipt};
use crate::domain::{VideoAsset, VideoId};
use crate::ui::detail;
use crate::ui::feed;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::upload_form;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Feed(feed::Message),
    Detail(detail::Message),
    UploadForm(upload_form::Message),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for notification auto-dismiss
    /// Result from the video pick dialog.
    PickFileDialogResult(Option<PathBuf>),
    /// Progress update while the picked file streams to the CDN (0 - 100).
    TransferProgress(u8),
    /// Result from the CDN transfer.
    TransferCompleted(Result<UploadReceipt, UploadError>),
    /// Result from publishing the draft to the catalog.
    PublishCompleted(Result<(), CatalogError>),
    /// Result from the feed catalog request.
    VideosLoaded(Result<Vec<VideoAsset>, CatalogError>),
    /// Result from a best-effort poster download for one feed card.
    PosterFetched {
        id: VideoId,
        result: Result<Vec<u8>, String>,
    },
    /// Result from the sign-out request.
    SignOutCompleted(Result<(), SessionError>),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
///
/// Directory overrides (`--data-dir`, `--config-dir`) are applied before
/// startup through `app::paths` and do not travel in here.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional backend base URL override.
    /// Takes precedence over the `[backend]` section of `settings.toml`.
    pub api_url: Option<String>,
}
