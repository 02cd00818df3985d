// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers `App::update`
//! dispatches to: navigation, the catalog feed, the upload pipeline, and
//! session teardown.

use super::{notifications, Message, Screen};
use crate::application::port::{
    CatalogError, MediaUploader, SessionError, SessionGateway, TransferRequest, UploadError,
    UploadReceipt, VideoCatalog,
};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType, WarningEvent, WarningType};
use crate::domain::{Session, VideoAsset, VideoId};
use crate::infrastructure::http::poster;
use crate::ui::detail::{self, Event as DetailEvent};
use crate::ui::feed::{self, Event as FeedEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::upload_form::{self, Event as UploadFormEvent};
use iced::widget::image;
use iced::Task;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub menu_open: &'a mut bool,
    pub feed: &'a mut feed::State,
    pub posters: &'a mut HashMap<VideoId, image::Handle>,
    pub detail: &'a mut Option<VideoAsset>,
    pub upload_form: &'a mut upload_form::State,
    pub account: &'a mut Option<Session>,
    pub persisted: &'a mut super::persisted_state::AppState,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a DiagnosticsHandle,
    pub session: &'a Arc<dyn SessionGateway>,
    pub uploader: &'a Arc<dyn MediaUploader>,
    pub catalog: &'a Arc<dyn VideoCatalog>,
    pub api_base_url: &'a str,
}

/// Handles navbar messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::GoHome => {
            ctx.notifications
                .push(notifications::Notification::info("notification-brand-welcome"));
            go_to_feed(ctx)
        }
        NavbarEvent::OpenLogin => {
            ctx.notifications
                .push(notifications::Notification::info("notification-login-prompt"));
            *ctx.screen = Screen::Login;
            Task::none()
        }
        NavbarEvent::OpenUpload => {
            ctx.notifications
                .push(notifications::Notification::info("notification-upload-welcome"));
            *ctx.screen = Screen::Upload;
            Task::none()
        }
        NavbarEvent::SignOutRequested => {
            let gateway = ctx.session.clone();
            Task::perform(
                async move { gateway.sign_out().await },
                Message::SignOutCompleted,
            )
        }
    }
}

/// Switches to the feed and starts a catalog reload.
///
/// Every arrival reloads; the previous list is dropped so the loading row
/// shows while the request runs.
pub fn go_to_feed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.screen = Screen::Feed;
    *ctx.feed = feed::State::Loading;
    load_videos(ctx.catalog)
}

/// Kicks off a catalog list request.
pub fn load_videos(catalog: &Arc<dyn VideoCatalog>) -> Task<Message> {
    let catalog = catalog.clone();
    Task::perform(
        async move { catalog.list_videos().await },
        Message::VideosLoaded,
    )
}

/// Handles feed messages.
pub fn handle_feed_message(ctx: &mut UpdateContext<'_>, message: feed::Message) -> Task<Message> {
    match feed::update(message) {
        FeedEvent::ReloadRequested => {
            *ctx.feed = feed::State::Loading;
            load_videos(ctx.catalog)
        }
        FeedEvent::OpenDetail(id) => {
            let Some(video) = ctx.feed.videos().iter().find(|video| video.id == id) else {
                return Task::none();
            };
            *ctx.detail = Some(video.clone());
            *ctx.screen = Screen::Detail;
            Task::none()
        }
    }
}

/// Handles detail messages.
pub fn handle_detail_message(
    ctx: &mut UpdateContext<'_>,
    message: detail::Message,
) -> Task<Message> {
    match detail::update(message) {
        DetailEvent::BackToFeed => {
            *ctx.detail = None;
            go_to_feed(ctx)
        }
    }
}

/// Applies a catalog list result and schedules poster fetches.
///
/// Posters already cached are kept; entries for assets no longer listed are
/// dropped so the cache tracks the feed.
pub fn handle_videos_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<VideoAsset>, CatalogError>,
) -> Task<Message> {
    match result {
        Ok(videos) => {
            ctx.posters
                .retain(|id, _| videos.iter().any(|video| &video.id == id));

            let fetches: Vec<Task<Message>> = videos
                .iter()
                .filter(|video| !video.thumbnail_url.is_empty())
                .filter(|video| !ctx.posters.contains_key(&video.id))
                .map(|video| fetch_poster(ctx.api_base_url, video))
                .collect();

            *ctx.feed = feed::State::Loaded(videos);
            Task::batch(fetches)
        }
        Err(error) => {
            ctx.diagnostics
                .log_error(ErrorEvent::new(ErrorType::FeedLoad, error.to_string()));
            *ctx.feed = feed::State::Failed {
                message: error.to_string(),
            };
            Task::none()
        }
    }
}

/// Starts one best-effort poster download for a feed card.
fn fetch_poster(base_url: &str, video: &VideoAsset) -> Task<Message> {
    let base_url = base_url.to_string();
    let reference = video.thumbnail_url.clone();
    let id = video.id.clone();

    Task::perform(
        async move { poster::fetch_poster(&base_url, &reference).await },
        move |result| Message::PosterFetched {
            id: id.clone(),
            result,
        },
    )
}

/// Stores a fetched poster, or records the miss as a diagnostics warning.
pub fn handle_poster_fetched(
    ctx: &mut UpdateContext<'_>,
    id: VideoId,
    result: Result<Vec<u8>, String>,
) -> Task<Message> {
    match result {
        Ok(bytes) => {
            ctx.posters.insert(id, image::Handle::from_bytes(bytes));
        }
        Err(message) => {
            ctx.diagnostics
                .log_warning(WarningEvent::new(WarningType::ThumbnailFetch, message));
        }
    }
    Task::none()
}

/// Handles upload form messages.
pub fn handle_upload_form_message(
    ctx: &mut UpdateContext<'_>,
    message: upload_form::Message,
) -> Task<Message> {
    match ctx.upload_form.update(message) {
        UploadFormEvent::None => Task::none(),
        UploadFormEvent::PickFileRequested => {
            handle_pick_file_dialog(ctx.persisted.last_video_directory.clone())
        }
        UploadFormEvent::PublishBlocked => {
            ctx.notifications
                .push(notifications::Notification::error("notification-upload-first"));
            Task::none()
        }
        UploadFormEvent::Publish(draft) => {
            let catalog = ctx.catalog.clone();
            Task::perform(
                async move { catalog.create_video(&draft).await },
                Message::PublishCompleted,
            )
        }
    }
}

/// Opens the platform file dialog for picking a video.
pub fn handle_pick_file_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .add_filter("Video", crate::domain::video::VIDEO_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::PickFileDialogResult,
    )
}

/// Handles the result of the video pick dialog.
pub fn handle_pick_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };

    ctx.persisted.set_last_video_directory_from_file(&path);
    if let Some(key) = ctx.persisted.save() {
        ctx.notifications.push(
            notifications::Notification::warning(key).with_warning_type(WarningType::StatePersist),
        );
    }

    ctx.upload_form.begin_transfer(path.clone());
    start_transfer(ctx.uploader, path)
}

/// Streams the picked file to the CDN, surfacing progress as messages.
pub fn start_transfer(uploader: &Arc<dyn MediaUploader>, source: PathBuf) -> Task<Message> {
    use iced::futures::channel::{mpsc, oneshot};
    use iced::futures::stream;
    use iced::futures::StreamExt;

    // Channels for progress and result
    let (progress_tx, progress_rx) = mpsc::channel::<u8>(100);
    let (result_tx, result_rx) = oneshot::channel::<Result<UploadReceipt, UploadError>>();

    // Spawn the transfer task
    let uploader = uploader.clone();
    tokio::spawn(async move {
        let result = uploader
            .transfer(TransferRequest::new(source), progress_tx)
            .await;

        // Send the result through the oneshot channel; the progress sender
        // was moved into the transfer and is closed by now
        let _ = result_tx.send(result);
    });

    // State for the stream
    #[allow(clippy::items_after_statements)]
    enum TransferPhase {
        ReceivingProgress {
            progress_rx: mpsc::Receiver<u8>,
            result_rx: oneshot::Receiver<Result<UploadReceipt, UploadError>>,
        },
        WaitingForResult {
            result_rx: oneshot::Receiver<Result<UploadReceipt, UploadError>>,
        },
        Completed,
    }

    let transfer_stream = stream::unfold(
        TransferPhase::ReceivingProgress {
            progress_rx,
            result_rx,
        },
        |phase| async move {
            match phase {
                TransferPhase::ReceivingProgress {
                    mut progress_rx,
                    result_rx,
                } => {
                    // Try to receive progress
                    match progress_rx.next().await {
                        Some(percent) => Some((
                            Message::TransferProgress(percent),
                            TransferPhase::ReceivingProgress {
                                progress_rx,
                                result_rx,
                            },
                        )),
                        None => {
                            // Progress channel closed, wait for the result
                            Some((
                                Message::TransferProgress(100),
                                TransferPhase::WaitingForResult { result_rx },
                            ))
                        }
                    }
                }
                TransferPhase::WaitingForResult { result_rx } => {
                    let message = match result_rx.await {
                        Ok(result) => Message::TransferCompleted(result),
                        Err(_) => Message::TransferCompleted(Err(UploadError::Network(
                            "upload task cancelled".to_string(),
                        ))),
                    };
                    Some((message, TransferPhase::Completed))
                }
                TransferPhase::Completed => None, // Terminate the stream
            }
        },
    );

    Task::stream(transfer_stream)
}

/// Applies a progress report to the form.
pub fn handle_transfer_progress(ctx: &mut UpdateContext<'_>, percent: u8) -> Task<Message> {
    ctx.upload_form.apply_progress(percent);
    Task::none()
}

/// Handles the outcome of a CDN transfer.
pub fn handle_transfer_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<UploadReceipt, UploadError>,
) -> Task<Message> {
    match result {
        Ok(receipt) => {
            ctx.upload_form.complete_transfer(receipt);
            ctx.notifications.push(notifications::Notification::success(
                "notification-upload-success",
            ));
        }
        Err(error) => {
            ctx.upload_form.fail_transfer();
            ctx.notifications.push(
                notifications::Notification::error("notification-upload-error")
                    .with_arg("reason", error.to_string())
                    .with_error_type(ErrorType::Upload),
            );
        }
    }
    Task::none()
}

/// Handles the outcome of publishing a draft to the catalog.
pub fn handle_publish_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<(), CatalogError>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            ctx.upload_form.complete_publish();
            ctx.notifications.push(notifications::Notification::success(
                "notification-publish-success",
            ));
        }
        Err(error) => {
            ctx.upload_form.fail_publish();
            ctx.notifications.push(publish_error_notification(&error));
        }
    }
    Task::none()
}

/// Maps a catalog error onto a toast: the backend's own wording when it
/// sent any, the generic key otherwise.
fn publish_error_notification(error: &CatalogError) -> notifications::Notification {
    let notification = match error {
        CatalogError::Backend { message, .. } if !message.is_empty() => {
            notifications::Notification::error("notification-publish-error-detail")
                .with_arg("detail", message.clone())
        }
        _ => notifications::Notification::error("notification-publish-error"),
    };
    notification.with_error_type(ErrorType::Publish)
}

/// Handles the outcome of a sign-out request.
///
/// The session is only dropped on success; a failed request keeps the user
/// signed in, matching what the gateway itself does.
pub fn handle_sign_out_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<(), SessionError>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            *ctx.account = None;
            ctx.persisted.account_email = None;
            if let Some(key) = ctx.persisted.save() {
                ctx.notifications.push(
                    notifications::Notification::warning(key)
                        .with_warning_type(WarningType::StatePersist),
                );
            }
            ctx.notifications.push(notifications::Notification::success(
                "notification-sign-out-success",
            ));
        }
        Err(_) => {
            ctx.notifications.push(
                notifications::Notification::error("notification-sign-out-error")
                    .with_error_type(ErrorType::Session),
            );
        }
    }
    Task::none()
}
