// SPDX-License-Identifier: MPL-2.0
//! Video upload form: metadata fields, delegated file transfer, publish flow.
//!
//! The form owns the whole submit state machine. Submit stays disabled until
//! the transfer has reported progress, flips to a "Publishing…" label while
//! the create call is in flight, resets completely on success, and keeps
//! everything (including the uploaded media reference) on failure so the user
//! can retry without re-uploading.
//!
//! The embedded transfer control has its own little state (selected file,
//! in-flight flag) which is remounted wholesale on a successful publish, so
//! a stale "file attached" claim cannot survive a reset.

use crate::app::i18n::I18n;
use crate::application::port::UploadReceipt;
use crate::domain::NewVideo;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{button, progress_bar, text, text_input, Column, Container, Row, Text};
use iced::{
    alignment::Vertical,
    Element, Length, Theme,
};
use std::path::PathBuf;

/// i18n key for the missing-title inline error.
const TITLE_REQUIRED_KEY: &str = "upload-form-error-title-required";
/// i18n key for the missing-description inline error.
const DESCRIPTION_REQUIRED_KEY: &str = "upload-form-error-description-required";

/// Inline validation errors, one slot per required field.
///
/// The slots hold i18n keys; the view resolves them next to the fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
}

impl ValidationErrors {
    /// True when at least one field is flagged.
    #[must_use]
    pub fn any(&self) -> bool {
        self.title.is_some() || self.description.is_some()
    }
}

/// State of the embedded file-transfer control.
///
/// Deliberately its own type: a successful publish replaces it with
/// `TransferControl::default()`, the moral equivalent of remounting the
/// widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferControl {
    /// File the user picked, shown next to the picker button.
    pub selected_file: Option<PathBuf>,
    /// A transfer for that file is currently running.
    pub in_flight: bool,
}

/// Upload form state; one fresh instance per visit to the upload screen.
#[derive(Debug, Default)]
pub struct State {
    title: String,
    description: String,
    media_ref: String,
    thumbnail_ref: String,
    progress: u8,
    submitting: bool,
    errors: ValidationErrors,
    transfer: TransferControl,
}

/// Messages emitted by the form's widgets.
#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    DescriptionChanged(String),
    PickFilePressed,
    SubmitPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Open the platform file dialog.
    PickFileRequested,
    /// All checks passed; publish this draft to the catalog.
    Publish(NewVideo),
    /// Fields are valid but no upload has completed yet.
    PublishBlocked,
}

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    /// Processes a form message and returns the event for the app.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::TitleChanged(value) => {
                self.title = value;
                // Re-validate only while an error is showing, so the flag
                // clears the moment the field becomes valid.
                if self.errors.title.is_some() {
                    self.errors.title = validate_required(&self.title, TITLE_REQUIRED_KEY);
                }
                Event::None
            }
            Message::DescriptionChanged(value) => {
                self.description = value;
                if self.errors.description.is_some() {
                    self.errors.description =
                        validate_required(&self.description, DESCRIPTION_REQUIRED_KEY);
                }
                Event::None
            }
            Message::PickFilePressed => {
                if self.transfer.in_flight || self.submitting {
                    Event::None
                } else {
                    Event::PickFileRequested
                }
            }
            Message::SubmitPressed => {
                self.errors = ValidationErrors {
                    title: validate_required(&self.title, TITLE_REQUIRED_KEY),
                    description: validate_required(&self.description, DESCRIPTION_REQUIRED_KEY),
                };
                if self.errors.any() {
                    return Event::None;
                }
                if self.media_ref.is_empty() {
                    return Event::PublishBlocked;
                }

                self.submitting = true;
                Event::Publish(NewVideo {
                    title: self.title.clone(),
                    description: self.description.clone(),
                    video_url: self.media_ref.clone(),
                    thumbnail_url: self.thumbnail_ref.clone(),
                })
            }
        }
    }

    /// Records that a transfer started for `source`.
    ///
    /// Progress drops back to zero, which keeps submit disabled until the
    /// new transfer reports in.
    pub fn begin_transfer(&mut self, source: PathBuf) {
        self.transfer.selected_file = Some(source);
        self.transfer.in_flight = true;
        self.progress = 0;
    }

    /// Stores a progress percentage as received from the uploader.
    pub fn apply_progress(&mut self, percent: u8) {
        self.progress = percent.min(100);
    }

    /// Applies a completed transfer's receipt.
    ///
    /// The thumbnail falls back to the video path when the upload service
    /// returned none.
    pub fn complete_transfer(&mut self, receipt: UploadReceipt) {
        self.thumbnail_ref = receipt
            .thumbnail_path
            .unwrap_or_else(|| receipt.media_path.clone());
        self.media_ref = receipt.media_path;
        self.transfer.in_flight = false;
    }

    /// Rolls back after a failed transfer: progress gates submit again.
    pub fn fail_transfer(&mut self) {
        self.progress = 0;
        self.transfer.in_flight = false;
    }

    /// Full reset after a confirmed publish, including a fresh transfer
    /// control.
    pub fn complete_publish(&mut self) {
        *self = Self::default();
    }

    /// Re-enables submit after a failed publish; everything else is kept
    /// so the user can retry without re-uploading.
    pub fn fail_publish(&mut self) {
        self.submitting = false;
    }

    /// Submit control availability: disabled while submitting or before the
    /// transfer has reported any progress.
    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        !self.submitting && self.progress > 0
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn media_ref(&self) -> &str {
        &self.media_ref
    }

    #[must_use]
    pub fn thumbnail_ref(&self) -> &str {
        &self.thumbnail_ref
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn errors(&self) -> ValidationErrors {
        self.errors
    }

    #[must_use]
    pub fn transfer(&self) -> &TransferControl {
        &self.transfer
    }

    /// Renders the form.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let heading = Text::new(i18n.tr("upload-form-title")).size(typography::TITLE_LG);

        let title_field = labeled_field(
            i18n.tr("upload-form-label-title"),
            text_input(&i18n.tr("upload-form-placeholder-title"), &self.title)
                .on_input(Message::TitleChanged)
                .padding(spacing::XS)
                .into(),
            self.errors.title.map(|key| i18n.tr(key)),
        );

        let description_field = labeled_field(
            i18n.tr("upload-form-label-description"),
            text_input(
                &i18n.tr("upload-form-placeholder-description"),
                &self.description,
            )
            .on_input(Message::DescriptionChanged)
            .padding(spacing::XS)
            .into(),
            self.errors.description.map(|key| i18n.tr(key)),
        );

        let file_field = labeled_field(
            i18n.tr("upload-form-label-file"),
            self.transfer_row(i18n),
            None,
        );

        let mut column = Column::new()
            .spacing(spacing::LG)
            .push(heading)
            .push(title_field)
            .push(description_field)
            .push(file_field);

        // The bar only appears once the transfer reports progress.
        if self.progress > 0 {
            column = column.push(self.progress_row(i18n));
        }

        let submit_label = if self.submitting {
            i18n.tr("upload-form-submitting")
        } else {
            i18n.tr("upload-form-submit")
        };
        let submit = button(Text::new(submit_label).size(typography::BODY_LG))
            .on_press_maybe(self.submit_enabled().then_some(Message::SubmitPressed))
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary);

        column = column.push(submit);

        Container::new(column)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .padding(spacing::LG)
            .style(styles::container::panel)
            .into()
    }

    /// Picker button plus the selected file's name (or a hint).
    fn transfer_row<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let pick_enabled = !self.transfer.in_flight && !self.submitting;
        let pick_button = button(Text::new(i18n.tr("upload-form-pick-file")))
            .on_press_maybe(pick_enabled.then_some(Message::PickFilePressed))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::secondary);

        let file_name = self
            .transfer
            .selected_file
            .as_deref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| i18n.tr("upload-form-no-file"));

        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(pick_button)
            .push(
                Text::new(file_name)
                    .size(typography::BODY_SM)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(theme::muted_text_color()),
                    }),
            )
            .into()
    }

    /// Progress bar with a percentage caption.
    fn progress_row<'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        let percent = self.progress.to_string();
        let caption = i18n.tr_with_args("upload-form-progress", &[("progress", percent.as_str())]);

        Column::new()
            .spacing(spacing::XXS)
            .push(
                progress_bar(0.0..=100.0, f32::from(self.progress))
                    .girth(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT)),
            )
            .push(Text::new(caption).size(typography::CAPTION))
            .into()
    }
}

/// Validates a required field, returning the error key when empty.
///
/// No trimming: whitespace counts as content, mirroring a plain `required`
/// check.
fn validate_required(value: &str, error_key: &'static str) -> Option<&'static str> {
    if value.is_empty() {
        Some(error_key)
    } else {
        None
    }
}

/// Label above, widget below, optional inline error underneath.
fn labeled_field<'a>(
    label: String,
    field: Element<'a, Message>,
    error: Option<String>,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY))
        .push(field);

    if let Some(message) = error {
        column = column.push(Text::new(message).size(typography::BODY_SM).style(
            |_theme: &Theme| text::Style {
                color: Some(theme::error_text_color()),
            },
        ));
    }

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_ready_state() -> State {
        let mut state = State::default();
        let _ = state.update(Message::TitleChanged("My Trip".to_string()));
        let _ = state.update(Message::DescriptionChanged("Summer trip".to_string()));
        state.begin_transfer(PathBuf::from("/home/user/trip.mp4"));
        state.apply_progress(100);
        state.complete_transfer(UploadReceipt {
            media_path: "/videos/a.mp4".to_string(),
            thumbnail_path: None,
        });
        state
    }

    #[test]
    fn submit_is_disabled_until_progress_reported() {
        let mut state = State::default();
        assert!(!state.submit_enabled());

        state.apply_progress(1);
        assert!(state.submit_enabled());
    }

    #[test]
    fn empty_title_is_flagged_and_nothing_is_published() {
        let mut state = State::default();
        let _ = state.update(Message::DescriptionChanged("Summer trip".to_string()));

        let event = state.update(Message::SubmitPressed);
        assert!(matches!(event, Event::None));
        assert_eq!(state.errors().title, Some(TITLE_REQUIRED_KEY));
        assert_eq!(state.errors().description, None);
    }

    #[test]
    fn empty_description_is_flagged_symmetrically() {
        let mut state = State::default();
        let _ = state.update(Message::TitleChanged("My Trip".to_string()));

        let event = state.update(Message::SubmitPressed);
        assert!(matches!(event, Event::None));
        assert_eq!(state.errors().description, Some(DESCRIPTION_REQUIRED_KEY));
        assert_eq!(state.errors().title, None);
    }

    #[test]
    fn whitespace_counts_as_content() {
        let mut state = State::default();
        let _ = state.update(Message::TitleChanged(" ".to_string()));
        let _ = state.update(Message::DescriptionChanged(" ".to_string()));

        let event = state.update(Message::SubmitPressed);
        // Fields pass the required check; the missing upload blocks instead.
        assert!(matches!(event, Event::PublishBlocked));
        assert!(!state.errors().any());
    }

    #[test]
    fn error_clears_while_typing_and_reflags_on_empty() {
        let mut state = State::default();
        let _ = state.update(Message::SubmitPressed);
        assert!(state.errors().title.is_some());

        let _ = state.update(Message::TitleChanged("M".to_string()));
        assert!(state.errors().title.is_none());

        let _ = state.update(Message::TitleChanged(String::new()));
        assert_eq!(state.errors().title, Some(TITLE_REQUIRED_KEY));
    }

    #[test]
    fn valid_fields_without_upload_block_the_publish() {
        let mut state = State::default();
        let _ = state.update(Message::TitleChanged("My Trip".to_string()));
        let _ = state.update(Message::DescriptionChanged("Summer trip".to_string()));

        let event = state.update(Message::SubmitPressed);
        assert!(matches!(event, Event::PublishBlocked));
        assert!(!state.is_submitting());
    }

    #[test]
    fn publish_payload_is_exactly_the_four_fields() {
        let mut state = filled_ready_state();

        let event = state.update(Message::SubmitPressed);
        match event {
            Event::Publish(draft) => {
                assert_eq!(draft.title, "My Trip");
                assert_eq!(draft.description, "Summer trip");
                assert_eq!(draft.video_url, "/videos/a.mp4");
                // Receipt had no thumbnail: falls back to the video path.
                assert_eq!(draft.thumbnail_url, "/videos/a.mp4");
            }
            other => panic!("expected publish event, got {other:?}"),
        }
        assert!(state.is_submitting());
        assert!(!state.submit_enabled());
    }

    #[test]
    fn receipt_thumbnail_is_used_when_present() {
        let mut state = State::default();
        state.begin_transfer(PathBuf::from("/home/user/trip.mp4"));
        state.apply_progress(100);
        state.complete_transfer(UploadReceipt {
            media_path: "/videos/a.mp4".to_string(),
            thumbnail_path: Some("/thumbs/a.jpg".to_string()),
        });

        assert_eq!(state.media_ref(), "/videos/a.mp4");
        assert_eq!(state.thumbnail_ref(), "/thumbs/a.jpg");
    }

    #[test]
    fn successful_publish_resets_everything() {
        let mut state = filled_ready_state();
        let _ = state.update(Message::SubmitPressed);

        state.complete_publish();

        assert_eq!(state.title(), "");
        assert_eq!(state.description(), "");
        assert_eq!(state.media_ref(), "");
        assert_eq!(state.thumbnail_ref(), "");
        assert_eq!(state.progress(), 0);
        assert!(!state.is_submitting());
        assert!(!state.errors().any());
        // The transfer control is remounted, not just cleared field by field.
        assert_eq!(*state.transfer(), TransferControl::default());
    }

    #[test]
    fn failed_publish_keeps_state_and_reenables_submit() {
        let mut state = filled_ready_state();
        let _ = state.update(Message::SubmitPressed);
        assert!(state.is_submitting());

        state.fail_publish();

        assert_eq!(state.title(), "My Trip");
        assert_eq!(state.description(), "Summer trip");
        assert_eq!(state.media_ref(), "/videos/a.mp4");
        assert_eq!(state.progress(), 100);
        assert!(!state.is_submitting());
        assert!(state.submit_enabled());
    }

    #[test]
    fn failed_transfer_resets_progress_and_gate() {
        let mut state = State::default();
        state.begin_transfer(PathBuf::from("/home/user/trip.mp4"));
        state.apply_progress(42);
        assert!(state.submit_enabled());

        state.fail_transfer();

        assert_eq!(state.progress(), 0);
        assert!(!state.submit_enabled());
        assert!(!state.transfer().in_flight);
        // The picked file stays listed so the user can retry.
        assert!(state.transfer().selected_file.is_some());
    }

    #[test]
    fn picking_is_blocked_while_a_transfer_runs() {
        let mut state = State::default();
        state.begin_transfer(PathBuf::from("/home/user/trip.mp4"));

        let event = state.update(Message::PickFilePressed);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn pick_request_passes_through_when_idle() {
        let mut state = State::default();
        let event = state.update(Message::PickFilePressed);
        assert!(matches!(event, Event::PickFileRequested));
    }

    #[test]
    fn form_view_renders_in_every_phase() {
        let i18n = I18n::default();

        let idle = State::default();
        let _ = idle.view(ViewContext { i18n: &i18n });

        let mut uploading = State::default();
        uploading.begin_transfer(PathBuf::from("/home/user/trip.mp4"));
        uploading.apply_progress(37);
        let _ = uploading.view(ViewContext { i18n: &i18n });

        let mut submitting = filled_ready_state();
        let _ = submitting.update(Message::SubmitPressed);
        let _ = submitting.view(ViewContext { i18n: &i18n });
    }
}
