// SPDX-License-Identifier: MPL-2.0
//! Feed screen: the public grid of published videos.
//!
//! The feed itself never talks to the backend. The app loads the catalog on
//! startup and whenever the user navigates here, then hands the result down
//! as a [`State`]; retry and refresh bubble back up as reload events.

use crate::app::i18n::I18n;
use crate::domain::{VideoAsset, VideoId};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use crate::ui::video_card;
use iced::widget::image::Handle;
use iced::widget::{button, scrollable, text, Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length, Theme};
use std::collections::HashMap;

/// Cards per grid row before wrapping to the next one.
const CARDS_PER_ROW: usize = 2;

/// Load state of the feed, replaced wholesale by the app on every reload.
#[derive(Debug, Clone, Default)]
pub enum State {
    #[default]
    Loading,
    Loaded(Vec<VideoAsset>),
    Failed {
        message: String,
    },
}

impl State {
    /// Published assets from the last successful load; empty otherwise.
    pub fn videos(&self) -> &[VideoAsset] {
        match self {
            State::Loaded(videos) => videos,
            _ => &[],
        }
    }
}

/// Messages emitted by the feed.
#[derive(Debug, Clone)]
pub enum Message {
    Card(video_card::Message),
    RetryPressed,
    RefreshPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// Reload the catalog and replace the feed state.
    ReloadRequested,
    /// Open the detail view for one asset.
    OpenDetail(VideoId),
}

/// Process a feed message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Card(video_card::Message::OpenDetail(id)) => Event::OpenDetail(id),
        Message::RetryPressed | Message::RefreshPressed => Event::ReloadRequested,
    }
}

/// Contextual data needed to render the feed.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Poster frames fetched so far, keyed by asset id.
    pub posters: &'a HashMap<VideoId, Handle>,
}

/// Render the feed screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match ctx.state {
        State::Loading => status_row(ctx.i18n.tr("feed-loading"), None),
        State::Failed { message } => error_row(ctx.i18n, message),
        State::Loaded(videos) if videos.is_empty() => {
            status_row(ctx.i18n.tr("feed-empty"), None)
        }
        State::Loaded(videos) => card_grid(ctx.i18n, videos, ctx.posters),
    };

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::LG),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Centered single-line status with an optional action underneath.
fn status_row<'a>(line: String, action: Option<Element<'a, Message>>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(
            Text::new(line)
                .size(typography::BODY_LG)
                .style(|_theme: &Theme| text::Style {
                    color: Some(theme::muted_text_color()),
                }),
        );

    if let Some(action) = action {
        column = column.push(action);
    }

    Container::new(column)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .into()
}

/// Error state with the failure detail and a retry button.
fn error_row<'a>(i18n: &'a I18n, message: &'a str) -> Element<'a, Message> {
    let retry = button(Text::new(i18n.tr("feed-retry")).size(typography::BODY))
        .on_press(Message::RetryPressed)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary);

    let column = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(
            Text::new(i18n.tr("feed-error"))
                .size(typography::BODY_LG)
                .style(|_theme: &Theme| text::Style {
                    color: Some(theme::error_text_color()),
                }),
        )
        .push(
            Text::new(message.to_string())
                .size(typography::BODY_SM)
                .style(|_theme: &Theme| text::Style {
                    color: Some(theme::muted_text_color()),
                }),
        )
        .push(retry);

    Container::new(column)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .into()
}

/// The loaded grid: a refresh affordance above wrapped rows of cards.
fn card_grid<'a>(
    i18n: &'a I18n,
    videos: &'a [VideoAsset],
    posters: &'a HashMap<VideoId, Handle>,
) -> Element<'a, Message> {
    let refresh = button(Text::new(i18n.tr("feed-refresh")).size(typography::BODY_SM))
        .on_press(Message::RefreshPressed)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::link);

    let mut grid = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(
            Container::new(refresh)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        );

    for chunk in videos.chunks(CARDS_PER_ROW) {
        let mut row = Row::new().spacing(spacing::LG);
        for video in chunk {
            row = row.push(video_card::view(video, posters.get(&video.id)).map(Message::Card));
        }
        grid = grid.push(row);
    }

    grid.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_videos(count: usize) -> Vec<VideoAsset> {
        (0..count)
            .map(|index| VideoAsset {
                id: VideoId::new(format!("id-{index}")),
                title: format!("Video {index}"),
                description: "A short clip".to_string(),
                video_url: format!("/videos/{index}.mp4"),
                thumbnail_url: format!("/thumbs/{index}.jpg"),
                controls: true,
                created_at: None,
            })
            .collect()
    }

    #[test]
    fn default_state_is_loading() {
        assert!(matches!(State::default(), State::Loading));
    }

    #[test]
    fn videos_accessor_is_empty_unless_loaded() {
        assert!(State::Loading.videos().is_empty());
        assert!(State::Failed {
            message: "offline".to_string()
        }
        .videos()
        .is_empty());
        assert_eq!(State::Loaded(sample_videos(3)).videos().len(), 3);
    }

    #[test]
    fn retry_and_refresh_request_a_reload() {
        assert!(matches!(
            update(Message::RetryPressed),
            Event::ReloadRequested
        ));
        assert!(matches!(
            update(Message::RefreshPressed),
            Event::ReloadRequested
        ));
    }

    #[test]
    fn card_activation_opens_the_detail_view() {
        let event = update(Message::Card(video_card::Message::OpenDetail(VideoId::new(
            "68a1",
        ))));
        match event {
            Event::OpenDetail(id) => assert_eq!(id.as_str(), "68a1"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn feed_renders_every_state() {
        let i18n = I18n::default();
        let posters = HashMap::new();

        for state in [
            State::Loading,
            State::Failed {
                message: "connection refused".to_string(),
            },
            State::Loaded(Vec::new()),
            State::Loaded(sample_videos(5)),
        ] {
            let _element = view(ViewContext {
                i18n: &i18n,
                state: &state,
                posters: &posters,
            });
        }
    }
}
