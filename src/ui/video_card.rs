// SPDX-License-Identifier: MPL-2.0
//! Feed card for a single video asset.
//!
//! Pure rendering: the card reads the asset, never mutates anything, and
//! makes no network calls. Both the media region and the title link to the
//! asset's detail view; playback itself is delegated to the player widget.

use crate::domain::{VideoAsset, VideoId, PORTRAIT};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::player::{self, PlayerProps};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::image::Handle;
use iced::widget::{button, text, Column, Container, Text};
use iced::{Element, Length, Theme};

/// Messages emitted by a card.
#[derive(Debug, Clone)]
pub enum Message {
    /// Either activation target was pressed; route to the detail view.
    OpenDetail(VideoId),
}

/// Renders one card for `video`.
///
/// `poster` is the pre-fetched thumbnail frame; `None` keeps the player's
/// placeholder surface.
pub fn view<'a>(video: &'a VideoAsset, poster: Option<&'a Handle>) -> Element<'a, Message> {
    let media_width = sizing::CARD_WIDTH - 2.0 * spacing::SM;

    let player = player::view(
        &PlayerProps {
            source: &video.video_url,
            poster,
            resolution: PORTRAIT,
            controls: video.controls,
        },
        media_width,
    );

    // The whole media region is one activation target.
    let media_link = button(player)
        .on_press(Message::OpenDetail(video.id.clone()))
        .padding(0)
        .style(media_link_style);

    // Single line, clipped at the card edge.
    let title_link = button(
        Text::new(&video.title)
            .size(typography::TITLE_SM)
            .wrapping(text::Wrapping::None),
    )
    .on_press(Message::OpenDetail(video.id.clone()))
    .padding(0)
    .style(styles::button::link);

    // Two lines worth of description, clipped below.
    let description = Container::new(
        Text::new(&video.description)
            .size(typography::BODY_SM)
            .style(|_theme: &Theme| text::Style {
                color: Some(theme::muted_text_color()),
            }),
    )
    .height(Length::Fixed(description_height()))
    .clip(true);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(media_link)
        .push(Container::new(title_link).clip(true))
        .push(description);

    Container::new(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::card)
        .into()
}

/// Vertical room for two wrapped lines of description text.
fn description_height() -> f32 {
    typography::BODY_SM * 1.4 * 2.0
}

/// Transparent button chrome so the media region looks like plain content.
fn media_link_style(_theme: &Theme, _status: iced::widget::button::Status) -> iced::widget::button::Style {
    iced::widget::button::Style {
        background: None,
        text_color: theme::player_chrome_color(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_video() -> VideoAsset {
        VideoAsset {
            id: VideoId::new("68a1"),
            title: "Summer trip".to_string(),
            description: "Clips from the coast".to_string(),
            video_url: "/videos/trip.mp4".to_string(),
            thumbnail_url: "/thumbs/trip.jpg".to_string(),
            controls: true,
            created_at: None,
        }
    }

    #[test]
    fn card_renders_without_poster() {
        let video = sample_video();
        let _element = view(&video, None);
    }

    #[test]
    fn card_renders_with_poster() {
        let video = sample_video();
        let poster = Handle::from_rgba(1, 1, vec![255, 255, 255, 255]);
        let _element = view(&video, Some(&poster));
    }

    #[test]
    fn description_fits_two_lines() {
        assert!(description_height() > typography::BODY_SM * 2.0);
        assert!(description_height() < typography::BODY_SM * 4.0);
    }
}
