// SPDX-License-Identifier: MPL-2.0
//! Opaque media-rendering surface used by the feed cards and the detail view.
//!
//! The player widget owns everything visual about a video slot: the poster
//! frame (or a dark placeholder when none was fetched), a centered play
//! affordance, and an optional control strip. It emits no messages and never
//! surfaces decoding problems; a missing poster simply leaves the placeholder.
//!
//! The target resolution decides the widget's aspect ratio, so portrait
//! reels keep their 9:16 frame at any width.

use crate::domain::Resolution;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{Column, Container, Row, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Background, ContentFit, Element, Length, Theme,
};

/// Everything the player needs to render one video slot.
pub struct PlayerProps<'a> {
    /// Media reference of the video (CDN path); playback-opaque here.
    pub source: &'a str,
    /// Poster frame fetched by the app, when available.
    pub poster: Option<&'a Handle>,
    /// Target rendition; fixes the widget's aspect ratio.
    pub resolution: Resolution,
    /// Whether the control strip is rendered.
    pub controls: bool,
}

/// Renders the player surface at the given width.
///
/// Height follows from the target resolution's aspect ratio. The element is
/// message-generic because the player never emits anything.
pub fn view<'a, M: 'a>(props: &PlayerProps<'a>, width: f32) -> Element<'a, M> {
    let height = width / props.resolution.aspect_ratio();

    let surface: Element<'a, M> = match props.poster {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        None => placeholder(props.source),
    };

    let mut stack = Stack::new().push(
        Container::new(surface)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::player_stage),
    );

    // Play affordance sits over the poster; the placeholder carries its own.
    if props.poster.is_some() {
        stack = stack.push(
            Container::new(play_badge())
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );
    }

    if props.controls {
        stack = stack.push(
            Container::new(control_strip())
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(Vertical::Bottom),
        );
    }

    Container::new(stack)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .clip(true)
        .into()
}

/// Dark placeholder shown while no poster frame is available.
fn placeholder<'a, M: 'a>(source: &'a str) -> Element<'a, M> {
    let caption = file_label(source);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .push(
            Container::new(play_badge())
                .height(Length::Fill)
                .align_y(Vertical::Center),
        )
        .push(
            Text::new(caption)
                .size(typography::CAPTION)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .push(iced::widget::Space::new().height(spacing::MD))
        .into()
}

/// Centered pill with the play glyph.
fn play_badge<'a, M: 'a>() -> Element<'a, M> {
    Container::new(
        Text::new("▶")
            .size(sizing::ICON_MD)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fixed(sizing::ICON_XL))
    .height(Length::Fixed(sizing::ICON_XL))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::play_badge)
    .into()
}

/// Static control strip along the bottom edge.
fn control_strip<'a, M: 'a>() -> Element<'a, M> {
    let track = Container::new(iced::widget::Space::new().width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fixed(4.0))
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(palette::GRAY_700)),
            ..Default::default()
        });

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new("▶").size(typography::BODY_SM))
        .push(track)
        .push(Text::new("⛶").size(typography::BODY_SM));

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(crate::ui::theme::player_scrim_color())),
            text_color: Some(crate::ui::theme::player_chrome_color()),
            ..Default::default()
        })
        .into()
}

/// Shortens a media path down to its file name for the placeholder caption.
fn file_label(source: &str) -> String {
    source
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(source)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PORTRAIT;

    #[test]
    fn player_renders_without_poster() {
        let props = PlayerProps {
            source: "/videos/clip.mp4",
            poster: None,
            resolution: PORTRAIT,
            controls: true,
        };
        let _element: Element<'_, ()> = view(&props, 270.0);
    }

    #[test]
    fn player_renders_with_poster_and_no_controls() {
        let handle = Handle::from_rgba(1, 1, vec![0, 0, 0, 255]);
        let props = PlayerProps {
            source: "/videos/clip.mp4",
            poster: Some(&handle),
            resolution: PORTRAIT,
            controls: false,
        };
        let _element: Element<'_, ()> = view(&props, 270.0);
    }

    #[test]
    fn file_label_takes_the_last_path_segment() {
        assert_eq!(file_label("/videos/trip.mp4"), "trip.mp4");
        assert_eq!(file_label("trip.mp4"), "trip.mp4");
        assert_eq!(file_label("/videos/"), "/videos/");
    }
}
