// SPDX-License-Identifier: MPL-2.0
//! Detail screen for a single video asset.
//!
//! Shows the asset's player above its title and description, with a link
//! back to the feed. Playback controls are always offered here, whatever
//! the asset's own flag says about its feed card.

use crate::app::i18n::I18n;
use crate::domain::{VideoAsset, PORTRAIT};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::player::{self, PlayerProps};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::image::Handle;
use iced::widget::{button, scrollable, text, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length, Theme};

/// Width of the player stage; portrait assets grow tall and scroll.
const STAGE_WIDTH: f32 = 480.0;

/// Messages emitted by the detail screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    BackToFeed,
}

/// Process a detail message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::BackPressed => Event::BackToFeed,
    }
}

/// Contextual data needed to render the detail screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub video: &'a VideoAsset,
    pub poster: Option<&'a Handle>,
}

/// Render the detail screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back = button(Text::new(ctx.i18n.tr("detail-back")).size(typography::BODY))
        .on_press(Message::BackPressed)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::link);

    let stage = player::view(&player_props(ctx.video, ctx.poster), STAGE_WIDTH);

    let title = Text::new(&ctx.video.title).size(typography::TITLE_MD);

    let description = Text::new(&ctx.video.description)
        .size(typography::BODY)
        .style(|_theme: &Theme| text::Style {
            color: Some(theme::muted_text_color()),
        });

    let content = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(Container::new(back).width(Length::Fill))
        .push(
            Container::new(stage)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .push(title)
        .push(description);

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::LG),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Player configuration for the detail stage; controls are always on.
fn player_props<'a>(video: &'a VideoAsset, poster: Option<&'a Handle>) -> PlayerProps<'a> {
    PlayerProps {
        source: &video.video_url,
        poster,
        resolution: PORTRAIT,
        controls: true,
    }
}
