// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.
//!
//! Each visible notification becomes a small fixed-width card with a
//! severity-colored accent border, the localized message, and a dismiss
//! button. Glyphs are plain text characters so no icon assets are involved.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::app::i18n::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget namespace.
pub struct Toast;

impl Toast {
    /// Renders one toast card.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent = notification.severity().accent_color();

        let glyph = Text::new(glyph_for(notification.severity()))
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let body = Text::new(localized_message(notification, i18n))
            .size(typography::BODY)
            .width(Length::Fill)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let close = button(Text::new("✕").size(typography::BODY_SM))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(glyph)
            .push(body)
            .push(close);

        Container::new(row)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| card_style(theme, accent))
            .into()
    }

    /// Renders the whole toast stack, anchored to the bottom-right corner.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let mut stack = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);
        let mut any = false;

        for notification in manager.visible() {
            stack = stack.push(Self::view(notification, i18n));
            any = true;
        }

        if !any {
            return Space::new().into();
        }

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

/// Resolves the notification message, interpolating args when present.
fn localized_message(notification: &Notification, i18n: &I18n) -> String {
    let args = notification.message_args();
    if args.is_empty() {
        return i18n.tr(notification.message_key());
    }
    let borrowed: Vec<(&str, &str)> = args
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();
    i18n.tr_with_args(notification.message_key(), &borrowed)
}

/// Text glyph shown next to the message.
fn glyph_for(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✓",
        Severity::Info => "ℹ",
        Severity::Warning | Severity::Error => "!",
    }
}

/// Card surface with the severity accent border.
fn card_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        text_color: Some(theme.palette().text),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Quiet button that only shows a wash behind the glyph on interaction.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let wash = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: wash.map(|alpha| {
            iced::Background::Color(Color {
                a: alpha,
                ..palette::GRAY_400
            })
        }),
        text_color: theme.extended_palette().background.base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_border_takes_the_accent_color() {
        let style = card_style(&Theme::Dark, palette::SUCCESS_500);
        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn success_and_info_glyphs_differ() {
        assert_ne!(glyph_for(Severity::Success), glyph_for(Severity::Info));
    }

    #[test]
    fn overlay_renders_empty_and_stacked() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        let _empty = Toast::view_overlay(&manager, &i18n);
        drop(_empty);

        manager.push(Notification::success("notification-publish-success"));
        manager.push(
            Notification::error("notification-upload-error").with_arg("reason", "disk full"),
        );
        let _stacked = Toast::view_overlay(&manager, &i18n);
    }
}
