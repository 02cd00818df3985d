// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the upload form and the login screen.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Card surface for feed entries: weak background, rounded, soft shadow.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Top navigation bar surface.
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Dark stage behind the player widget (posters, placeholder surface).
pub fn player_stage(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::player_surface_color())),
        text_color: Some(theme::player_chrome_color()),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pill-shaped scrim behind the play affordance and the control strip.
pub fn play_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::player_scrim_color())),
        text_color: Some(theme::player_chrome_color()),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_badge_is_pill_shaped() {
        let style = play_badge(&Theme::Dark);
        assert!(style.background.is_some());
    }

    #[test]
    fn card_has_rounded_border() {
        let style = card(&Theme::Light);
        assert_eq!(style.border.width, border::WIDTH_SM);
    }
}
