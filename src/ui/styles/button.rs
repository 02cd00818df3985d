// SPDX-License-Identifier: MPL-2.0
//! Button styles shared across screens.

use crate::ui::design_tokens::{
    border,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Shared assembly for filled buttons: tinted surface, hairline border,
/// small radius.
fn filled(background: Color, text_color: Color, border_color: Color, elevation: Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: elevation,
        snap: true,
    }
}

/// Style du bouton primaire (action mise en avant).
///
/// Covers the disabled state explicitly: the upload form's submit button
/// spends most of its life disabled, so the grayed look matters.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(palette::PRIMARY_500, WHITE, palette::PRIMARY_600, shadow::SM)
        }
        button::Status::Hovered => {
            filled(palette::PRIMARY_400, WHITE, palette::PRIMARY_500, shadow::MD)
        }
        button::Status::Disabled => {
            let bg = if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            };
            filled(bg, palette::GRAY_400, palette::GRAY_400, shadow::NONE)
        }
    }
}

/// Style pour bouton secondaire (action neutre).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (resting_bg, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(resting_bg, text_color, palette::GRAY_400, shadow::NONE)
        }
        button::Status::Hovered => {
            let bg = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            filled(bg, text_color, palette::PRIMARY_500, shadow::SM)
        }
        button::Status::Disabled => {
            filled(resting_bg, palette::GRAY_400, palette::GRAY_400, shadow::NONE)
        }
    }
}

/// Style pour liens textuels (brand, titres de cartes, retour).
///
/// No surface at all; the text takes the brand color and brightens on hover,
/// which is as close to an underlined anchor as a button gets.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let base_color = if is_light {
        palette::PRIMARY_600
    } else {
        palette::PRIMARY_400
    };

    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        button::Status::Disabled => palette::GRAY_400,
        button::Status::Active => base_color,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_primary_button_is_brand_violet() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn disabled_primary_button_is_grayed_out() {
        let style = primary(&Theme::Dark, button::Status::Disabled);

        assert_eq!(style.text_color, palette::GRAY_400);
        assert_eq!(style.shadow.blur_radius, 0.0);
    }

    #[test]
    fn link_has_no_background() {
        let theme = Theme::Light;
        for status in [
            button::Status::Active,
            button::Status::Hovered,
            button::Status::Pressed,
            button::Status::Disabled,
        ] {
            assert!(link(&theme, status).background.is_none());
        }
    }
}
