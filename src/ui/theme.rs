// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the feed, player, and form screens.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;

/// Error text (validation messages, failed rows).
pub fn error_text_color() -> Color {
    palette::ERROR_500
}

/// Success text.
pub fn success_text_color() -> Color {
    palette::SUCCESS_500
}

/// Muted secondary text (descriptions, hints).
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

// ============================================================================
// Player Chrome
// ============================================================================
// The player surface is always dark regardless of the app theme, like real
// video chrome: posters and placeholders sit on a near-black stage.

/// Background of the player stage (poster letterboxing, empty placeholder).
pub fn player_surface_color() -> Color {
    palette::GRAY_900
}

/// Text/glyph color on the player stage.
pub fn player_chrome_color() -> Color {
    palette::WHITE
}

/// Semi-transparent scrim behind the play affordance and control strip.
pub fn player_scrim_color() -> Color {
    Color {
        a: opacity::OVERLAY_HOVER,
        ..palette::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_stage_is_dark() {
        let surface = player_surface_color();
        assert!(surface.r < 0.2 && surface.g < 0.2 && surface.b < 0.2);
    }

    #[test]
    fn player_chrome_contrasts_with_stage() {
        let chrome = player_chrome_color();
        assert!(chrome.r > 0.9); // White text on a dark stage
    }

    #[test]
    fn scrim_is_translucent() {
        let scrim = player_scrim_color();
        assert!(scrim.a > 0.0 && scrim.a < 1.0);
    }
}
