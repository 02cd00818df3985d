// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection.
//!
//! The app renders with the stock Iced light and dark themes; this module
//! only decides which of the two applies. `System` asks the OS through
//! `dark-light` every time, so switching the desktop theme takes effect on
//! the next redraw without a restart.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Whether the effective theme is dark.
    ///
    /// For `System`, detection errors count as dark.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => match dark_light::detect() {
                Ok(dark_light::Mode::Light) => false,
                Ok(_) | Err(_) => true,
            },
        }
    }

    /// The Iced theme this mode resolves to right now.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}
