// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme handling.
//!
//! Intent colors are theme-independent (see [`variant`](super::variant));
//! only surfaces, borders and neutral text change between modes.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Neutral colors for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    /// Page and dialog background.
    pub surface: Color,
    /// Filled inputs, hovered ghost inputs.
    pub surface_muted: Color,
    /// Default control borders.
    pub border: Color,

    pub text_primary: Color,
    /// Descriptions, placeholders, helper messages.
    pub text_muted: Color,

    /// Dimmed layer drawn behind dialogs.
    pub backdrop: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::WHITE,
            surface_muted: palette::GRAY_100,
            border: palette::GRAY_200,
            text_primary: palette::GRAY_900,
            text_muted: palette::GRAY_500,
            backdrop: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::GRAY_900,
            surface_muted: Color::from_rgb(0.15, 0.15, 0.17),
            border: palette::GRAY_700,
            text_primary: palette::GRAY_100,
            text_muted: palette::GRAY_400,
            backdrop: Color {
                a: opacity::MUTED,
                ..palette::BLACK
            },
        }
    }

    /// Scheme matching an Iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to light on detection error
                matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
            }
        }
    }

    /// Iced theme for this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Parses a CLI/config value (`light`, `dark`, `system`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }
}
