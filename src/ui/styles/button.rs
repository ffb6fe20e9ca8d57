// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use crate::ui::variant::{with_alpha, Appearance, StateStyle};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style derived from a resolved variant.
pub fn variant(appearance: Appearance) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let state = match status {
            button::Status::Active => appearance.resting,
            button::Status::Hovered => appearance.hovered,
            button::Status::Pressed => appearance.pressed,
            button::Status::Disabled => dimmed(appearance.resting),
        };

        button::Style {
            background: state.background.map(Background::Color),
            text_color: state.text,
            border: Border {
                color: state.border.unwrap_or(Color::TRANSPARENT),
                width: appearance.border_width,
                radius: appearance.metrics.radius.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

fn dimmed(state: StateStyle) -> StateStyle {
    let fade = |color: Color| with_alpha(color, color.a * opacity::OVERLAY_MEDIUM);
    StateStyle {
        background: state.background.map(fade),
        text: fade(state.text),
        border: state.border.map(fade),
    }
}

/// Borderless icon button used for close, clear and reveal adornments.
///
/// `color` is the glyph color at rest; hover raises it to full opacity over
/// a subtle gray wash.
pub fn adornment(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let scheme = ColorScheme::for_theme(theme);
        let background = match status {
            button::Status::Hovered => Some(with_alpha(palette::GRAY_400, opacity::OVERLAY_SUBTLE)),
            button::Status::Pressed => Some(with_alpha(palette::GRAY_400, opacity::OVERLAY_MEDIUM)),
            button::Status::Active | button::Status::Disabled => None,
        };
        let text_color = match status {
            button::Status::Active => with_alpha(color, opacity::MUTED),
            button::Status::Hovered | button::Status::Pressed => color,
            button::Status::Disabled => scheme.text_muted,
        };

        button::Style {
            background: background.map(Background::Color),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Invisible button wrapping a whole row (checkbox labels, file picker field).
pub fn bare(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: Color::TRANSPARENT,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
