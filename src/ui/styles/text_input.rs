// SPDX-License-Identifier: MPL-2.0
//! Text field styles for the [`Input`](crate::ui::components::input::Input) component.

use crate::ui::components::input::{FieldState, InputVariant};
use crate::ui::design_tokens::{border, opacity, radius};
use crate::ui::theming::ColorScheme;
use crate::ui::variant::{with_alpha, Intent};
use iced::widget::{container, text_input};
use iced::{Background, Border, Color, Theme};

/// Accent color of a validation state, if any.
pub fn state_color(state: FieldState) -> Option<Color> {
    match state {
        FieldState::Default => None,
        FieldState::Error => Some(Intent::Danger.color()),
        FieldState::Success => Some(Intent::Primary.color()),
    }
}

/// Field style for a variant and validation state.
pub fn field(
    variant: InputVariant,
    state: FieldState,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme: &Theme, status: text_input::Status| {
        let scheme = ColorScheme::for_theme(theme);
        let focused = matches!(status, text_input::Status::Focused { .. });
        let hovered = matches!(
            status,
            text_input::Status::Hovered | text_input::Status::Focused { is_hovered: true }
        );
        let disabled = matches!(status, text_input::Status::Disabled);
        let accent = state_color(state);
        let ring = accent.unwrap_or(Intent::Primary.color());

        let (background, border_color, width, corner) = match variant {
            InputVariant::Outline => (
                scheme.surface,
                if focused { ring } else { accent.unwrap_or(scheme.border) },
                if focused { border::WIDTH_MD } else { border::WIDTH_SM },
                radius::MD,
            ),
            InputVariant::Solid => (
                if focused { scheme.surface } else { scheme.surface_muted },
                if focused { ring } else { accent.unwrap_or(Color::TRANSPARENT) },
                if focused { border::WIDTH_MD } else { border::WIDTH_SM },
                radius::MD,
            ),
            InputVariant::Ghost => (
                if focused || hovered {
                    scheme.surface_muted
                } else {
                    Color::TRANSPARENT
                },
                if focused { ring } else { accent.unwrap_or(Color::TRANSPARENT) },
                border::WIDTH_SM,
                radius::MD,
            ),
            // Drawn as a bottom rule by the component; the field itself stays bare.
            InputVariant::Underline => (
                Color::TRANSPARENT,
                Color::TRANSPARENT,
                0.0,
                radius::NONE,
            ),
        };

        let fade = |color: Color| {
            if disabled {
                with_alpha(color, color.a * opacity::OVERLAY_MEDIUM)
            } else {
                color
            }
        };

        text_input::Style {
            background: Background::Color(fade(background)),
            border: Border {
                color: fade(border_color),
                width,
                radius: corner.into(),
            },
            icon: scheme.text_muted,
            placeholder: scheme.text_muted,
            value: fade(scheme.text_primary),
            selection: with_alpha(ring, opacity::OVERLAY_SUBTLE),
        }
    }
}

/// Bottom rule of the underline variant.
pub fn underline(state: FieldState) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let color = state_color(state).unwrap_or(ColorScheme::for_theme(theme).border);
        container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        }
    }
}

/// Wrapper around the file picker field, which is a button rather than a
/// text input.
pub fn file_field(
    variant: InputVariant,
    state: FieldState,
    disabled: bool,
) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let status = if disabled {
            text_input::Status::Disabled
        } else {
            text_input::Status::Active
        };
        let style = field(variant, state)(theme, status);
        container::Style {
            background: Some(style.background),
            border: style.border,
            text_color: Some(style.value),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_state_colors_the_border() {
        let style = field(InputVariant::Outline, FieldState::Error)(
            &Theme::Light,
            text_input::Status::Active,
        );
        assert_eq!(style.border.color, Intent::Danger.color());
    }

    #[test]
    fn focus_thickens_outline() {
        let style = field(InputVariant::Outline, FieldState::Default)(
            &Theme::Light,
            text_input::Status::Focused { is_hovered: false },
        );
        assert_eq!(style.border.width, border::WIDTH_MD);
        assert_eq!(style.border.color, Intent::Primary.color());
    }

    #[test]
    fn underline_field_has_no_border() {
        let style = field(InputVariant::Underline, FieldState::Default)(
            &Theme::Dark,
            text_input::Status::Active,
        );
        assert_eq!(style.border.width, 0.0);
    }

    #[test]
    fn underline_rule_follows_state() {
        let style = underline(FieldState::Error)(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(Intent::Danger.color()))
        );
        let style = underline(FieldState::Default)(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(ColorScheme::light().border))
        );
    }

    #[test]
    fn default_state_has_no_accent() {
        assert!(state_color(FieldState::Default).is_none());
        assert!(state_color(FieldState::Success).is_some());
    }
}
