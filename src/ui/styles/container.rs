// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use crate::ui::variant::Intent;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed layer behind an open alert.
pub fn backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ColorScheme::for_theme(theme).backdrop)),
        ..Default::default()
    }
}

/// Page background.
pub fn surface(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Alert dialog surface.
pub fn dialog(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface)),
        border: Border {
            color: scheme.border,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Toast card. `solid` fills with the intent color, otherwise the card keeps
/// the surface color with an intent border.
pub fn toast(intent: Intent, solid: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let scheme = ColorScheme::for_theme(theme);
        let (background, text, border_color) = if solid {
            (intent.color(), intent.foreground(), Color::TRANSPARENT)
        } else {
            (scheme.surface, intent.color(), intent.color())
        };

        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: shadow::LG,
            text_color: Some(text),
            ..Default::default()
        }
    }
}

/// One-pixel vertical guide drawn beside nested checkbox group items.
pub fn guide_line(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ColorScheme::for_theme(theme).border)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn solid_toast_fills_with_intent() {
        let style = toast(Intent::Success, true)(&Theme::Light);
        assert_eq!(style.background, Some(Background::Color(palette::SUCCESS_500)));
        assert_eq!(style.text_color, Some(palette::ON_INTENT));
    }

    #[test]
    fn outline_toast_keeps_surface() {
        let style = toast(Intent::Danger, false)(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(ColorScheme::light().surface))
        );
        assert_eq!(style.border.color, palette::DANGER_500);
    }

    #[test]
    fn dialog_matches_theme_surface() {
        let style = dialog(&Theme::Dark);
        assert_eq!(
            style.background,
            Some(Background::Color(ColorScheme::dark().surface))
        );
    }
}
