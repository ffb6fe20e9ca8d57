// SPDX-License-Identifier: MPL-2.0
//! Checkbox and radio indicator styles.

use crate::ui::design_tokens::{border, opacity, radius};
use crate::ui::variant::{with_alpha, Intent};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Square checkbox indicator. Filled with the intent color when `filled`
/// (checked or indeterminate).
pub fn checkbox_box(
    intent: Intent,
    filled: bool,
    disabled: bool,
) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let color = fade(intent.color(), disabled);
        container::Style {
            background: filled.then_some(Background::Color(color)),
            border: Border {
                color,
                width: border::WIDTH_SM,
                radius: radius::XS.into(),
            },
            ..Default::default()
        }
    }
}

/// Round radio indicator; the dot is drawn by the component.
pub fn radio_ring(intent: Intent, disabled: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: None,
        border: Border {
            color: fade(intent.color(), disabled),
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

fn fade(color: Color, disabled: bool) -> Color {
    if disabled {
        with_alpha(color, opacity::OVERLAY_MEDIUM)
    } else {
        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn unchecked_box_has_border_only() {
        let style = checkbox_box(Intent::Primary, false, false)(&Theme::Light);
        assert!(style.background.is_none());
        assert_eq!(style.border.color, palette::PRIMARY_500);
    }

    #[test]
    fn checked_box_fills_with_intent() {
        let style = checkbox_box(Intent::Danger, true, false)(&Theme::Light);
        assert_eq!(style.background, Some(Background::Color(palette::DANGER_500)));
    }

    #[test]
    fn disabled_ring_is_faded() {
        let style = radio_ring(Intent::Success, true)(&Theme::Light);
        assert_eq!(style.border.color.a, opacity::OVERLAY_MEDIUM);
    }
}
