// SPDX-License-Identifier: MPL-2.0
//! Tooltips for icon-only adornments (close, clear, reveal).

use crate::ui::design_tokens::{border, palette, radius, shadow, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{container, text, tooltip, Container};
use iced::{Background, Border, Element, Theme};

pub use iced::widget::tooltip::Position;

/// Inverted surface: dark tip on a light theme and the reverse.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    let (background, text_color) = if theme.extended_palette().is_dark {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_900, palette::GRAY_100)
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: scheme.border,
        },
        shadow: shadow::SM,
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps `content` in a styled tooltip.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(text(tip.into()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XXS)
}
