// SPDX-License-Identifier: MPL-2.0
//! Variant-driven button.
//!
//! # Usage
//!
//! ```ignore
//! use iced_kit::ui::components::button::Button;
//! use iced_kit::ui::variant::{Intent, Variant, Size};
//!
//! Button::new("Delete")
//!     .intent(Intent::Danger)
//!     .variant(Variant::Outline)
//!     .size(Size::Sm)
//!     .on_press(Message::Delete)
//!     .view()
//! ```

use crate::ui::design_tokens::spacing;
use crate::ui::icons;
use crate::ui::styles::button as button_styles;
use crate::ui::variant::{resolve, Emphasis, Intent, Size, Variant, VariantSpec};
use iced::widget::svg::Svg;
use iced::widget::text::Span;
use iced::widget::{button, rich_text, span, text, Row};
use iced::{alignment, Element, Font, Length, Padding};

/// Configuration for the Button component.
#[derive(Debug, Clone)]
pub struct Button<Message> {
    label: String,
    spec: VariantSpec,
    icon: Option<fn() -> Svg<'static>>,
    on_press: Option<Message>,
    width: Length,
}

impl<Message: Clone + 'static> Button<Message> {
    /// Creates a primary, solid, medium button.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            spec: VariantSpec::default(),
            icon: None,
            on_press: None,
            width: Length::Shrink,
        }
    }

    pub fn intent(mut self, intent: Intent) -> Self {
        self.spec.intent = intent;
        self
    }

    /// Sets the variant, resetting emphasis to that variant's default.
    pub fn variant(mut self, variant: Variant) -> Self {
        self.spec = VariantSpec::new(self.spec.intent, variant).with_size(self.spec.size);
        self
    }

    pub fn emphasis(mut self, emphasis: Emphasis) -> Self {
        self.spec = self.spec.with_emphasis(emphasis);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.spec.size = size;
        self
    }

    /// Leading icon drawn in the label color.
    pub fn icon(mut self, icon: fn() -> Svg<'static>) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets the message emitted on press. Without one the button is disabled.
    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    pub fn on_press_maybe(mut self, message: Option<Message>) -> Self {
        self.on_press = message;
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Returns the resolved variant combination.
    pub fn spec(&self) -> VariantSpec {
        self.spec
    }

    /// Renders the button.
    pub fn view(self) -> Element<'static, Message> {
        let appearance = resolve(self.spec);
        let metrics = appearance.metrics;

        let label: Element<'static, Message> = if appearance.underline {
            let spans: Vec<Span<'static, (), Font>> = vec![span(self.label)
                .underline(true)
                .color(appearance.resting.text)];
            rich_text(spans).size(metrics.font_size).into()
        } else {
            text(self.label).size(metrics.font_size).into()
        };

        let mut content = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center);
        if let Some(icon) = self.icon {
            content = content.push(icons::tinted(
                icon(),
                metrics.icon_size,
                appearance.resting.text,
            ));
        }
        content = content.push(label);

        let padding = match self.spec.variant {
            Variant::Link => Padding::ZERO,
            _ => Padding::from([metrics.padding_y, metrics.padding_x]),
        };
        let height = match self.spec.variant {
            Variant::Link => Length::Shrink,
            _ => Length::Fixed(metrics.height),
        };

        button(content)
            .padding(padding)
            .width(self.width)
            .height(height)
            .on_press_maybe(self.on_press)
            .style(button_styles::variant(appearance))
            .into()
    }
}
