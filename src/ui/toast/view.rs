// SPDX-License-Identifier: MPL-2.0
//! Toast widget.
//!
//! Renders one toast as a card with an intent icon, optional title and
//! description, and a dismiss button when a dismiss message is set.

use super::entry::{Toast, ToastVariant};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles::{button as button_styles, container as container_styles, tooltip};
use crate::ui::variant::{with_alpha, Intent, Size};
use iced::widget::svg::Svg;
use iced::widget::{button, text, Column, Container, Row, Space};
use iced::{alignment, font, Color, Element, Font, Length};

/// Standalone toast card.
#[derive(Debug, Clone)]
pub struct ToastView<Message> {
    title: Option<String>,
    description: Option<String>,
    intent: Intent,
    variant: ToastVariant,
    size: Size,
    on_dismiss: Option<Message>,
}

impl<Message> Default for ToastView<Message> {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            intent: Intent::default(),
            variant: ToastVariant::default(),
            size: Size::default(),
            on_dismiss: None,
        }
    }
}

impl<Message: Clone + 'static> ToastView<Message> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the display fields of a provider entry.
    pub fn from_toast<M>(toast: &Toast<M>) -> Self {
        Self {
            title: toast.title().map(str::to_owned),
            description: toast.description().map(str::to_owned),
            intent: toast.intent(),
            variant: toast.variant(),
            size: toast.size(),
            on_dismiss: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn intent(mut self, intent: Intent) -> Self {
        self.intent = intent;
        self
    }

    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Shows a close button emitting `message`.
    pub fn on_dismiss(mut self, message: Message) -> Self {
        self.on_dismiss = Some(message);
        self
    }

    /// Whether a close button will be drawn.
    pub fn is_dismissable(&self) -> bool {
        self.on_dismiss.is_some()
    }

    pub fn view<'a>(self, i18n: &I18n) -> Element<'a, Message> {
        let solid = self.variant == ToastVariant::Solid;
        let foreground = if solid {
            self.intent.foreground()
        } else {
            self.intent.color()
        };
        let (padding, title_size, description_size) = match self.size {
            Size::Sm => (spacing::SM, typography::BODY, typography::CAPTION),
            Size::Md => (spacing::MD, typography::BODY, typography::BODY),
            Size::Lg | Size::Xl => (
                spacing::MD + spacing::XXS,
                typography::BODY_LG,
                typography::BODY,
            ),
        };

        let icon = icons::tinted(intent_icon(self.intent), sizing::ICON_SM, foreground);

        let mut body = Column::new().spacing(spacing::XXS).width(Length::Fill);
        if let Some(title) = self.title {
            body = body.push(text(title).size(title_size).font(Font {
                weight: font::Weight::Bold,
                ..Font::DEFAULT
            }));
        }
        if let Some(description) = self.description {
            body = body.push(
                text(description)
                    .size(description_size)
                    .color(with_alpha(foreground, opacity::HOVER)),
            );
        }

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            // Keeps short toasts at the minimum card height.
            .push(
                Space::new()
                    .width(Length::Fixed(0.0))
                    .height(sizing::TOAST_MIN_HEIGHT - 2.0 * padding),
            )
            .push(icon)
            .push(body);

        if let Some(message) = self.on_dismiss {
            content = content.push(dismiss_button(foreground, message, i18n));
        }

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(padding)
            .style(container_styles::toast(self.intent, solid))
            .into()
    }
}

fn dismiss_button<'a, Message: Clone + 'static>(
    color: Color,
    message: Message,
    i18n: &I18n,
) -> Element<'a, Message> {
    let control = button(icons::sized(icons::x(), sizing::ICON_SM))
        .on_press(message)
        .padding(spacing::XXS)
        .style(button_styles::adornment(color));
    tooltip::styled(control, i18n.tr("toast-dismiss"), tooltip::Position::Left).into()
}

/// Glyph shown at the start of a toast.
pub fn intent_icon(intent: Intent) -> Svg<'static> {
    match intent {
        Intent::Primary | Intent::Success => icons::circle_check(),
        Intent::Secondary => icons::info(),
        Intent::Danger => icons::circle_alert(),
        Intent::Warning => icons::triangle_alert(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::toast::ToastRequest;
    use std::time::{Duration, Instant};

    #[derive(Debug, Clone)]
    enum TestMessage {
        Dismiss,
    }

    #[test]
    fn standalone_toast_has_no_close_button_by_default() {
        let view: ToastView<TestMessage> = ToastView::new().title("Saved");
        assert!(!view.is_dismissable());
        assert!(view.on_dismiss(TestMessage::Dismiss).is_dismissable());
    }

    #[test]
    fn from_toast_copies_display_fields() {
        let toast = Toast::from_request(
            ToastRequest::<()>::new()
                .title("Saved")
                .description("Done")
                .intent(Intent::Success)
                .variant(ToastVariant::Outline),
            Duration::from_secs(5),
            Instant::now(),
        );
        let view: ToastView<TestMessage> = ToastView::from_toast(&toast);
        assert_eq!(view.title.as_deref(), Some("Saved"));
        assert_eq!(view.description.as_deref(), Some("Done"));
        assert_eq!(view.intent, Intent::Success);
        assert_eq!(view.variant, ToastVariant::Outline);
        assert!(!view.is_dismissable());
    }

    #[test]
    fn view_builds_for_every_intent_and_size() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        for intent in Intent::ALL {
            for size in Size::ALL {
                let _ = ToastView::new()
                    .intent(intent)
                    .size(size)
                    .title("Title")
                    .on_dismiss(TestMessage::Dismiss)
                    .view(&i18n);
            }
        }
        // No title or description still renders.
        let _ = ToastView::<TestMessage>::new().view(&i18n);
    }
}
