// SPDX-License-Identifier: MPL-2.0
//! Modal alert dialog widget.
//!
//! Draws a dimmed backdrop over the whole window with the dialog centered
//! on top. Both layers swallow mouse input so nothing underneath reacts
//! while the alert is open.

use super::request::AlertRequest;
use crate::i18n::fluent::I18n;
use crate::ui::components::button::Button;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles::{button as button_styles, container as container_styles, tooltip};
use crate::ui::theming::ColorScheme;
use crate::ui::variant::{Intent, Size, Variant};
use iced::widget::svg::Svg;
use iced::widget::{button, center, container, mouse_area, opaque, text, Column, Row, Space};
use iced::{alignment, font, Element, Font, Length, Theme};

/// Alert dialog configuration.
///
/// Buttons are drawn only for the callbacks that are set: a close cross for
/// `on_close`, and cancel/confirm buttons for `on_cancel`/`on_confirm`.
#[derive(Debug, Clone)]
pub struct AlertDialog<Message> {
    title: Option<String>,
    description: Option<String>,
    intent: Intent,
    size: Size,
    cancel_text: Option<String>,
    confirm_text: Option<String>,
    on_confirm: Option<Message>,
    on_cancel: Option<Message>,
    on_close: Option<Message>,
    on_backdrop: Option<Message>,
}

impl<Message> Default for AlertDialog<Message> {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            intent: Intent::default(),
            size: Size::default(),
            cancel_text: None,
            confirm_text: None,
            on_confirm: None,
            on_cancel: None,
            on_close: None,
            on_backdrop: None,
        }
    }
}

impl<Message: Clone + 'static> AlertDialog<Message> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Copies the display fields of a request; callbacks are left unset.
    pub fn from_request<M>(request: &AlertRequest<M>) -> Self {
        Self {
            title: request.title.clone(),
            description: request.description.clone(),
            intent: request.intent,
            size: request.size,
            cancel_text: request.cancel_text.clone(),
            confirm_text: request.confirm_text.clone(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn intent(mut self, intent: Intent) -> Self {
        self.intent = intent;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    pub fn on_confirm(mut self, message: Message) -> Self {
        self.on_confirm = Some(message);
        self
    }

    pub fn on_cancel(mut self, message: Message) -> Self {
        self.on_cancel = Some(message);
        self
    }

    pub fn on_close(mut self, message: Message) -> Self {
        self.on_close = Some(message);
        self
    }

    /// Message emitted by a click on the dimmed backdrop.
    pub fn on_backdrop(mut self, message: Message) -> Self {
        self.on_backdrop = Some(message);
        self
    }

    /// Whether the dialog shows a cancel or confirm button.
    pub fn has_actions(&self) -> bool {
        self.on_cancel.is_some() || self.on_confirm.is_some()
    }

    /// Renders the backdrop and dialog as one overlay layer.
    pub fn view<'a>(self, i18n: &I18n) -> Element<'a, Message> {
        let intent = self.intent;
        let mut header = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center);

        if let Some(title) = self.title {
            header = header
                .push(icons::tinted(
                    intent_icon(intent),
                    sizing::ICON_MD,
                    intent.color(),
                ))
                .push(
                    text(title)
                        .size(typography::TITLE)
                        .color(intent.color())
                        .font(Font {
                            weight: font::Weight::Semibold,
                            ..Font::DEFAULT
                        }),
                );
        }
        header = header.push(Space::new().width(Length::Fill));
        if let Some(message) = self.on_close {
            header = header.push(close_button(message, i18n));
        }

        let mut body = Column::new().spacing(spacing::XS).push(header);
        if let Some(description) = self.description {
            body = body.push(text(description).size(typography::BODY).style(
                |theme: &Theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).text_muted),
                },
            ));
        }

        if self.on_cancel.is_some() || self.on_confirm.is_some() {
            let mut actions = Row::new()
                .spacing(spacing::XS)
                .push(Space::new().width(Length::Fill));
            if let Some(message) = self.on_cancel {
                let label = self
                    .cancel_text
                    .unwrap_or_else(|| i18n.tr("alert-cancel"));
                actions = actions.push(
                    Button::new(label)
                        .intent(intent)
                        .variant(Variant::Outline)
                        .on_press(message)
                        .view(),
                );
            }
            if let Some(message) = self.on_confirm {
                let label = self
                    .confirm_text
                    .unwrap_or_else(|| i18n.tr("alert-confirm"));
                actions = actions.push(
                    Button::new(label)
                        .intent(intent)
                        .variant(Variant::Solid)
                        .on_press(message)
                        .view(),
                );
            }
            body = body.push(Space::new().height(spacing::MD)).push(actions);
        }

        let dialog = container(body)
            .padding(spacing::LG)
            .width(Length::Fill)
            .max_width(self.size.metrics().dialog_width)
            .style(container_styles::dialog);

        let backdrop = mouse_area(
            center(opaque(dialog))
                .padding(spacing::MD)
                .style(container_styles::backdrop),
        );
        let backdrop = match self.on_backdrop {
            Some(message) => backdrop.on_press(message),
            None => backdrop,
        };

        opaque(backdrop)
    }
}

fn close_button<'a, Message: Clone + 'static>(message: Message, i18n: &I18n) -> Element<'a, Message> {
    let control = button(icons::sized(icons::x(), sizing::ICON_SM))
        .on_press(message)
        .padding(spacing::XXS)
        .style(|theme: &Theme, status| {
            button_styles::adornment(ColorScheme::for_theme(theme).text_primary)(theme, status)
        });
    tooltip::styled(control, i18n.tr("alert-close"), tooltip::Position::Bottom).into()
}

/// Glyph shown next to an alert title.
pub fn intent_icon(intent: Intent) -> Svg<'static> {
    match intent {
        Intent::Primary | Intent::Secondary => icons::info(),
        Intent::Success => icons::circle_check(),
        Intent::Danger => icons::circle_alert(),
        Intent::Warning => icons::triangle_alert(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[derive(Debug, Clone)]
    enum TestMessage {
        Confirm,
        Cancel,
        Close,
    }

    #[test]
    fn standalone_dialog_has_no_actions_by_default() {
        let dialog: AlertDialog<TestMessage> = AlertDialog::new("Heads up");
        assert!(!dialog.has_actions());
        assert!(dialog.on_confirm(TestMessage::Confirm).has_actions());
    }

    #[test]
    fn from_request_copies_texts_not_callbacks() {
        let request = AlertRequest::new("Delete?")
            .description("Permanent")
            .intent(Intent::Danger)
            .confirm_text("Delete")
            .on_confirm(());
        let dialog: AlertDialog<TestMessage> = AlertDialog::from_request(&request);
        assert_eq!(dialog.title.as_deref(), Some("Delete?"));
        assert_eq!(dialog.confirm_text.as_deref(), Some("Delete"));
        assert_eq!(dialog.intent, Intent::Danger);
        assert!(!dialog.has_actions());
    }

    #[test]
    fn view_builds_with_all_callbacks() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        for intent in Intent::ALL {
            let _ = AlertDialog::new("Title")
                .description("Body")
                .intent(intent)
                .on_confirm(TestMessage::Confirm)
                .on_cancel(TestMessage::Cancel)
                .on_close(TestMessage::Close)
                .on_backdrop(TestMessage::Close)
                .view(&i18n);
        }
    }
}
