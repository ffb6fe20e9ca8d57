// SPDX-License-Identifier: MPL-2.0
//! Tri-state checkbox with optional label and description.
//!
//! The indicator is drawn from a bordered box and an SVG glyph so the
//! indeterminate state (a minus sign) looks the same as checked, only with a
//! different glyph.

use crate::ui::design_tokens::{opacity, spacing, typography};
use crate::ui::icons;
use crate::ui::styles::{button as button_styles, toggle};
use crate::ui::theming::ColorScheme;
use crate::ui::variant::{with_alpha, Intent, Size};
use iced::widget::{button, container, text, Column, Row, Space};
use iced::{alignment, Element, Length, Theme};

/// Display state of a checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckState {
    #[default]
    Unchecked,
    Checked,
    /// Some but not all descendants of a group branch are selected.
    Indeterminate,
}

impl CheckState {
    #[must_use]
    pub fn from_bool(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }

    #[must_use]
    pub fn is_checked(self) -> bool {
        self == CheckState::Checked
    }

    /// Value requested when the user toggles the box from this state.
    ///
    /// An indeterminate box resolves to checked.
    #[must_use]
    pub fn toggled(self) -> bool {
        !self.is_checked()
    }

    fn is_filled(self) -> bool {
        self != CheckState::Unchecked
    }
}

/// Configuration for the Checkbox component.
pub struct Checkbox<'a, Message> {
    state: CheckState,
    intent: Intent,
    size: Size,
    label: Option<String>,
    description: Option<String>,
    on_toggle: Option<Box<dyn Fn(bool) -> Message + 'a>>,
}

impl<'a, Message: Clone + 'a> Checkbox<'a, Message> {
    pub fn new(state: CheckState) -> Self {
        Self {
            state,
            intent: Intent::default(),
            size: Size::default(),
            label: None,
            description: None,
            on_toggle: None,
        }
    }

    pub fn intent(mut self, intent: Intent) -> Self {
        self.intent = intent;
        self
    }

    /// Checkboxes come in Sm, Md and Lg; Xl renders as Lg.
    pub fn size(mut self, size: Size) -> Self {
        self.size = match size {
            Size::Xl => Size::Lg,
            other => other,
        };
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the toggle handler. It receives the requested checked value.
    /// Without a handler the checkbox is disabled.
    pub fn on_toggle(mut self, f: impl Fn(bool) -> Message + 'a) -> Self {
        self.on_toggle = Some(Box::new(f));
        self
    }

    /// Message the checkbox would emit if clicked now.
    pub fn pending_message(&self) -> Option<Message> {
        self.on_toggle
            .as_ref()
            .map(|on_toggle| on_toggle(self.state.toggled()))
    }

    pub fn view(self) -> Element<'a, Message> {
        let message = self.pending_message();
        let disabled = message.is_none();
        let metrics = self.size.metrics();
        let box_size = metrics.toggle_size;
        let glyph_size = box_size - 4.0;

        let glyph: Element<'a, Message> = match self.state {
            CheckState::Checked => {
                icons::tinted(icons::check(), glyph_size, self.intent.foreground()).into()
            }
            CheckState::Indeterminate => {
                icons::tinted(icons::minus(), glyph_size, self.intent.foreground()).into()
            }
            CheckState::Unchecked => Space::new().width(glyph_size).height(glyph_size).into(),
        };

        let indicator = container(glyph)
            .center_x(Length::Fixed(box_size))
            .center_y(Length::Fixed(box_size))
            .style(toggle::checkbox_box(
                self.intent,
                self.state.is_filled(),
                disabled,
            ));

        let mut content = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Top)
            .push(indicator);

        if let Some(label) = self.label {
            content = content.push(label_block(label, self.description, disabled));
        }

        button(content)
            .padding(0)
            .on_press_maybe(message)
            .style(button_styles::bare)
            .into()
    }
}

/// Label and optional description stacked beside a toggle indicator.
/// Shared with the radio component.
pub(crate) fn label_block<'a, Message: 'a>(
    label: String,
    description: Option<String>,
    disabled: bool,
) -> Element<'a, Message> {
    let mut block = Column::new().spacing(2.0).push(
        text(label)
            .size(typography::BODY)
            .style(move |theme: &Theme| {
                let color = ColorScheme::for_theme(theme).text_primary;
                text::Style {
                    color: Some(if disabled {
                        with_alpha(color, opacity::MUTED)
                    } else {
                        color
                    }),
                }
            }),
    );

    if let Some(description) = description {
        block = block.push(
            text(description)
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).text_muted),
                }),
        );
    }

    block.into()
}
