// SPDX-License-Identifier: MPL-2.0
//! Radio group: a vertical list of mutually exclusive options.

use super::checkbox::label_block;
use crate::ui::design_tokens::spacing;
use crate::ui::icons;
use crate::ui::styles::{button as button_styles, toggle};
use crate::ui::variant::{Intent, Size};
use iced::widget::{button, container, Column, Row, Space};
use iced::{alignment, Element, Length};

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioItem {
    pub value: String,
    pub label: Option<String>,
    pub description: Option<String>,
    pub disabled: bool,
}

impl RadioItem {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
            description: None,
            disabled: false,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Configuration for the RadioGroup component.
pub struct RadioGroup<'a, Message> {
    items: Vec<RadioItem>,
    selected: Option<String>,
    intent: Intent,
    size: Size,
    on_select: Option<Box<dyn Fn(String) -> Message + 'a>>,
}

impl<'a, Message: Clone + 'a> RadioGroup<'a, Message> {
    pub fn new(items: Vec<RadioItem>, selected: Option<&str>) -> Self {
        Self {
            items,
            selected: selected.map(str::to_owned),
            intent: Intent::default(),
            size: Size::default(),
            on_select: None,
        }
    }

    pub fn intent(mut self, intent: Intent) -> Self {
        self.intent = intent;
        self
    }

    /// Radios come in Sm, Md and Lg; Xl renders as Lg.
    pub fn size(mut self, size: Size) -> Self {
        self.size = match size {
            Size::Xl => Size::Lg,
            other => other,
        };
        self
    }

    pub fn on_select(mut self, f: impl Fn(String) -> Message + 'a) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    /// Message emitted when `value` is clicked, or `None` if the item is
    /// disabled, unknown or the group has no handler.
    pub fn message_for(&self, value: &str) -> Option<Message> {
        let item = self.items.iter().find(|item| item.value == value)?;
        if item.disabled {
            return None;
        }
        self.on_select
            .as_ref()
            .map(|on_select| on_select(item.value.clone()))
    }

    pub fn view(self) -> Element<'a, Message> {
        let metrics = self.size.metrics();
        let ring_size = metrics.toggle_size;
        let dot_size = (ring_size * 0.6).round();

        let mut column = Column::new().spacing(spacing::XS);
        for item in &self.items {
            let message = self.message_for(&item.value);
            let disabled = message.is_none();
            let selected = self.selected.as_deref() == Some(item.value.as_str());

            let dot: Element<'a, Message> = if selected {
                icons::tinted(icons::circle(), dot_size, self.intent.color()).into()
            } else {
                Space::new().width(dot_size).height(dot_size).into()
            };

            let ring = container(dot)
                .center_x(Length::Fixed(ring_size))
                .center_y(Length::Fixed(ring_size))
                .style(toggle::radio_ring(self.intent, disabled));

            let mut row = Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Top)
                .push(ring);
            if let Some(label) = item.label.clone() {
                row = row.push(label_block(label, item.description.clone(), disabled));
            }

            column = column.push(
                button(row)
                    .padding(0)
                    .on_press_maybe(message)
                    .style(button_styles::bare),
            );
        }

        column.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Selected(String),
    }

    fn plans() -> Vec<RadioItem> {
        vec![
            RadioItem::new("free").label("Free"),
            RadioItem::new("pro").label("Pro").description("Billed monthly"),
            RadioItem::new("team").label("Team").disabled(true),
        ]
    }

    #[test]
    fn selecting_an_item_emits_its_value() {
        let group = RadioGroup::new(plans(), Some("free")).on_select(TestMessage::Selected);
        assert_eq!(
            group.message_for("pro"),
            Some(TestMessage::Selected("pro".to_string()))
        );
    }

    #[test]
    fn disabled_and_unknown_items_emit_nothing() {
        let group = RadioGroup::new(plans(), None).on_select(TestMessage::Selected);
        assert!(group.message_for("team").is_none());
        assert!(group.message_for("enterprise").is_none());
    }

    #[test]
    fn view_builds_for_all_sizes() {
        for size in Size::ALL {
            let _ = RadioGroup::new(plans(), Some("pro"))
                .size(size)
                .intent(Intent::Secondary)
                .on_select(TestMessage::Selected)
                .view();
        }
    }
}
