// SPDX-License-Identifier: MPL-2.0
//! Hierarchical checkbox group.
//!
//! The group owns an immutable item tree and its [`DescendantIndex`]; the
//! selection set stays with the caller. Toggling an item computes the next
//! selection and hands it to the caller's mapping, never mutating the set
//! it was given.
//!
//! # Usage
//!
//! ```ignore
//! let group = CheckboxGroup::new(items).label("Fruits");
//!
//! // view
//! group.view(&self.selection, Message::SelectionChanged)
//!
//! // update
//! Message::SelectionChanged(next) => self.selection = next,
//! ```

mod tree;

pub use tree::{
    is_checked, is_indeterminate, state, toggle, CheckboxItem, DescendantIndex, Selection,
};

use crate::ui::components::checkbox::{CheckState, Checkbox};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::container as container_styles;
use crate::ui::theming::ColorScheme;
use crate::ui::variant::{Intent, Size};
use iced::widget::{container, text, Column, Row, Space};
use iced::{Element, Length, Theme};

/// A labelled tree of checkboxes.
#[derive(Debug, Clone)]
pub struct CheckboxGroup {
    items: Vec<CheckboxItem>,
    index: DescendantIndex,
    label: Option<String>,
    description: Option<String>,
    intent: Intent,
    size: Size,
    disabled: bool,
}

impl CheckboxGroup {
    /// Builds the group and indexes its tree.
    pub fn new(items: Vec<CheckboxItem>) -> Self {
        let index = DescendantIndex::build(&items);
        Self {
            items,
            index,
            label: None,
            description: None,
            intent: Intent::default(),
            size: Size::default(),
            disabled: false,
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn intent(mut self, intent: Intent) -> Self {
        self.intent = intent;
        self
    }

    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn items(&self) -> &[CheckboxItem] {
        &self.items
    }

    pub fn index(&self) -> &DescendantIndex {
        &self.index
    }

    /// Values beneath `value`, in pre-order.
    pub fn descendant_values(&self, value: &str) -> &[String] {
        self.index.descendants(value)
    }

    #[must_use]
    pub fn is_checked(&self, value: &str, selection: &Selection) -> bool {
        tree::is_checked(&self.index, value, selection)
    }

    #[must_use]
    pub fn is_indeterminate(&self, value: &str, selection: &Selection) -> bool {
        tree::is_indeterminate(&self.index, value, selection)
    }

    #[must_use]
    pub fn state(&self, value: &str, selection: &Selection) -> CheckState {
        tree::state(&self.index, value, selection)
    }

    /// Selection after setting `value` to `checked`.
    #[must_use]
    pub fn toggle(&self, value: &str, checked: bool, selection: &Selection) -> Selection {
        tree::toggle(&self.index, value, checked, selection)
    }

    /// Renders the group. `on_change` receives the full next selection.
    pub fn view<'a, Message: Clone + 'a>(
        &'a self,
        selection: &'a Selection,
        on_change: impl Fn(Selection) -> Message + Clone + 'a,
    ) -> Element<'a, Message> {
        let mut column = Column::new().spacing(spacing::XS);

        if let Some(label) = &self.label {
            column = column.push(text(label.as_str()).size(typography::BODY_LG));
        }
        if let Some(description) = &self.description {
            column = column.push(text(description.as_str()).size(typography::CAPTION).style(
                |theme: &Theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).text_muted),
                },
            ));
        }

        for item in &self.items {
            column = column.push(self.view_item(item, selection, on_change.clone()));
        }

        column.into()
    }

    fn view_item<'a, Message: Clone + 'a>(
        &'a self,
        item: &'a CheckboxItem,
        selection: &'a Selection,
        on_change: impl Fn(Selection) -> Message + Clone + 'a,
    ) -> Element<'a, Message> {
        let mut checkbox = Checkbox::new(self.state(&item.value, selection))
            .intent(self.intent)
            .size(self.size)
            .label(item.label.as_str());
        if let Some(description) = &item.description {
            checkbox = checkbox.description(description.as_str());
        }
        if !self.disabled {
            let value = item.value.as_str();
            let emit = on_change.clone();
            checkbox = checkbox
                .on_toggle(move |checked| emit(self.toggle(value, checked, selection)));
        }

        if !item.is_branch() {
            return checkbox.view();
        }

        let mut children = Column::new().spacing(spacing::XS);
        for child in &item.children {
            children = children.push(self.view_item(child, selection, on_change.clone()));
        }

        let guide = container(Space::new())
            .width(Length::Fixed(1.0))
            .height(Length::Fill)
            .style(container_styles::guide_line);

        let nested = Row::new()
            .push(Space::new().width(Length::Fixed(sizing::GROUP_GUIDE_OFFSET)))
            .push(guide)
            .push(Space::new().width(Length::Fixed(
                sizing::GROUP_INDENT - sizing::GROUP_GUIDE_OFFSET - 1.0,
            )))
            .push(children)
            .height(Length::Shrink);

        Column::new()
            .spacing(spacing::XS)
            .push(checkbox.view())
            .push(nested)
            .into()
    }
}
