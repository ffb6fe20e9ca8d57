// SPDX-License-Identifier: MPL-2.0
//! Checkbox tree and selection propagation.
//!
//! A branch is checked when every value beneath it is selected and
//! indeterminate when only some are. Nothing is stored per node: the state
//! is always derived from the caller's flat selection set.

use crate::ui::components::checkbox::CheckState;
use std::collections::{BTreeSet, HashMap};

/// Set of selected item values, owned by the caller.
pub type Selection = BTreeSet<String>;

/// One node of a checkbox tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxItem {
    pub value: String,
    pub label: String,
    pub description: Option<String>,
    pub children: Vec<CheckboxItem>,
}

impl CheckboxItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn child(mut self, child: CheckboxItem) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = CheckboxItem>) -> Self {
        self.children.extend(children);
        self
    }

    #[must_use]
    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Descendant values of every branch, computed once per tree.
///
/// Leaves are absent from the map. Values are listed in pre-order. When a
/// value occurs more than once, the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescendantIndex {
    descendants: HashMap<String, Vec<String>>,
}

impl DescendantIndex {
    pub fn build(items: &[CheckboxItem]) -> Self {
        let mut index = Self::default();
        for item in items {
            index.collect(item);
        }
        index
    }

    /// Indexes `item` and returns all values in its subtree, itself included.
    fn collect(&mut self, item: &CheckboxItem) -> Vec<String> {
        let mut below = Vec::new();
        for child in &item.children {
            below.extend(self.collect(child));
        }
        if item.is_branch() {
            self.descendants
                .entry(item.value.clone())
                .or_insert_with(|| below.clone());
        }
        let mut subtree = Vec::with_capacity(below.len() + 1);
        subtree.push(item.value.clone());
        subtree.extend(below);
        subtree
    }

    /// Values beneath `value`. Empty for leaves and unknown values.
    pub fn descendants(&self, value: &str) -> &[String] {
        self.descendants.get(value).map_or(&[], Vec::as_slice)
    }

    /// Number of branches indexed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descendants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descendants.is_empty()
    }
}

/// Whether `value` shows as checked.
///
/// A branch is checked when all its descendants are selected; a leaf when
/// it is selected itself.
pub fn is_checked(index: &DescendantIndex, value: &str, selection: &Selection) -> bool {
    let descendants = index.descendants(value);
    if descendants.is_empty() {
        selection.contains(value)
    } else {
        descendants.iter().all(|v| selection.contains(v))
    }
}

/// Whether `value` is a branch with some but not all descendants selected.
pub fn is_indeterminate(index: &DescendantIndex, value: &str, selection: &Selection) -> bool {
    let descendants = index.descendants(value);
    if descendants.is_empty() {
        return false;
    }
    let selected = descendants.iter().filter(|v| selection.contains(*v)).count();
    selected > 0 && selected < descendants.len()
}

/// Display state of `value`.
pub fn state(index: &DescendantIndex, value: &str, selection: &Selection) -> CheckState {
    if is_indeterminate(index, value, selection) {
        CheckState::Indeterminate
    } else {
        CheckState::from_bool(is_checked(index, value, selection))
    }
}

/// Selection after setting `value` to `checked`.
///
/// A branch takes its whole subtree along; a leaf, childless branch or
/// unknown value changes only itself. `selection` is left untouched.
pub fn toggle(
    index: &DescendantIndex,
    value: &str,
    checked: bool,
    selection: &Selection,
) -> Selection {
    let mut next = selection.clone();
    let affected = std::iter::once(value)
        .chain(index.descendants(value).iter().map(String::as_str));
    if checked {
        next.extend(affected.map(str::to_owned));
    } else {
        for v in affected {
            next.remove(v);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> Vec<CheckboxItem> {
        vec![CheckboxItem::new("fruits", "Fruits").children([
            CheckboxItem::new("apple", "Apple"),
            CheckboxItem::new("banana", "Banana"),
            CheckboxItem::new("citrus", "Citrus").children([
                CheckboxItem::new("orange", "Orange"),
                CheckboxItem::new("lemon", "Lemon"),
            ]),
        ])]
    }

    fn selection(values: &[&str]) -> Selection {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn descendants_are_pre_order() {
        let index = DescendantIndex::build(&fruits());
        assert_eq!(
            index.descendants("fruits"),
            ["apple", "banana", "citrus", "orange", "lemon"]
        );
        assert_eq!(index.descendants("citrus"), ["orange", "lemon"]);
        assert!(index.descendants("apple").is_empty());
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn checking_a_branch_selects_its_subtree() {
        let index = DescendantIndex::build(&fruits());
        let next = toggle(&index, "citrus", true, &Selection::new());
        assert_eq!(next, selection(&["citrus", "orange", "lemon"]));
        assert_eq!(state(&index, "citrus", &next), CheckState::Checked);
        assert_eq!(state(&index, "fruits", &next), CheckState::Indeterminate);
    }

    #[test]
    fn unchecking_a_branch_clears_its_subtree() {
        let index = DescendantIndex::build(&fruits());
        let all = toggle(&index, "fruits", true, &Selection::new());
        let next = toggle(&index, "citrus", false, &all);
        assert_eq!(next, selection(&["fruits", "apple", "banana"]));
        assert_eq!(state(&index, "fruits", &next), CheckState::Indeterminate);
    }

    #[test]
    fn leaf_toggle_changes_only_itself() {
        let index = DescendantIndex::build(&fruits());
        let next = toggle(&index, "apple", true, &selection(&["lemon"]));
        assert_eq!(next, selection(&["apple", "lemon"]));
    }

    #[test]
    fn selecting_every_child_checks_the_branch() {
        let index = DescendantIndex::build(&fruits());
        let sel = selection(&["orange", "lemon"]);
        assert!(is_checked(&index, "citrus", &sel));
        assert!(!is_indeterminate(&index, "citrus", &sel));
    }

    #[test]
    fn branch_without_selection_is_unchecked() {
        let index = DescendantIndex::build(&fruits());
        assert_eq!(
            state(&index, "fruits", &Selection::new()),
            CheckState::Unchecked
        );
    }

    #[test]
    fn unknown_value_behaves_as_leaf() {
        let index = DescendantIndex::build(&fruits());
        let next = toggle(&index, "mango", true, &Selection::new());
        assert_eq!(next, selection(&["mango"]));
        assert!(is_checked(&index, "mango", &next));
        assert!(!is_indeterminate(&index, "mango", &next));
    }

    #[test]
    fn childless_branch_is_a_leaf() {
        let items = vec![CheckboxItem::new("empty", "Empty")];
        let index = DescendantIndex::build(&items);
        assert!(index.is_empty());
        let next = toggle(&index, "empty", true, &Selection::new());
        assert_eq!(next, selection(&["empty"]));
    }

    #[test]
    fn toggle_does_not_mutate_input() {
        let index = DescendantIndex::build(&fruits());
        let before = selection(&["apple"]);
        let _ = toggle(&index, "fruits", true, &before);
        assert_eq!(before, selection(&["apple"]));
    }

    #[test]
    fn first_duplicate_wins_in_index() {
        let items = vec![
            CheckboxItem::new("dup", "First").child(CheckboxItem::new("a", "A")),
            CheckboxItem::new("dup", "Second").child(CheckboxItem::new("b", "B")),
        ];
        let index = DescendantIndex::build(&items);
        assert_eq!(index.descendants("dup"), ["a"]);
    }
}
