//! Toggle List
//!
//! Fixed list of labeled flags. Every transition returns a new list value so
//! that consumers can detect changes by comparing against the previous one.

use std::sync::Arc;

use crate::models::ToggleItem;

/// Labels shown on startup, in display order
pub const DEFAULT_TOPPINGS: &[&str] = &[
    "Golden Corn",
    "Paneer",
    "Tomato",
    "Mushroom",
    "Onion",
    "Black Olives",
];

/// Separator used by [`ToggleList::selected_labels`]
pub const LABEL_SEPARATOR: &str = " , ";

/// Ordered, fixed-length list of toggle items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleList {
    items: Arc<[ToggleItem]>,
}

impl ToggleList {
    /// Build an all-unchecked list from labels
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: labels.into_iter().map(ToggleItem::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ToggleItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToggleItem> {
        self.items.iter()
    }

    /// Whether `other` is the very same list value (no transition in between)
    pub fn same_value(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    /// Flip the item at `index`. Panics if `index` is out of range.
    pub fn toggle(&self, index: usize) -> Self {
        let flipped = !self.items[index].checked;
        Self {
            items: self
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    if i == index {
                        item.with_checked(flipped)
                    } else {
                        item.clone()
                    }
                })
                .collect(),
        }
    }

    pub fn select_all(&self) -> Self {
        self.set_all(true)
    }

    pub fn unselect_all(&self) -> Self {
        self.set_all(false)
    }

    fn set_all(&self, checked: bool) -> Self {
        Self {
            items: self.items.iter().map(|item| item.with_checked(checked)).collect(),
        }
    }

    /// Labels of checked items in list order, joined by `" , "`
    pub fn selected_labels(&self) -> String {
        self.items
            .iter()
            .filter(|item| item.checked)
            .map(|item| item.label.as_str())
            .collect::<Vec<_>>()
            .join(LABEL_SEPARATOR)
    }
}

impl Default for ToggleList {
    fn default() -> Self {
        Self::from_labels(DEFAULT_TOPPINGS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_flags(list: &ToggleList) -> Vec<bool> {
        list.iter().map(|item| item.checked).collect()
    }

    #[test]
    fn test_default_list_is_unchecked() {
        let list = ToggleList::default();
        assert_eq!(list.len(), 6);
        assert!(list.iter().all(|item| !item.checked));
        assert_eq!(list.selected_labels(), "");
    }

    #[test]
    fn test_toggle_twice_restores_every_position() {
        let start = ToggleList::default().toggle(2).toggle(5);
        for i in 0..start.len() {
            let back = start.toggle(i).toggle(i);
            assert_eq!(back, start, "double toggle at {}", i);
        }
    }

    #[test]
    fn test_toggle_touches_only_its_position() {
        let start = ToggleList::default().toggle(4);
        let before = checked_flags(&start);
        for i in 0..start.len() {
            let after = checked_flags(&start.toggle(i));
            for (j, (b, a)) in before.iter().zip(after.iter()).enumerate() {
                if i == j {
                    assert_ne!(b, a, "position {} should flip", j);
                } else {
                    assert_eq!(b, a, "position {} changed by toggle({})", j, i);
                }
            }
        }
    }

    #[test]
    fn test_select_all_reports_every_label_in_order() {
        let list = ToggleList::default().toggle(3).select_all();
        assert_eq!(
            list.selected_labels(),
            "Golden Corn , Paneer , Tomato , Mushroom , Onion , Black Olives"
        );
        assert_eq!(list.select_all(), list);
    }

    #[test]
    fn test_unselect_all_clears_selection() {
        let list = ToggleList::default().select_all().unselect_all();
        assert_eq!(list.selected_labels(), "");
        assert_eq!(list.unselect_all(), list);
    }

    #[test]
    fn test_toggle_scenario() {
        let list = ToggleList::default().toggle(1).toggle(3);
        assert_eq!(list.selected_labels(), "Paneer , Mushroom");
    }

    #[test]
    fn test_select_all_then_deselect_first() {
        let list = ToggleList::default().select_all().toggle(0);
        assert_eq!(
            list.selected_labels(),
            "Paneer , Tomato , Mushroom , Onion , Black Olives"
        );
    }

    #[test]
    fn test_every_transition_yields_new_value() {
        let list = ToggleList::default();
        assert!(list.same_value(&list.clone()));
        assert!(!list.same_value(&list.toggle(0)));
        assert!(!list.same_value(&list.select_all()));
        // Equal content, still a fresh value
        let cleared = list.unselect_all();
        assert_eq!(cleared, list);
        assert!(!list.same_value(&cleared));
    }

    #[test]
    fn test_labels_are_preserved() {
        let list = ToggleList::from_labels(["a", "b"]).select_all().toggle(1);
        assert_eq!(list.get(0).map(|i| i.label.as_str()), Some("a"));
        assert_eq!(list.get(1).map(|i| i.label.as_str()), Some("b"));
        assert_eq!(list.selected_labels(), "a");
    }

    #[test]
    fn test_empty_list_selects_nothing() {
        let list = ToggleList::from_labels(Vec::<String>::new());
        assert!(list.is_empty());
        assert_eq!(list.select_all().selected_labels(), "");
    }

    #[test]
    #[should_panic]
    fn test_toggle_out_of_range_panics() {
        ToggleList::default().toggle(6);
    }
}
