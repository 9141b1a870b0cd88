//! Frontend Models
//!
//! Data structures shared by the store, the components and the command layer.

use serde::{Deserialize, Serialize};

/// One selectable option in the toppings list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleItem {
    pub label: String,
    pub checked: bool,
}

impl ToggleItem {
    /// New unchecked item
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            checked: false,
        }
    }

    /// Copy of this item with `checked` replaced
    pub fn with_checked(&self, checked: bool) -> Self {
        Self {
            label: self.label.clone(),
            checked,
        }
    }
}

/// Payload of the `greet` command (matches backend argument name)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetArgs {
    pub name: String,
}
