//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::remote::RemoteSlot;
use crate::toppings::ToggleList;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Toppings and their checked flags
    pub toppings: ToggleList,
    /// Current contents of the name input
    pub name: String,
    /// Latest `greet` result
    pub greeting: RemoteSlot,
    /// Latest `check` result
    pub status: RemoteSlot,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Flip one topping by position
pub fn store_toggle_topping(store: &AppStore, index: usize) {
    let field = store.toppings();
    let mut toppings = field.write();
    *toppings = toppings.toggle(index);
}

/// Check every topping
pub fn store_select_all(store: &AppStore) {
    let field = store.toppings();
    let mut toppings = field.write();
    *toppings = toppings.select_all();
}

/// Uncheck every topping
pub fn store_unselect_all(store: &AppStore) {
    let field = store.toppings();
    let mut toppings = field.write();
    *toppings = toppings.unselect_all();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(store: &AppStore) -> String {
        store.toppings().get_untracked().selected_labels()
    }

    #[test]
    fn test_toggle_helper_updates_store() {
        let store = Store::new(AppState::new());
        store_toggle_topping(&store, 1);
        store_toggle_topping(&store, 3);
        assert_eq!(selected(&store), "Paneer , Mushroom");

        store_toggle_topping(&store, 1);
        assert_eq!(selected(&store), "Mushroom");
    }

    #[test]
    fn test_select_and_unselect_helpers() {
        let store = Store::new(AppState::new());
        store_select_all(&store);
        assert_eq!(
            selected(&store),
            "Golden Corn , Paneer , Tomato , Mushroom , Onion , Black Olives"
        );

        store_toggle_topping(&store, 0);
        assert_eq!(
            selected(&store),
            "Paneer , Tomato , Mushroom , Onion , Black Olives"
        );

        store_unselect_all(&store);
        assert_eq!(selected(&store), "");
    }

    #[test]
    fn test_helpers_replace_list_value() {
        let store = Store::new(AppState::new());
        let before = store.toppings().get_untracked();
        store_unselect_all(&store);
        let after = store.toppings().get_untracked();
        assert_eq!(before, after);
        assert!(!before.same_value(&after));
    }
}
