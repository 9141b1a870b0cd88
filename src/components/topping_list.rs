//! Topping List Component
//!
//! Select/unselect buttons, the checkbox rows and the selected labels line.

use leptos::prelude::*;

use crate::components::ToppingCheckbox;
use crate::store::{
    store_select_all, store_toggle_topping, store_unselect_all, use_app_store,
    AppStateStoreFields,
};

#[component]
pub fn ToppingList() -> impl IntoView {
    let store = use_app_store();

    // The label set never changes, so rows are built once
    let labels: Vec<String> = store
        .toppings()
        .read_untracked()
        .iter()
        .map(|item| item.label.clone())
        .collect();

    let rows = labels
        .into_iter()
        .enumerate()
        .map(|(index, label)| {
            let checked = Signal::derive(move || {
                store.toppings().read().get(index).is_some_and(|item| item.checked)
            });
            view! {
                <ToppingCheckbox
                    index=index
                    label=label
                    checked=checked
                    on_toggle=move |i: usize| store_toggle_topping(&store, i)
                />
            }
        })
        .collect_view();

    view! {
        <p class="bulk-actions">
            <button on:click=move |_| store_select_all(&store)>"Select All"</button>
            <button on:click=move |_| store_unselect_all(&store)>"Unselect All"</button>
        </p>

        <div class="card">{rows}</div>

        <div class="selected-labels">
            "The all checked values are "
            {move || store.toppings().read().selected_labels()}
        </div>
    }
}
