//! Kinetic Frontend App
//!
//! Toppings list on top, greeting and check forms below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CheckForm, GreetForm, ToppingList};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // State lives for the whole session; nothing is persisted
    provide_context(Store::new(AppState::new()));

    view! {
        <div class="app">
            <ToppingList />
            <GreetForm />
            <CheckForm />
        </div>
    }
}
