//! Topping Checkbox Component
//!
//! One checkbox + label row.

use leptos::prelude::*;

/// A single toggle row
#[component]
pub fn ToppingCheckbox(
    index: usize,
    label: String,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: impl Fn(usize) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="topping-row">
            <label>
                <input
                    type="checkbox"
                    id=format!("checkbox-{}", index)
                    prop:checked=checked
                    on:change=move |_| on_toggle(index)
                />
                {label}
            </label>
        </div>
    }
}
