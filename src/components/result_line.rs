//! Result Line Component
//!
//! Shows the latest text of a remote slot, plus the last error if any.

use leptos::prelude::*;

use crate::remote::RemoteSlot;

#[component]
pub fn ResultLine(#[prop(into)] slot: Signal<RemoteSlot>) -> impl IntoView {
    let class = move || {
        if slot.with(RemoteSlot::is_pending) { "result pending" } else { "result" }
    };

    view! {
        <p class=class>{move || slot.with(|s| s.text().to_string())}</p>
        {move || slot.with(|s| s.error().map(str::to_string)).map(|message| view! {
            <p class="result-error">{format!("Error: {}", message)}</p>
        })}
    }
}
