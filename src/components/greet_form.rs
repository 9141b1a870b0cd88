//! Greet Form Component
//!
//! Name input that asks the host for a greeting.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{Command, TauriInvoker};
use crate::components::ResultLine;
use crate::remote;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn GreetForm() -> impl IntoView {
    let store = use_app_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Any text is accepted, including empty
        let name = store.name().get_untracked();
        let ticket = store.greeting().write().begin();
        web_sys::console::log_1(&format!("[GREET] Request {:?} for {:?}", ticket, name).into());

        spawn_local(async move {
            let outcome = remote::dispatch(&TauriInvoker, &Command::greet(name)).await;
            if let Err(e) = &outcome {
                web_sys::console::error_1(&format!("[GREET] Failed: {}", e).into());
            }
            if !store.greeting().write().settle(ticket, outcome) {
                web_sys::console::log_1(&format!("[GREET] Dropped superseded response {:?}", ticket).into());
            }
        });
    };

    view! {
        <form class="row" on:submit=on_submit>
            <input
                id="greet-input"
                placeholder="Enter a name..."
                prop:value=move || store.name().get()
                on:input=move |ev| {
                    *store.name().write() = event_target_value(&ev);
                }
            />
            <button type="submit">"Greet"</button>
        </form>

        <ResultLine slot=Signal::derive(move || store.greeting().get()) />
    }
}
