//! Check Form Component
//!
//! Single button that asks the host for its status.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{Command, TauriInvoker};
use crate::components::ResultLine;
use crate::remote;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CheckForm() -> impl IntoView {
    let store = use_app_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let ticket = store.status().write().begin();
        web_sys::console::log_1(&format!("[CHECK] Request {:?}", ticket).into());

        spawn_local(async move {
            let outcome = remote::dispatch(&TauriInvoker, &Command::Check).await;
            if let Err(e) = &outcome {
                web_sys::console::error_1(&format!("[CHECK] Failed: {}", e).into());
            }
            if !store.status().write().settle(ticket, outcome) {
                web_sys::console::log_1(&format!("[CHECK] Dropped superseded response {:?}", ticket).into());
            }
        });
    };

    view! {
        <form class="row" on:submit=on_submit>
            <button type="submit">"Check"</button>
        </form>

        <ResultLine slot=Signal::derive(move || store.status().get()) />
    }
}
