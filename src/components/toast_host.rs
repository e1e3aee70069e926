//! Toast Host Component
//!
//! Stack of transient notifications; each dismisses itself or on click.

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_app_store, AppStateStoreFields};

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-host">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.level.class() on:click=move |_| store_dismiss_toast(&store, id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
