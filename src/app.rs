//! Seat Console App
//!
//! Venue list with the seat map modal on top and the toast stack.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{SeatMapView, ToastHost, VenueList};
use crate::config::ConsoleConfig;
use crate::context::AppContext;
use crate::store::{store_close_venue, AppState, AppStateStoreFields};

#[component]
pub fn App(config: ConsoleConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);
    provide_context(AppContext::new(&config, store));

    log::info!("[APP] Using backend at {}", config.api_base_url);

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Seat Console"</h1>
            </header>

            <main class="main-content">
                <VenueList />
            </main>

            // Seat map modal, rebuilt (and refetched) each time a venue is opened
            {move || store.open_venue().get().map(|venue| view! {
                <SeatMapView venue=venue on_close=move |_| store_close_venue(&store) />
            })}

            <ToastHost />
        </div>
    }
}
