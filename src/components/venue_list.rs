//! Venue List Component
//!
//! Searchable, paged table of venues with an entry point to each seat map.

use leptos::prelude::*;

use crate::api;
use crate::context::use_app_context;
use crate::listing::{filter_venues, paginate};
use crate::scoped_task::TaskScope;
use crate::store::{store_open_venue, store_set_venues, use_app_store, AppStateStoreFields};

const VENUES_PER_PAGE: usize = 10;

#[component]
pub fn VenueList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Query sent to the server on submit; filter narrows the loaded list as you type
    let (search, set_search) = signal(String::new());
    let (filter, set_filter) = signal(String::new());
    let (page, set_page) = signal(0usize);
    let (loading, set_loading) = signal(false);

    // Only the latest request may write the list
    let fetches = TaskScope::bound_to_owner();

    // Load venues on mount, on search, and on reload
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let query = search.get();
        let api = ctx.api();
        set_loading.set(true);
        fetches.abort_all();
        fetches.spawn(async move {
            match api::list_venues(&api, &query).await {
                Ok(venues) => {
                    log::info!("[VENUES] Loaded {} venues", venues.len());
                    store_set_venues(&store, venues);
                }
                Err(e) => {
                    log::error!("[VENUES] Loading failed: {}", e);
                    ctx.error("Could not load venues");
                }
            }
            set_loading.set(false);
        });
    });

    let filtered = Memo::new(move |_| store.venues().with(|venues| filter_venues(venues, &filter.get())));
    let current_page = Memo::new(move |_| filtered.with(|venues| paginate(venues, page.get(), VENUES_PER_PAGE)));

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_page.set(0);
        set_search.set(filter.get_untracked().trim().to_string());
    };

    view! {
        <section class="venue-list">
            <form class="venue-search" on:submit=on_search>
                <input
                    type="text"
                    placeholder="Filter venues by name or campus..."
                    prop:value=move || filter.get()
                    on:input=move |ev| {
                        set_filter.set(event_target_value(&ev));
                        set_page.set(0);
                    }
                />
                <button type="submit">"Search"</button>
                <button type="button" on:click=move |_| ctx.reload()>"Refresh"</button>
            </form>

            <Show when=move || loading.get()>
                <div class="loading">"Loading venues…"</div>
            </Show>

            <table class="venue-table">
                <thead>
                    <tr>
                        <th>"Venue"</th>
                        <th>"Campus"</th>
                        <th>"Capacity"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || current_page.get().items
                        key=|venue| venue.id
                        children=move |venue| {
                            let has_seats = venue.has_seats;
                            let campus = venue.campus_name.clone().unwrap_or_else(|| "—".to_string());
                            let capacity = venue.capacity.map(|c| c.to_string()).unwrap_or_else(|| "—".to_string());
                            let name = venue.name.clone();
                            let title = if has_seats { "Open seat map" } else { "No seat map configured" };
                            view! {
                                <tr>
                                    <td>{name}</td>
                                    <td>{campus}</td>
                                    <td>{capacity}</td>
                                    <td>
                                        <button
                                            class="action-btn"
                                            disabled={!has_seats}
                                            title=title
                                            on:click=move |_| store_open_venue(&store, venue.clone())
                                        >
                                            "Seat map"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || filtered.with(|v| v.is_empty()) && !loading.get()>
                <p class="empty">"No venues found"</p>
            </Show>

            <div class="pager">
                <button
                    disabled=move || current_page.with(|p| p.page == 0)
                    on:click=move |_| set_page.set(current_page.with_untracked(|p| p.page.saturating_sub(1)))
                >
                    "‹"
                </button>
                <span>{move || current_page.with(|p| format!("Page {} of {}", p.page + 1, p.page_count))}</span>
                <button
                    disabled=move || current_page.with(|p| p.page + 1 >= p.page_count)
                    on:click=move |_| set_page.set(current_page.with_untracked(|p| p.page + 1))
                >
                    "›"
                </button>
            </div>
        </section>
    }
}
