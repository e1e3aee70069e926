//! Seat Map View
//!
//! Modal for one venue: fetches its seats, renders the pannable grid, and
//! hosts the seat editor. All requests belong to the view's task scope and
//! are aborted when the modal closes.

use leptos::prelude::*;
use leptos_panzoom::*;

use crate::api::SeatApi;
use crate::components::{SeatEditor, SeatGrid, SeatLegend, ViewportToolbar, SEAT_CELL_SELECTOR};
use crate::context::use_app_context;
use crate::models::Venue;
use crate::scoped_task::TaskScope;
use crate::seat_map::SeatMap;
use crate::session::{toggle_seat_status, ClickOutcome, SeatMapSession};

#[derive(Clone, Debug, PartialEq)]
enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

#[component]
pub fn SeatMapView(venue: Venue, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let scope = TaskScope::bound_to_owner();
    let pz = create_panzoom_signals();

    let (load_state, set_load_state) = signal(LoadState::Loading);
    let session = RwSignal::new(None::<SeatMapSession>);

    // Fetch and normalize once per open
    let venue_id = venue.id;
    if venue.has_seats {
        let api = ctx.api();
        scope.spawn(async move {
            log::info!("[SEATMAP] Loading seats for venue {}", venue_id);
            let result = match api.fetch_seats(venue_id).await {
                Ok(records) => SeatMap::from_records(&records).map_err(|e| {
                    log::warn!("[SEATMAP] Venue {}: {}", venue_id, e);
                    e.to_string()
                }),
                Err(e) => {
                    log::error!("[SEATMAP] Loading venue {} failed: {}", venue_id, e);
                    Err("Could not load seat map".to_string())
                }
            };
            match result {
                Ok(map) => {
                    log::info!("[SEATMAP] Venue {}: {} rows x {} cols", venue_id, map.rows, map.cols);
                    if map.has_gaps() {
                        ctx.info("Some rows have missing seats; they are shown as empty slots");
                    }
                    session.set(Some(SeatMapSession::new(map)));
                    set_load_state.set(LoadState::Ready);
                }
                Err(message) => set_load_state.set(LoadState::Failed(message)),
            }
        });
    } else {
        set_load_state.set(LoadState::Failed("This venue has no seat map".to_string()));
    }

    // The layout only changes on load; cells read their own slot
    let layout = Memo::new(move |_| session.with(|s| s.as_ref().map(|s| s.map.layout())));
    let slot = Callback::new(move |(row, col): (usize, usize)| {
        session.with(|s| s.as_ref().and_then(|s| s.map.cell(row, col).cloned()))
    });
    let selected = Memo::new(move |_| session.with(|s| s.as_ref().and_then(|s| s.selected().cloned())));
    let selected_id = Signal::derive(move || selected.with(|s| s.as_ref().map(|seat| seat.id)));
    let updating = Signal::derive(move || session.with(|s| s.as_ref().is_some_and(|s| s.is_updating())));
    let summary = Memo::new(move |_| session.with(|s| s.as_ref().map(|s| s.map.summary()).unwrap_or_default()));

    let on_cell_click = Callback::new(move |(row, col): (usize, usize)| {
        let outcome = session
            .try_update(|s| s.as_mut().map(|s| s.click(row, col)))
            .flatten();
        if let Some(ClickOutcome::Rejected(reason)) = outcome {
            log::debug!("[SEATMAP] Click rejected: {:?}", reason);
            ctx.warn(reason.message());
        }
    });

    let toggle_scope = scope.clone();
    let on_toggle = Callback::new(move |_: ()| {
        let Some(request) = session
            .try_update(|s| s.as_mut().and_then(|s| s.begin_update()))
            .flatten()
        else {
            return;
        };
        let api = ctx.api();
        toggle_scope.spawn(async move {
            match toggle_seat_status(&api, request).await {
                Ok(request) => {
                    let label = session
                        .try_update(|s| {
                            s.as_mut()
                                .and_then(|s| s.commit_update(request))
                                .map(|cell| cell.label.clone())
                        })
                        .flatten()
                        .unwrap_or_default();
                    let state = if request.is_active { "enabled" } else { "disabled" };
                    ctx.success(format!("Seat {} {}", label, state));
                }
                Err(e) => {
                    log::warn!("[SEATMAP] Seat {} update failed: {}", request.seat_id, e);
                    session.update(|s| {
                        if let Some(s) = s {
                            s.fail_update(request);
                        }
                    });
                    ctx.warn("Could not update seat status");
                }
            }
        });
    });

    let close_editor = Callback::new(move |_: ()| {
        session.update(|s| {
            if let Some(s) = s {
                s.close_editor();
            }
        });
    });

    let venue_name = venue.name.clone();

    view! {
        <div class="modal-backdrop">
            <div class="modal seat-map-modal">
                <div class="modal-header">
                    <span class="modal-title">{format!("Seat map · {}", venue_name)}</span>
                    <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                {move || match load_state.get() {
                    LoadState::Loading => view! {
                        <div class="loading">"Loading seats…"</div>
                    }.into_any(),
                    LoadState::Failed(message) => view! {
                        <div class="seat-map-error">
                            <p>{message}</p>
                            <button class="action-btn" on:click=move |_| on_close.run(())>"Close"</button>
                        </div>
                    }.into_any(),
                    LoadState::Ready => view! {
                        <div class="seat-map-body">
                            <div class="seat-map-toolbar">
                                <ViewportToolbar pz=pz />
                                <SeatLegend summary=summary />
                            </div>
                            <div class="seat-map-workspace">
                                <div
                                    class="seat-map-viewport"
                                    style=container_cursor(pz)
                                    on:mousedown=make_on_mousedown(pz, SEAT_CELL_SELECTOR)
                                    on:mousemove=make_on_mousemove(pz)
                                    on:mouseup=make_on_mouseup(pz)
                                    on:mouseleave=make_on_mouseleave(pz)
                                    on:wheel=make_on_wheel(pz)
                                >
                                    <div class="seat-map-surface" style=surface_style(pz)>
                                        <SeatGrid
                                            layout=layout
                                            slot=slot
                                            selected=selected_id
                                            on_cell_click=on_cell_click
                                        />
                                    </div>
                                </div>
                                <SeatEditor
                                    selected=selected
                                    updating=updating
                                    on_toggle=on_toggle
                                    on_close=close_editor
                                />
                            </div>
                        </div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
