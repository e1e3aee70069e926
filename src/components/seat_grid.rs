//! Seat Grid Component
//!
//! Renders the seat map: column header, row labels, and one cell per slot.
//! Seat cells carry `data-seat` so pressing them never starts a pan.
//!
//! The rows are built once per layout. Each cell tracks its own slot, so
//! patching one seat or moving the selection only touches the cells whose
//! output changed.

use leptos::prelude::*;

use crate::seat_map::{GridLayout, SeatCell};
use crate::seat_style::CellVisual;

/// Selector the pan handler ignores
pub const SEAT_CELL_SELECTOR: &str = "[data-seat]";

fn render_cell(
    r: usize,
    c: usize,
    slot: Callback<(usize, usize), Option<SeatCell>>,
    selected: Signal<Option<u32>>,
    on_cell_click: Callback<(usize, usize)>,
) -> impl IntoView {
    let cell = Memo::new(move |_| slot.run((r, c)));
    let visual = Memo::new(move |_| cell.with(|cell| CellVisual::for_slot(cell.as_ref())));
    let is_selected = Memo::new(move |_| {
        let id = cell.with(|cell| cell.as_ref().map(|cell| cell.id));
        id.is_some() && id == selected.get()
    });
    // Gaps stay gaps: only the active flag of a seat is ever patched
    let is_seat = cell.with_untracked(Option::is_some);

    let class = move || {
        visual.with(|visual| match (is_selected.get(), visual.interactive) {
            (true, _) => format!("{} selected", visual.class),
            (false, true) => format!("{} clickable", visual.class),
            (false, false) => visual.class.to_string(),
        })
    };

    view! {
        <div
            class=class
            style=move || visual.with(CellVisual::style)
            title=move || visual.with(|visual| visual.title.clone())
            data-seat=is_seat.then_some("true")
            on:click=move |ev| {
                ev.stop_propagation();
                if is_seat {
                    on_cell_click.run((r, c));
                }
            }
        >
            {move || visual.with(|visual| visual.text.clone())}
        </div>
    }
}

fn render_rows(
    layout: GridLayout,
    slot: Callback<(usize, usize), Option<SeatCell>>,
    selected: Signal<Option<u32>>,
    on_cell_click: Callback<(usize, usize)>,
) -> AnyView {
    let cols = layout.cols;
    let header = (1..=cols)
        .map(|col| view! { <div class="seat-col-label">{col}</div> })
        .collect_view();

    let rows = layout
        .row_labels
        .into_iter()
        .enumerate()
        .map(|(r, row_label)| {
            let cells = (0..cols)
                .map(|c| render_cell(r, c, slot, selected, on_cell_click))
                .collect_view();
            view! {
                <div class="seat-row">
                    <div class="seat-row-label">{row_label}</div>
                    {cells}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="seat-row seat-header">
            <div class="seat-row-label"></div>
            {header}
        </div>
        {rows}
    }
    .into_any()
}

#[component]
pub fn SeatGrid(
    #[prop(into)] layout: Signal<Option<GridLayout>>,
    /// Current contents of the slot at (row, col)
    #[prop(into)] slot: Callback<(usize, usize), Option<SeatCell>>,
    #[prop(into)] selected: Signal<Option<u32>>,
    #[prop(into)] on_cell_click: Callback<(usize, usize)>,
) -> impl IntoView {
    view! {
        <div class="seat-grid">
            {move || layout.get().map(|layout| render_rows(layout, slot, selected, on_cell_click))}
        </div>
    }
}
