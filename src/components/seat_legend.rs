//! Seat Legend Component
//!
//! Colour key and seat counts for the seat map.

use leptos::prelude::*;

use crate::seat_map::SeatSummary;
use crate::seat_style::SEAT_LEGEND;

#[component]
pub fn SeatLegend(#[prop(into)] summary: Signal<SeatSummary>) -> impl IntoView {
    view! {
        <div class="seat-legend">
            {SEAT_LEGEND.iter().map(|(class, color, label)| {
                view! {
                    <span class="legend-entry">
                        <span class=format!("legend-swatch {}", class) style=format!("background-color: {};", color)></span>
                        {*label}
                    </span>
                }
            }).collect_view()}
            <span class="legend-summary">
                {move || {
                    let s = summary.get();
                    format!("{} seats · {} available · {} booked · {} disabled", s.total, s.available, s.booked, s.disabled)
                }}
            </span>
        </div>
    }
}
