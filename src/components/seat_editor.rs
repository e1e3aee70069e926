//! Seat Editor Panel
//!
//! Small panel for the selected seat with the status toggle.

use leptos::prelude::*;

use crate::components::ConfirmButton;
use crate::session::SelectedSeat;

#[component]
pub fn SeatEditor(
    #[prop(into)] selected: Signal<Option<SelectedSeat>>,
    #[prop(into)] updating: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let is_active = move || selected.with(|s| s.as_ref().is_some_and(|seat| seat.is_active));

    let toggle_label = Signal::derive(move || {
        if is_active() { "Disable seat".to_string() } else { "Enable seat".to_string() }
    });
    let toggle_prompt = Signal::derive(move || {
        let label = selected.with(|s| s.as_ref().map(|seat| seat.label.clone()).unwrap_or_default());
        if is_active() { format!("Disable {}?", label) } else { format!("Enable {}?", label) }
    });

    view! {
        {move || selected.get().map(|seat| {
            let (status, status_class) = if seat.is_active {
                ("Active", "status active")
            } else {
                ("Inactive", "status inactive")
            };
            view! {
                <div class="seat-editor">
                    <div class="seat-editor-header">
                        <span class="seat-editor-title">{format!("Seat {}", seat.label)}</span>
                        <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                    </div>
                    <dl class="seat-editor-fields">
                        <dt>"ID"</dt><dd>{seat.id}</dd>
                        <dt>"Type"</dt><dd>{seat.seat_type.as_str()}</dd>
                        <dt>"Position"</dt><dd>{format!("row {}, column {}", seat.row + 1, seat.col + 1)}</dd>
                        <dt>"Status"</dt><dd class=status_class>{status}</dd>
                    </dl>
                    <div class="seat-editor-actions">
                        <ConfirmButton
                            label=toggle_label
                            prompt=toggle_prompt
                            disabled=updating
                            on_confirm=on_toggle
                        />
                        <Show when=move || updating.get()>
                            <span class="updating">"Updating…"</span>
                        </Show>
                    </div>
                </div>
            }
        })}
    }
}
