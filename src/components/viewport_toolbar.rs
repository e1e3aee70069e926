//! Viewport Toolbar Component

use leptos::prelude::*;
use leptos_panzoom::{reset_view, zoom_in, zoom_out, PanZoomSignals};

/// Zoom out / zoom in / reset buttons with the current zoom readout
#[component]
pub fn ViewportToolbar(pz: PanZoomSignals) -> impl IntoView {
    view! {
        <div class="viewport-toolbar">
            <button class="zoom-btn" title="Zoom out" on:click=move |_| zoom_out(&pz)>"−"</button>
            <span class="zoom-readout">{move || format!("{}%", pz.viewport_read.with(|vp| vp.zoom_percent()))}</span>
            <button class="zoom-btn" title="Zoom in" on:click=move |_| zoom_in(&pz)>"+"</button>
            <button class="reset-btn" on:click=move |_| reset_view(&pz)>"Reset view"</button>
        </div>
    }
}
