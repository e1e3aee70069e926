//! Leptos PanZoom Utilities
//!
//! Pan with mouse drag, zoom with the wheel, for any transformed surface.
//! Pointer-down on an element matching the ignore selector does not start a
//! drag, so clickable children keep their own click handling.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

mod viewport;

pub use viewport::{DragMode, Viewport, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

/// PanZoom state signals
#[derive(Clone, Copy)]
pub struct PanZoomSignals {
    pub viewport_read: ReadSignal<Viewport>,
    pub viewport_write: WriteSignal<Viewport>,
}

pub fn create_panzoom_signals() -> PanZoomSignals {
    let (viewport_read, viewport_write) = signal(Viewport::new());
    PanZoomSignals {
        viewport_read,
        viewport_write,
    }
}

/// Reset zoom and pan
pub fn reset_view(pz: &PanZoomSignals) {
    pz.viewport_write.update(|vp| vp.reset());
}

pub fn zoom_in(pz: &PanZoomSignals) {
    pz.viewport_write.update(|vp| vp.zoom_in());
}

pub fn zoom_out(pz: &PanZoomSignals) {
    pz.viewport_write.update(|vp| vp.zoom_out());
}

/// Whether the event target sits inside an element matching `selector`
fn target_matches(ev: &web_sys::MouseEvent, selector: &str) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

/// Create mousedown handler for the pannable container
/// Starts a drag unless the press lands on an element matching `ignore_selector`
pub fn make_on_mousedown(
    pz: PanZoomSignals,
    ignore_selector: &'static str,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if target_matches(&ev, ignore_selector) {
            return;
        }
        ev.prevent_default();
        let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
        pz.viewport_write.update(|vp| vp.pointer_down(x, y));
    }
}

/// Create mousemove handler - only writes while dragging
pub fn make_on_mousemove(pz: PanZoomSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if !pz.viewport_read.with_untracked(|vp| vp.is_dragging()) {
            return;
        }
        let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
        pz.viewport_write.update(|vp| {
            vp.pointer_move(x, y);
        });
    }
}

pub fn make_on_mouseup(pz: PanZoomSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if pz.viewport_read.with_untracked(|vp| vp.is_dragging()) {
            pz.viewport_write.update(|vp| vp.pointer_up());
        }
    }
}

pub fn make_on_mouseleave(pz: PanZoomSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if pz.viewport_read.with_untracked(|vp| vp.is_dragging()) {
            pz.viewport_write.update(|vp| vp.pointer_leave());
        }
    }
}

/// Create wheel handler - zooms regardless of drag state
pub fn make_on_wheel(pz: PanZoomSignals) -> impl Fn(web_sys::WheelEvent) + Copy + 'static {
    move |ev: web_sys::WheelEvent| {
        ev.prevent_default();
        let delta = ev.delta_y();
        pz.viewport_write.update(|vp| vp.wheel(delta));
    }
}

/// Inline style for the transformed surface
pub fn surface_style(pz: PanZoomSignals) -> impl Fn() -> String + Copy + 'static {
    move || {
        pz.viewport_read.with(|vp| {
            format!(
                "transform: {}; transition: {}; transform-origin: 0 0;",
                vp.transform_css(),
                vp.transition_css()
            )
        })
    }
}

/// Cursor for the container: grabbing while dragging
pub fn container_cursor(pz: PanZoomSignals) -> impl Fn() -> &'static str + Copy + 'static {
    move || {
        if pz.viewport_read.with(|vp| vp.is_dragging()) {
            "cursor: grabbing;"
        } else {
            "cursor: grab;"
        }
    }
}
