//! Viewport State
//!
//! Zoom factor and pan offset for a pannable surface, driven by pointer
//! drag and wheel input. Knows nothing about what is being rendered.

/// Smallest allowed zoom factor
pub const MIN_ZOOM: f64 = 0.5;
/// Largest allowed zoom factor
pub const MAX_ZOOM: f64 = 2.0;
/// Zoom change per wheel notch or toolbar click
pub const ZOOM_STEP: f64 = 0.1;

/// Pointer interaction mode
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragMode {
    #[default]
    Idle,
    /// Pointer is held down; `anchor` is pointer position minus pan at press time
    Dragging { anchor_x: f64, anchor_y: f64 },
}

/// Pan/zoom transform state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub mode: DragMode,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            mode: DragMode::Idle,
        }
    }
}

/// Snap to the step grid and clamp, so repeated steps never drift.
fn clamp_zoom(zoom: f64) -> f64 {
    let snapped = (zoom * 10.0).round() / 10.0;
    snapped.clamp(MIN_ZOOM, MAX_ZOOM)
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.mode, DragMode::Dragging { .. })
    }

    /// Idle -> dragging. The anchor keeps the surface under the pointer.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.mode = DragMode::Dragging {
            anchor_x: x - self.pan_x,
            anchor_y: y - self.pan_y,
        };
    }

    /// Returns true if the pan changed.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        match self.mode {
            DragMode::Dragging { anchor_x, anchor_y } => {
                self.pan_x = x - anchor_x;
                self.pan_y = y - anchor_y;
                true
            }
            DragMode::Idle => false,
        }
    }

    pub fn pointer_up(&mut self) {
        self.mode = DragMode::Idle;
    }

    pub fn pointer_leave(&mut self) {
        self.mode = DragMode::Idle;
    }

    /// Wheel input: scrolling up (negative delta) zooms in by one step,
    /// scrolling down zooms out. A zero delta is ignored.
    pub fn wheel(&mut self, delta_y: f64) {
        if delta_y < 0.0 {
            self.zoom_in();
        } else if delta_y > 0.0 {
            self.zoom_out();
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom = clamp_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = clamp_zoom(self.zoom - ZOOM_STEP);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Zoom as a rounded percentage for toolbar display
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    /// CSS transform for the rendering surface
    pub fn transform_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.pan_x, self.pan_y, self.zoom
        )
    }

    /// CSS transition: suppressed while dragging so the surface tracks the pointer
    pub fn transition_css(&self) -> &'static str {
        if self.is_dragging() {
            "none"
        } else {
            "transform 0.2s ease-out"
        }
    }
}
