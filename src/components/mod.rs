//! UI Components
//!
//! Reusable Leptos components.

mod confirm_button;
mod seat_editor;
mod seat_grid;
mod seat_legend;
mod seat_map_view;
mod toast_host;
mod venue_list;
mod viewport_toolbar;

pub use confirm_button::ConfirmButton;
pub use seat_editor::SeatEditor;
pub use seat_grid::{SeatGrid, SEAT_CELL_SELECTOR};
pub use seat_legend::SeatLegend;
pub use seat_map_view::SeatMapView;
pub use toast_host::ToastHost;
pub use venue_list::VenueList;
pub use viewport_toolbar::ViewportToolbar;
