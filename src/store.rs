//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Venue;

/// Toast severity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast info",
            ToastLevel::Success => "toast success",
            ToastLevel::Warning => "toast warning",
            ToastLevel::Error => "toast error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Venues from the last list request
    pub venues: Vec<Venue>,
    /// Venue whose seat map is open
    pub open_venue: Option<Venue>,
    /// Visible notifications, oldest first
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_venues(store: &AppStore, venues: Vec<Venue>) {
    *store.venues().write() = venues;
}

pub fn store_open_venue(store: &AppStore, venue: Venue) {
    *store.open_venue().write() = Some(venue);
}

pub fn store_close_venue(store: &AppStore) {
    *store.open_venue().write() = None;
}

/// Append a toast and return its id
pub fn store_push_toast(store: &AppStore, level: ToastLevel, message: String) -> u32 {
    let id = {
        let field = store.next_toast_id();
        let mut next = field.write();
        let id = *next;
        *next = id.wrapping_add(1);
        id
    };
    store.toasts().write().push(Toast { id, level, message });
    id
}

pub fn store_dismiss_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_get_distinct_ids_and_dismiss_one() {
        let store = Store::new(AppState::default());

        let first = store_push_toast(&store, ToastLevel::Warning, "Seat is booked".to_string());
        let second = store_push_toast(&store, ToastLevel::Success, "Seat A1 disabled".to_string());
        assert_ne!(first, second);
        assert_eq!(store.next_toast_id().get_untracked(), 2);

        store_dismiss_toast(&store, first);
        let toasts = store.toasts().get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, second);
        assert_eq!(toasts[0].level, ToastLevel::Success);
    }
}
