//! Listing Utilities
//!
//! Client-side filtering and paging for list views.

use crate::models::Venue;

/// Venues whose name or campus contains `query` (case-insensitive)
pub fn filter_venues(venues: &[Venue], query: &str) -> Vec<Venue> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return venues.to_vec();
    }
    venues
        .iter()
        .filter(|venue| {
            venue.name.to_lowercase().contains(&query)
                || venue
                    .campus_name
                    .as_deref()
                    .is_some_and(|campus| campus.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// One page of a list
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Zero-based, clamped into range
    pub page: usize,
    /// At least 1, even for an empty list
    pub page_count: usize,
}

/// Slice `items` into page `page`; out-of-range pages clamp to the last one
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let page_count = items.len().div_ceil(per_page).max(1);
    let page = page.min(page_count - 1);
    let start = page * per_page;
    let end = (start + per_page).min(items.len());
    Page {
        items: items[start..end].to_vec(),
        page,
        page_count,
    }
}
