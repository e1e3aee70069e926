//! Seat Endpoints

use super::{get_json, patch_json, HttpApi};
use crate::error::ApiResult;
use crate::models::{SeatRecord, SeatStatusUpdate};

pub fn venue_seats_path(venue_id: u32) -> String {
    format!("/venues/{}/seats", venue_id)
}

pub fn seat_status_path(seat_id: u32) -> String {
    format!("/seats/{}/status", seat_id)
}

pub(super) async fn fetch_venue_seats(api: &HttpApi, venue_id: u32) -> ApiResult<Vec<SeatRecord>> {
    get_json(&api.url(&venue_seats_path(venue_id))).await
}

pub(super) async fn update_seat_status(api: &HttpApi, seat_id: u32, is_active: bool) -> ApiResult<()> {
    patch_json(&api.url(&seat_status_path(seat_id)), &SeatStatusUpdate { is_active }).await
}
