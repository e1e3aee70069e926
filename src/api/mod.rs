//! REST Bindings
//!
//! Thin wrappers over the browser fetch API, organized by resource.

mod seat;
mod venue;

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::models::SeatRecord;

pub use venue::list_venues;

/// Seat endpoints used by the seat map view
///
/// Kept as a trait so the mutation flow can run against a stub in tests.
#[async_trait(?Send)]
pub trait SeatApi {
    async fn fetch_seats(&self, venue_id: u32) -> ApiResult<Vec<SeatRecord>>;
    async fn update_seat_status(&self, seat_id: u32, is_active: bool) -> ApiResult<()>;
}

/// HTTP client bound to the backend base URL
#[derive(Clone, Debug, PartialEq)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Join a path (starting with '/') onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn check_status(resp: &Response) -> ApiResult<()> {
    if resp.ok() {
        Ok(())
    } else {
        Err(ApiError::Status { status: resp.status() })
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> ApiResult<T> {
    log::debug!("[API] GET {}", url);
    let resp = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await?;
    check_status(&resp)?;
    Ok(resp.json::<T>().await?)
}

/// PATCH with a JSON body; only the status code matters
async fn patch_json<B: Serialize>(url: &str, body: &B) -> ApiResult<()> {
    log::debug!("[API] PATCH {}", url);
    let resp = Request::patch(url).json(body)?.send().await?;
    check_status(&resp)
}

#[async_trait(?Send)]
impl SeatApi for HttpApi {
    async fn fetch_seats(&self, venue_id: u32) -> ApiResult<Vec<SeatRecord>> {
        seat::fetch_venue_seats(self, venue_id).await
    }

    async fn update_seat_status(&self, seat_id: u32, is_active: bool) -> ApiResult<()> {
        seat::update_seat_status(self, seat_id, is_active).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let api = HttpApi::new("https://console.example.edu/api/");
        assert_eq!(api.url("/venues"), "https://console.example.edu/api/venues");
    }
}
