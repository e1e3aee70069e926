//! Venue Endpoints

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{get_json, HttpApi};
use crate::error::ApiResult;
use crate::models::Venue;

/// `/venues`, with an encoded `search` query when the filter is non-empty
pub fn venues_path(search: &str) -> String {
    let search = search.trim();
    if search.is_empty() {
        "/venues".to_string()
    } else {
        format!("/venues?search={}", utf8_percent_encode(search, NON_ALPHANUMERIC))
    }
}

pub async fn list_venues(api: &HttpApi, search: &str) -> ApiResult<Vec<Venue>> {
    get_json(&api.url(&venues_path(search))).await
}
