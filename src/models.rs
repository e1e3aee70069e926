//! Frontend Models
//!
//! Data structures matching backend payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Seat classification as sent by the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum SeatType {
    #[serde(rename = "STANDARD")]
    Standard,
    #[serde(rename = "VIP")]
    Vip,
    #[serde(rename = "STAFF")]
    Staff,
    /// Anything the console does not recognize
    #[default]
    #[serde(rename = "OTHER")]
    Other,
}

impl SeatType {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "STANDARD" => SeatType::Standard,
            "VIP" => SeatType::Vip,
            "STAFF" => SeatType::Staff,
            _ => SeatType::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeatType::Standard => "STANDARD",
            SeatType::Vip => "VIP",
            SeatType::Staff => "STAFF",
            SeatType::Other => "OTHER",
        }
    }
}

impl<'de> Deserialize<'de> for SeatType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(SeatType::from_str).unwrap_or_default())
    }
}

/// Seat record (matches `GET /venues/{id}/seats` entries)
///
/// Position fields are optional so a malformed payload surfaces as a
/// normalizer error instead of a decode failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatRecord {
    pub id: u32,
    #[serde(default)]
    pub row_label: Option<String>,
    #[serde(default)]
    pub col_label: Option<u32>,
    #[serde(default)]
    pub seat_type: SeatType,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_booked: bool,
}

fn default_true() -> bool {
    true
}

/// Venue data structure (matches `GET /venues` entries)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub campus_name: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub has_seats: bool,
}

/// Body of `PATCH /seats/{id}/status`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatStatusUpdate {
    pub is_active: bool,
}
