//! Seat Styling
//!
//! Maps grid cells to their visual presentation.

use crate::models::SeatType;
use crate::seat_map::{CellKind, SeatCell};

/// Legend entries (css class, colour, label)
pub const SEAT_LEGEND: &[(&str, &str, &str)] = &[
    ("seat vip", "#d4a017", "VIP"),
    ("seat standard", "#3b82f6", "Standard"),
    ("seat staff", "#10b981", "Staff"),
    ("seat other", "#8b5cf6", "Other"),
    ("seat booked", "#9ca3af", "Booked"),
    ("seat disabled", "#ef4444", "Disabled"),
];

/// Presentation of one grid slot
#[derive(Debug, Clone, PartialEq)]
pub struct CellVisual {
    pub class: &'static str,
    pub color: &'static str,
    /// Text drawn inside the cell
    pub text: String,
    /// Hover tooltip
    pub title: String,
    pub interactive: bool,
}

fn type_style(seat_type: SeatType) -> (&'static str, &'static str) {
    match seat_type {
        SeatType::Vip => ("seat vip", "#d4a017"),
        SeatType::Standard => ("seat standard", "#3b82f6"),
        SeatType::Staff => ("seat staff", "#10b981"),
        SeatType::Other => ("seat other", "#8b5cf6"),
    }
}

impl CellVisual {
    pub fn for_cell(cell: &SeatCell) -> Self {
        match cell.kind {
            CellKind::Disabled => Self {
                class: "seat disabled",
                color: "#ef4444",
                text: "✕".to_string(),
                title: format!("{} · disabled", cell.label),
                interactive: false,
            },
            CellKind::Booked => Self {
                class: "seat booked",
                color: "#9ca3af",
                text: "🔒".to_string(),
                title: format!("{} · booked", cell.label),
                interactive: false,
            },
            CellKind::Available(seat_type) => {
                let (class, color) = type_style(seat_type);
                Self {
                    class,
                    color,
                    text: cell.label.clone(),
                    title: format!("{} · {}", cell.label, seat_type.as_str()),
                    interactive: true,
                }
            }
        }
    }

    /// Empty slot where the backend has no seat
    pub fn gap() -> Self {
        Self {
            class: "seat gap",
            color: "transparent",
            text: String::new(),
            title: String::new(),
            interactive: false,
        }
    }

    pub fn for_slot(slot: Option<&SeatCell>) -> Self {
        slot.map(Self::for_cell).unwrap_or_else(Self::gap)
    }

    pub fn style(&self) -> String {
        format!("background-color: {};", self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_cell(seat_type: SeatType, active: bool, booked: bool) -> SeatCell {
        SeatCell {
            id: 1,
            row: 0,
            col: 0,
            label: "A1".to_string(),
            seat_type,
            is_active: active,
            is_booked: booked,
            kind: CellKind::classify(active, booked, seat_type),
        }
    }

    #[test]
    fn test_inactive_wins_over_booked_and_type() {
        let visual = CellVisual::for_cell(&make_cell(SeatType::Vip, false, true));
        assert_eq!(visual.class, "seat disabled");
        assert!(!visual.interactive);
    }

    #[test]
    fn test_booked_is_locked() {
        let visual = CellVisual::for_cell(&make_cell(SeatType::Standard, true, true));
        assert_eq!(visual.class, "seat booked");
        assert!(!visual.interactive);
    }

    #[test]
    fn test_available_colored_by_type() {
        for (seat_type, class) in [
            (SeatType::Vip, "seat vip"),
            (SeatType::Standard, "seat standard"),
            (SeatType::Staff, "seat staff"),
            (SeatType::Other, "seat other"),
        ] {
            let visual = CellVisual::for_cell(&make_cell(seat_type, true, false));
            assert_eq!(visual.class, class);
            assert!(visual.interactive);
            assert_eq!(visual.text, "A1");
        }
    }

    #[test]
    fn test_gap_slot() {
        let visual = CellVisual::for_slot(None);
        assert_eq!(visual, CellVisual::gap());
        assert!(!visual.interactive);
    }

    #[test]
    fn test_legend_matches_cell_colors() {
        for seat_type in [SeatType::Vip, SeatType::Standard, SeatType::Staff, SeatType::Other] {
            let (class, color) = type_style(seat_type);
            assert!(SEAT_LEGEND.iter().any(|(c, col, _)| *c == class && *col == color));
        }
    }
}
