//! Seat Map
//!
//! Reshapes a venue's flat seat list into a row-by-column grid.
//!
//! Rows are the distinct row labels in sorted order. A seat lands at column
//! index `colLabel - 1`; the grid is as wide as the largest column label in
//! any row, so rows with missing seats get gaps instead of shifting.

use std::collections::BTreeMap;

use crate::error::SeatMapError;
use crate::models::{SeatRecord, SeatType};

/// Widest row the console will lay out; larger column labels are bad data
pub const MAX_COLUMNS: u32 = 500;

/// How a cell is presented, evaluated in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Inactive, regardless of type or booking
    Disabled,
    /// Held by an attendee
    Booked,
    /// Sellable, clickable
    Available(SeatType),
}

impl CellKind {
    pub fn classify(is_active: bool, is_booked: bool, seat_type: SeatType) -> Self {
        if !is_active {
            CellKind::Disabled
        } else if is_booked {
            CellKind::Booked
        } else {
            CellKind::Available(seat_type)
        }
    }
}

/// One seat placed in the grid
#[derive(Debug, Clone, PartialEq)]
pub struct SeatCell {
    /// Backend seat id
    pub id: u32,
    pub row: usize,
    pub col: usize,
    /// Row label + column label, e.g. "B12"
    pub label: String,
    pub seat_type: SeatType,
    pub is_active: bool,
    pub is_booked: bool,
    pub kind: CellKind,
}

/// Seat counts shown next to the legend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeatSummary {
    pub total: usize,
    pub available: usize,
    pub booked: usize,
    pub disabled: usize,
}

/// Grid of seats for one venue
#[derive(Debug, Clone, PartialEq)]
pub struct SeatMap {
    pub row_labels: Vec<String>,
    pub rows: usize,
    pub cols: usize,
    /// `seats[r][c]` is the seat at `row_labels[r]`, column `c + 1`; `None` is a gap
    pub seats: Vec<Vec<Option<SeatCell>>>,
}

/// Shape of the grid without its seats; fixed once a map is loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    pub row_labels: Vec<String>,
    pub cols: usize,
}

fn missing_position(rec: &SeatRecord, index: usize) -> SeatMapError {
    SeatMapError::InvalidFormat(format!(
        "seat {} at index {} is missing rowLabel or colLabel",
        rec.id, index
    ))
}

impl SeatMap {
    /// Build the grid from backend records.
    ///
    /// Fails with `NoSeatData` on an empty list and `InvalidFormat` when any
    /// record lacks a position, uses a column outside `1..=MAX_COLUMNS`, or
    /// repeats a position.
    pub fn from_records(records: &[SeatRecord]) -> Result<Self, SeatMapError> {
        let first = records.first().ok_or(SeatMapError::NoSeatData)?;
        if first.row_label.is_none() || first.col_label.is_none() {
            return Err(missing_position(first, 0));
        }

        // Group by row label; BTreeMap keeps the labels sorted
        let mut grouped: BTreeMap<&str, Vec<(u32, &SeatRecord)>> = BTreeMap::new();
        for (index, rec) in records.iter().enumerate() {
            let (Some(row), Some(col)) = (rec.row_label.as_deref(), rec.col_label) else {
                return Err(missing_position(rec, index));
            };
            let row = row.trim();
            if row.is_empty() {
                return Err(missing_position(rec, index));
            }
            if col == 0 {
                return Err(SeatMapError::InvalidFormat(format!(
                    "seat {} has column 0; columns start at 1",
                    rec.id
                )));
            }
            if col > MAX_COLUMNS {
                return Err(SeatMapError::InvalidFormat(format!(
                    "seat {} has column {}; at most {} columns are supported",
                    rec.id, col, MAX_COLUMNS
                )));
            }
            grouped.entry(row).or_default().push((col, rec));
        }

        let cols = grouped
            .values()
            .flat_map(|seats| seats.iter().map(|(col, _)| *col as usize))
            .max()
            .unwrap_or(0);

        let mut row_labels = Vec::with_capacity(grouped.len());
        let mut seats = Vec::with_capacity(grouped.len());

        for (r, (row_label, mut row_seats)) in grouped.into_iter().enumerate() {
            row_seats.sort_by_key(|(col, _)| *col);
            if let Some(pair) = row_seats.windows(2).find(|pair| pair[0].0 == pair[1].0) {
                return Err(SeatMapError::InvalidFormat(format!(
                    "duplicate seat position {}{}",
                    row_label, pair[0].0
                )));
            }

            let mut cells: Vec<Option<SeatCell>> = vec![None; cols];
            for (col, rec) in row_seats {
                let c = col as usize - 1;
                cells[c] = Some(SeatCell {
                    id: rec.id,
                    row: r,
                    col: c,
                    label: format!("{}{}", row_label, col),
                    seat_type: rec.seat_type,
                    is_active: rec.is_active,
                    is_booked: rec.is_booked,
                    kind: CellKind::classify(rec.is_active, rec.is_booked, rec.seat_type),
                });
            }

            row_labels.push(row_label.to_string());
            seats.push(cells);
        }

        Ok(Self {
            rows: row_labels.len(),
            cols,
            row_labels,
            seats,
        })
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&SeatCell> {
        self.seats.get(row)?.get(col)?.as_ref()
    }

    pub fn layout(&self) -> GridLayout {
        GridLayout {
            row_labels: self.row_labels.clone(),
            cols: self.cols,
        }
    }

    /// All placed seats, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = &SeatCell> {
        self.seats.iter().flatten().flatten()
    }

    /// Patch one seat's active flag and recompute its kind.
    /// Every other cell is left untouched.
    pub fn set_active(&mut self, row: usize, col: usize, is_active: bool) -> Option<&SeatCell> {
        let cell = self.seats.get_mut(row)?.get_mut(col)?.as_mut()?;
        cell.is_active = is_active;
        cell.kind = CellKind::classify(cell.is_active, cell.is_booked, cell.seat_type);
        Some(cell)
    }

    /// True when some row has fewer seats than the grid is wide
    pub fn has_gaps(&self) -> bool {
        self.seats.iter().flatten().any(Option::is_none)
    }

    pub fn summary(&self) -> SeatSummary {
        self.iter_cells().fold(SeatSummary::default(), |mut acc, cell| {
            acc.total += 1;
            match cell.kind {
                CellKind::Disabled => acc.disabled += 1,
                CellKind::Booked => acc.booked += 1,
                CellKind::Available(_) => acc.available += 1,
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_seat(id: u32, row: &str, col: u32, seat_type: SeatType, active: bool, booked: bool) -> SeatRecord {
        SeatRecord {
            id,
            row_label: Some(row.to_string()),
            col_label: Some(col),
            seat_type,
            is_active: active,
            is_booked: booked,
        }
    }

    /// 3 rows x 4 cols, deliberately shuffled
    fn uniform_records() -> Vec<SeatRecord> {
        let mut records = Vec::new();
        let mut id = 1;
        for row in ["C", "A", "B"] {
            for col in [3, 1, 4, 2] {
                records.push(make_seat(id, row, col, SeatType::Standard, true, false));
                id += 1;
            }
        }
        records
    }

    #[test]
    fn test_uniform_grid_shape_and_labels() {
        let map = SeatMap::from_records(&uniform_records()).unwrap();

        assert_eq!(map.row_labels, vec!["A", "B", "C"]);
        assert_eq!(map.rows, map.row_labels.len());
        assert_eq!(map.cols, 4);
        assert!(!map.has_gaps());
        for (r, row) in map.seats.iter().enumerate() {
            assert_eq!(row.len(), map.cols);
            for (c, cell) in row.iter().enumerate() {
                let cell = cell.as_ref().unwrap();
                assert_eq!(cell.label, format!("{}{}", map.row_labels[r], c + 1));
                assert_eq!((cell.row, cell.col), (r, c));
            }
        }
    }

    #[test]
    fn test_empty_list_is_no_seat_data() {
        assert_eq!(SeatMap::from_records(&[]), Err(SeatMapError::NoSeatData));
    }

    #[test]
    fn test_first_record_without_row_label_is_invalid() {
        let mut records = uniform_records();
        records[0].row_label = None;
        assert!(matches!(
            SeatMap::from_records(&records),
            Err(SeatMapError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_later_record_without_col_label_is_invalid() {
        let mut records = uniform_records();
        records[5].col_label = None;
        assert!(matches!(
            SeatMap::from_records(&records),
            Err(SeatMapError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_zero_column_and_duplicates_are_invalid() {
        let zero = vec![make_seat(1, "A", 0, SeatType::Vip, true, false)];
        assert!(matches!(SeatMap::from_records(&zero), Err(SeatMapError::InvalidFormat(_))));

        let dup = vec![
            make_seat(1, "A", 1, SeatType::Vip, true, false),
            make_seat(2, "A", 1, SeatType::Vip, true, false),
        ];
        assert_eq!(
            SeatMap::from_records(&dup),
            Err(SeatMapError::InvalidFormat("duplicate seat position A1".to_string()))
        );
    }

    #[test]
    fn test_irregular_rows_leave_gaps() {
        let records = vec![
            make_seat(1, "A", 1, SeatType::Standard, true, false),
            make_seat(2, "A", 2, SeatType::Vip, true, true),
            make_seat(3, "B", 1, SeatType::Staff, false, false),
        ];
        let map = SeatMap::from_records(&records).unwrap();

        assert_eq!((map.rows, map.cols), (2, 2));
        assert_eq!(map.cell(0, 0).unwrap().kind, CellKind::Available(SeatType::Standard));
        assert_eq!(map.cell(0, 1).unwrap().kind, CellKind::Booked);
        assert_eq!(map.cell(1, 0).unwrap().kind, CellKind::Disabled);
        assert!(map.cell(1, 1).is_none());
        assert_eq!(map.seats[1].len(), 2);
        assert!(map.has_gaps());
    }

    #[test]
    fn test_sparse_columns_keep_position() {
        let records = vec![
            make_seat(1, "A", 1, SeatType::Standard, true, false),
            make_seat(2, "A", 4, SeatType::Standard, true, false),
        ];
        let map = SeatMap::from_records(&records).unwrap();
        assert_eq!(map.cols, 4);
        assert_eq!(map.cell(0, 3).unwrap().label, "A4");
        assert!(map.cell(0, 1).is_none());
    }

    #[test]
    fn test_outlier_column_is_invalid_not_allocated() {
        let records = vec![
            make_seat(1, "A", 1, SeatType::Standard, true, false),
            make_seat(2, "B", 3_000_000, SeatType::Standard, true, false),
        ];
        assert_eq!(
            SeatMap::from_records(&records),
            Err(SeatMapError::InvalidFormat(format!(
                "seat 2 has column 3000000; at most {} columns are supported",
                MAX_COLUMNS
            )))
        );

        // The limit itself is still a valid width
        let widest = vec![make_seat(1, "A", MAX_COLUMNS, SeatType::Standard, true, false)];
        assert_eq!(SeatMap::from_records(&widest).unwrap().cols, MAX_COLUMNS as usize);
    }

    #[test]
    fn test_classify_precedence() {
        assert_eq!(CellKind::classify(false, true, SeatType::Vip), CellKind::Disabled);
        assert_eq!(CellKind::classify(true, true, SeatType::Vip), CellKind::Booked);
        assert_eq!(CellKind::classify(true, false, SeatType::Staff), CellKind::Available(SeatType::Staff));
    }

    #[test]
    fn test_set_active_patches_single_cell() {
        let mut map = SeatMap::from_records(&uniform_records()).unwrap();
        let before = map.clone();

        let patched = map.set_active(1, 2, false).unwrap();
        assert!(!patched.is_active);
        assert_eq!(patched.kind, CellKind::Disabled);

        for r in 0..map.rows {
            for c in 0..map.cols {
                if (r, c) != (1, 2) {
                    assert_eq!(map.seats[r][c], before.seats[r][c]);
                }
            }
        }

        assert_eq!(map.layout(), before.layout());

        // Reactivating restores the type-derived kind
        map.set_active(1, 2, true);
        assert_eq!(map, before);
    }

    #[test]
    fn test_set_active_on_gap_is_none() {
        let records = vec![
            make_seat(1, "A", 1, SeatType::Standard, true, false),
            make_seat(2, "A", 3, SeatType::Standard, true, false),
        ];
        let mut map = SeatMap::from_records(&records).unwrap();
        assert!(map.set_active(0, 1, false).is_none());
        assert!(map.set_active(9, 9, false).is_none());
    }

    #[test]
    fn test_summary_counts() {
        let records = vec![
            make_seat(1, "A", 1, SeatType::Standard, true, false),
            make_seat(2, "A", 2, SeatType::Vip, true, true),
            make_seat(3, "B", 1, SeatType::Staff, false, false),
            make_seat(4, "B", 2, SeatType::Staff, false, true),
        ];
        let summary = SeatMap::from_records(&records).unwrap().summary();
        assert_eq!(summary, SeatSummary { total: 4, available: 1, booked: 1, disabled: 2 });
    }
}
