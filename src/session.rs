//! Seat Map Session
//!
//! Local state of an open seat map: the grid, the seat editor, and the one
//! status update that may be in flight. A successful update patches the
//! single affected cell; nothing is refetched.

use crate::api::SeatApi;
use crate::error::ApiResult;
use crate::models::SeatType;
use crate::seat_map::{CellKind, SeatCell, SeatMap};

/// Snapshot of the seat shown in the editor
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedSeat {
    pub id: u32,
    pub label: String,
    pub seat_type: SeatType,
    pub row: usize,
    pub col: usize,
    pub is_active: bool,
}

impl From<&SeatCell> for SelectedSeat {
    fn from(cell: &SeatCell) -> Self {
        Self {
            id: cell.id,
            label: cell.label.clone(),
            seat_type: cell.seat_type,
            row: cell.row,
            col: cell.col,
            is_active: cell.is_active,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditorState {
    #[default]
    Closed,
    Editing(SelectedSeat),
}

/// Why a click did not open the editor
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    Disabled(String),
    Booked(String),
}

impl Rejection {
    pub fn message(&self) -> String {
        match self {
            Rejection::Disabled(label) => format!("Seat {} is disabled", label),
            Rejection::Booked(label) => format!("Seat {} is booked and cannot be changed", label),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    Opened(SelectedSeat),
    Rejected(Rejection),
    /// Click on an empty slot
    Ignored,
}

/// Pending status change: target seat and the flag it will get
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusRequest {
    pub seat_id: u32,
    pub row: usize,
    pub col: usize,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeatMapSession {
    pub map: SeatMap,
    pub editor: EditorState,
    pending: Option<StatusRequest>,
}

impl SeatMapSession {
    pub fn new(map: SeatMap) -> Self {
        Self {
            map,
            editor: EditorState::Closed,
            pending: None,
        }
    }

    pub fn selected(&self) -> Option<&SelectedSeat> {
        match &self.editor {
            EditorState::Editing(seat) => Some(seat),
            EditorState::Closed => None,
        }
    }

    pub fn is_updating(&self) -> bool {
        self.pending.is_some()
    }

    /// Open the editor for an eligible seat; disabled and booked seats are refused.
    pub fn click(&mut self, row: usize, col: usize) -> ClickOutcome {
        let Some(cell) = self.map.cell(row, col) else {
            return ClickOutcome::Ignored;
        };
        match cell.kind {
            CellKind::Disabled => ClickOutcome::Rejected(Rejection::Disabled(cell.label.clone())),
            CellKind::Booked => ClickOutcome::Rejected(Rejection::Booked(cell.label.clone())),
            CellKind::Available(_) => {
                let seat = SelectedSeat::from(cell);
                self.editor = EditorState::Editing(seat.clone());
                ClickOutcome::Opened(seat)
            }
        }
    }

    pub fn close_editor(&mut self) {
        self.editor = EditorState::Closed;
    }

    /// Start a toggle of the selected seat. Returns `None` when the editor is
    /// closed or another update is still in flight.
    pub fn begin_update(&mut self) -> Option<StatusRequest> {
        if self.pending.is_some() {
            return None;
        }
        let seat = self.selected()?;
        let request = StatusRequest {
            seat_id: seat.id,
            row: seat.row,
            col: seat.col,
            is_active: !seat.is_active,
        };
        self.pending = Some(request);
        Some(request)
    }

    /// Apply a confirmed update to exactly one cell and refresh the editor
    /// snapshot if it still shows that seat. The editor stays open.
    pub fn commit_update(&mut self, request: StatusRequest) -> Option<&SeatCell> {
        if self.pending == Some(request) {
            self.pending = None;
        }
        if let EditorState::Editing(seat) = &mut self.editor {
            if seat.id == request.seat_id {
                seat.is_active = request.is_active;
            }
        }
        self.map.set_active(request.row, request.col, request.is_active)
    }

    /// Drop a failed update; map and snapshot keep their pre-toggle values.
    pub fn fail_update(&mut self, request: StatusRequest) {
        if self.pending == Some(request) {
            self.pending = None;
        }
    }
}

/// Send a status change to the backend. Returns the request on success so
/// the caller can commit it.
pub async fn toggle_seat_status<A: SeatApi + ?Sized>(
    api: &A,
    request: StatusRequest,
) -> ApiResult<StatusRequest> {
    log::info!(
        "[SEATMAP] Setting seat {} active={}",
        request.seat_id,
        request.is_active
    );
    api.update_seat_status(request.seat_id, request.is_active).await?;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::SeatRecord;
    use crate::seat_style::CellVisual;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Records every update call; fails them all when `fail` is set
    #[derive(Default)]
    struct StubApi {
        fail: bool,
        calls: RefCell<Vec<(u32, bool)>>,
    }

    #[async_trait(?Send)]
    impl SeatApi for StubApi {
        async fn fetch_seats(&self, _venue_id: u32) -> ApiResult<Vec<SeatRecord>> {
            Ok(Vec::new())
        }

        async fn update_seat_status(&self, seat_id: u32, is_active: bool) -> ApiResult<()> {
            self.calls.borrow_mut().push((seat_id, is_active));
            if self.fail {
                Err(ApiError::Status { status: 500 })
            } else {
                Ok(())
            }
        }
    }

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

    /// A1..A3, B1..B3; seat 7 is B1, A2 booked, B3 disabled
    fn make_session() -> SeatMapSession {
        let records = vec![
            make_seat(1, "A", 1, SeatType::Vip, true, false),
            make_seat(2, "A", 2, SeatType::Vip, true, true),
            make_seat(3, "A", 3, SeatType::Standard, true, false),
            make_seat(7, "B", 1, SeatType::Standard, true, false),
            make_seat(8, "B", 2, SeatType::Staff, true, false),
            make_seat(9, "B", 3, SeatType::Standard, false, false),
        ];
        SeatMapSession::new(SeatMap::from_records(&records).unwrap())
    }

    /// Click, begin, send, commit-or-fail: what the editor's toggle button does
    fn run_toggle(session: &mut SeatMapSession, api: &StubApi) -> bool {
        let Some(request) = session.begin_update() else {
            return false;
        };
        match block_on(toggle_seat_status(api, request)) {
            Ok(request) => {
                session.commit_update(request);
                true
            }
            Err(_) => {
                session.fail_update(request);
                false
            }
        }
    }

    #[test]
    fn test_toggle_seat_7_patches_one_cell() {
        let mut session = make_session();
        let before = session.map.clone();
        let api = StubApi::default();

        let outcome = session.click(1, 0);
        assert!(matches!(&outcome, ClickOutcome::Opened(seat) if seat.id == 7 && seat.is_active));

        assert!(run_toggle(&mut session, &api));
        assert_eq!(*api.calls.borrow(), vec![(7, false)]);

        let cell = session.map.cell(1, 0).unwrap();
        assert!(!cell.is_active);
        assert_eq!(cell.kind, CellKind::Disabled);
        assert_eq!(CellVisual::for_cell(cell).class, "seat disabled");

        for r in 0..session.map.rows {
            for c in 0..session.map.cols {
                if (r, c) != (1, 0) {
                    assert_eq!(session.map.seats[r][c], before.seats[r][c]);
                }
            }
        }

        // Editor stays open with the new state
        let seat = session.selected().unwrap();
        assert_eq!(seat.id, 7);
        assert!(!seat.is_active);
        assert!(!session.is_updating());
    }

    #[test]
    fn test_toggle_twice_restores_cell() {
        let mut session = make_session();
        let before = session.map.clone();
        let api = StubApi::default();

        session.click(0, 0);
        assert!(run_toggle(&mut session, &api));
        assert!(run_toggle(&mut session, &api));

        assert_eq!(*api.calls.borrow(), vec![(1, false), (1, true)]);
        assert_eq!(session.map, before);
    }

    #[test]
    fn test_failed_update_changes_nothing() {
        let mut session = make_session();
        let before = session.map.clone();
        let api = StubApi { fail: true, ..Default::default() };

        session.click(0, 2);
        let snapshot = session.selected().cloned();

        assert!(!run_toggle(&mut session, &api));
        assert_eq!(api.calls.borrow().len(), 1);
        assert_eq!(session.map, before);
        assert_eq!(session.selected().cloned(), snapshot);
        assert!(!session.is_updating());
    }

    #[test]
    fn test_ineligible_clicks_never_reach_the_api() {
        let mut session = make_session();
        let api = StubApi::default();

        assert_eq!(
            session.click(0, 1),
            ClickOutcome::Rejected(Rejection::Booked("A2".to_string()))
        );
        assert_eq!(session.editor, EditorState::Closed);
        assert!(!run_toggle(&mut session, &api));

        assert_eq!(
            session.click(1, 2),
            ClickOutcome::Rejected(Rejection::Disabled("B3".to_string()))
        );
        assert_eq!(session.editor, EditorState::Closed);
        assert!(!run_toggle(&mut session, &api));

        assert!(api.calls.borrow().is_empty());
    }

    #[test]
    fn test_rejected_click_keeps_open_editor() {
        let mut session = make_session();
        session.click(0, 0);
        let editor = session.editor.clone();

        session.click(0, 1);
        assert_eq!(session.editor, editor);
    }

    #[test]
    fn test_gap_click_is_ignored() {
        let records = vec![
            make_seat(1, "A", 1, SeatType::Vip, true, false),
            make_seat(2, "A", 2, SeatType::Vip, true, false),
            make_seat(3, "B", 1, SeatType::Vip, true, false),
        ];
        let mut session = SeatMapSession::new(SeatMap::from_records(&records).unwrap());
        assert_eq!(session.click(1, 1), ClickOutcome::Ignored);
        assert_eq!(session.click(5, 5), ClickOutcome::Ignored);
    }

    #[test]
    fn test_single_update_in_flight() {
        let mut session = make_session();
        session.click(0, 0);

        let first = session.begin_update().unwrap();
        assert!(session.is_updating());
        assert!(session.begin_update().is_none());

        // Switching seats mid-flight still commits to the original cell
        session.click(1, 1);
        session.commit_update(first);
        assert!(!session.map.cell(0, 0).unwrap().is_active);
        assert!(session.map.cell(1, 1).unwrap().is_active);
        assert!(session.selected().unwrap().is_active);
        assert!(!session.is_updating());
    }

    #[test]
    fn test_begin_update_requires_open_editor() {
        let mut session = make_session();
        assert!(session.begin_update().is_none());

        session.click(0, 0);
        session.close_editor();
        assert!(session.begin_update().is_none());
    }
}
