use crate::{
    core::{
        msg::{copy::CopyMsg, grid::GridMsg, selection::SelectionMsg, Msg},
        raw_msg::{GridEvent, GridTarget, PointerPhase, RawMsg},
        state::AppState,
    },
    domain::selection::{CellCoord, SelectionKind},
};

/// Translates raw grid input into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        RawMsg::Pointer(event) => translate_grid_event(event, state),

        RawMsg::CopyShortcut => vec![Msg::Selection(SelectionMsg::CopyCtrlSelection)],

        RawMsg::Escape => {
            if state.copy.is_visible() {
                vec![Msg::Copy(CopyMsg::Dismiss)]
            } else if !state.selection.is_empty() {
                vec![Msg::Selection(SelectionMsg::Clear)]
            } else {
                vec![]
            }
        }

        // Grid layout - direct mapping
        RawMsg::DataId(data_id) => vec![Msg::Grid(GridMsg::SetDataId(data_id))],
        RawMsg::Columns(columns) => vec![Msg::Grid(GridMsg::SetColumns(columns))],
        RawMsg::RowCount(count) => vec![Msg::Grid(GridMsg::SetRowCount(count))],
        RawMsg::DataRefreshed => vec![Msg::Grid(GridMsg::DataRefreshed)],
    }
}

/// Interprets a pointer event against the current selection.
///
/// Shift takes precedence over ctrl when both are held.
pub fn translate_grid_event(event: GridEvent, state: &AppState) -> Vec<Msg> {
    let GridEvent {
        target,
        modifiers,
        phase,
    } = event;

    if modifiers.shift {
        return match target {
            GridTarget::RowHeader(index) => translate_range(SelectionKind::Rows, index, phase, state),
            GridTarget::ColumnHeader(index) => {
                translate_range(SelectionKind::Columns, index, phase, state)
            }
            GridTarget::Cell(cell) => translate_cell_range(cell, phase, state),
        };
    }

    match phase {
        // Only presses start or change anything without shift held
        PointerPhase::Hover => vec![],
        PointerPhase::Press if modifiers.ctrl => {
            let (kind, index) = match target {
                GridTarget::RowHeader(index) => (SelectionKind::Rows, index),
                GridTarget::ColumnHeader(index) => (SelectionKind::Columns, index),
                GridTarget::Cell(cell) => (SelectionKind::Rows, cell.row),
            };
            vec![Msg::Selection(SelectionMsg::ToggleCtrl { kind, index })]
        }
        PointerPhase::Press => {
            if state.selection.is_empty() {
                vec![]
            } else {
                vec![Msg::Selection(SelectionMsg::Clear)]
            }
        }
    }
}

fn translate_range(
    kind: SelectionKind,
    index: usize,
    phase: PointerPhase,
    state: &AppState,
) -> Vec<Msg> {
    let dragging = state.selection.is_dragging(kind);
    match (phase, dragging) {
        (PointerPhase::Press, false) => {
            vec![Msg::Selection(SelectionMsg::BeginRange { kind, index })]
        }
        // second click finishes the range where it landed
        (PointerPhase::Press, true) => vec![
            Msg::Selection(SelectionMsg::ExtendRange { kind, index }),
            Msg::Selection(SelectionMsg::CommitRange { kind }),
        ],
        (PointerPhase::Hover, true) => {
            vec![Msg::Selection(SelectionMsg::ExtendRange { kind, index })]
        }
        (PointerPhase::Hover, false) => vec![],
    }
}

fn translate_cell_range(cell: CellCoord, phase: PointerPhase, state: &AppState) -> Vec<Msg> {
    let dragging = state.selection.is_dragging_cells();
    match (phase, dragging) {
        (PointerPhase::Press, false) => vec![Msg::Selection(SelectionMsg::BeginCellRange(cell))],
        (PointerPhase::Press, true) => vec![
            Msg::Selection(SelectionMsg::ExtendCellRange(cell)),
            Msg::Selection(SelectionMsg::CommitCellRange),
        ],
        (PointerPhase::Hover, true) => vec![Msg::Selection(SelectionMsg::ExtendCellRange(cell))],
        (PointerPhase::Hover, false) => vec![],
    }
}
