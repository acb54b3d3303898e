//! Selection store for the grid.
//!
//! Holds at most one active selection shape. Starting any shape replaces
//! whatever was there before in a single assignment, so the five kinds
//! are mutually exclusive by construction.

use serde::{Deserialize, Serialize};

use crate::{
    core::{msg::selection::SelectionMsg, state::grid::GridState},
    domain::{
        copy::{CopyScope, RowSpan},
        selection::{
            begin_cell_range, begin_range, commit_cell_range, commit_range, extend_cell_range,
            extend_range, toggle_ctrl, CellCoord, CellRange, IndexRange, SelectionKind,
            SelectionMode,
        },
    },
};

/// A range that is either still being dragged or committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSelection<R> {
    pub range: R,
    pub committed: bool,
}

impl<R> RangeSelection<R> {
    fn dragging(range: R) -> Self {
        Self {
            range,
            committed: false,
        }
    }

    fn committed(range: R) -> Self {
        Self {
            range,
            committed: true,
        }
    }
}

/// The active selection and its payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveSelection {
    #[default]
    None,
    RowRange(RangeSelection<IndexRange>),
    ColumnRange(RangeSelection<IndexRange>),
    CellRange(RangeSelection<CellRange>),
    CtrlRows(Vec<usize>),
    CtrlCols(Vec<usize>),
}

impl ActiveSelection {
    pub fn mode(&self) -> SelectionMode {
        match self {
            ActiveSelection::None => SelectionMode::None,
            ActiveSelection::RowRange(_) => SelectionMode::RowRange,
            ActiveSelection::ColumnRange(_) => SelectionMode::ColumnRange,
            ActiveSelection::CellRange(_) => SelectionMode::CellRange,
            ActiveSelection::CtrlRows(_) => SelectionMode::CtrlRows,
            ActiveSelection::CtrlCols(_) => SelectionMode::CtrlCols,
        }
    }
}

/// Selection state owned by the page; mutated only through [`SelectionState::update`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    active: ActiveSelection,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &ActiveSelection {
        &self.active
    }

    pub fn mode(&self) -> SelectionMode {
        self.active.mode()
    }

    pub fn is_empty(&self) -> bool {
        self.active == ActiveSelection::None
    }

    pub fn clear(&mut self) {
        self.active = ActiveSelection::None;
    }

    /// Range of the given kind, dragging or committed
    pub fn range(&self, kind: SelectionKind) -> Option<IndexRange> {
        match (&self.active, kind) {
            (ActiveSelection::RowRange(sel), SelectionKind::Rows)
            | (ActiveSelection::ColumnRange(sel), SelectionKind::Columns) => Some(sel.range),
            _ => None,
        }
    }

    pub fn cell_range(&self) -> Option<CellRange> {
        match &self.active {
            ActiveSelection::CellRange(sel) => Some(sel.range),
            _ => None,
        }
    }

    /// Ctrl-selected indices of the given kind in click order; empty when
    /// another shape is active
    pub fn ctrl_selection(&self, kind: SelectionKind) -> &[usize] {
        match (&self.active, kind) {
            (ActiveSelection::CtrlRows(rows), SelectionKind::Rows) => rows,
            (ActiveSelection::CtrlCols(cols), SelectionKind::Columns) => cols,
            _ => &[],
        }
    }

    /// Whether a range of `kind` is being dragged (started but not committed)
    pub fn is_dragging(&self, kind: SelectionKind) -> bool {
        match (&self.active, kind) {
            (ActiveSelection::RowRange(sel), SelectionKind::Rows)
            | (ActiveSelection::ColumnRange(sel), SelectionKind::Columns) => !sel.committed,
            _ => false,
        }
    }

    pub fn is_dragging_cells(&self) -> bool {
        matches!(&self.active, ActiveSelection::CellRange(sel) if !sel.committed)
    }

    pub fn is_committed(&self) -> bool {
        match &self.active {
            ActiveSelection::RowRange(sel) | ActiveSelection::ColumnRange(sel) => sel.committed,
            ActiveSelection::CellRange(sel) => sel.committed,
            _ => false,
        }
    }

    // Highlight helpers for the rendering grid

    pub fn is_row_selected(&self, row: usize) -> bool {
        match &self.active {
            ActiveSelection::RowRange(sel) => sel.range.contains(row),
            ActiveSelection::CtrlRows(rows) => rows.contains(&row),
            _ => false,
        }
    }

    pub fn is_column_selected(&self, col: usize) -> bool {
        match &self.active {
            ActiveSelection::ColumnRange(sel) => sel.range.contains(col),
            ActiveSelection::CtrlCols(cols) => cols.contains(&col),
            _ => false,
        }
    }

    pub fn is_cell_selected(&self, cell: CellCoord) -> bool {
        match &self.active {
            ActiveSelection::CellRange(sel) => sel.range.contains(cell),
            _ => self.is_row_selected(cell.row) || self.is_column_selected(cell.col),
        }
    }

    /// Selection-specific update function.
    ///
    /// Returns the export scope when the transition commits something to
    /// the clipboard builder.
    pub fn update(&mut self, msg: SelectionMsg, grid: &GridState) -> Option<CopyScope> {
        match msg {
            SelectionMsg::BeginRange { kind, index } => {
                let Some(index) = grid.clamp(kind, index) else {
                    log::debug!("BeginRange ignored: grid has no {kind}");
                    return None;
                };
                let sel = RangeSelection::dragging(begin_range(index));
                self.active = match kind {
                    SelectionKind::Rows => ActiveSelection::RowRange(sel),
                    SelectionKind::Columns => ActiveSelection::ColumnRange(sel),
                };
                None
            }

            SelectionMsg::ExtendRange { kind, index } => {
                if !self.is_dragging(kind) {
                    return None;
                }
                let index = grid.clamp(kind, index)?;
                if let ActiveSelection::RowRange(sel) | ActiveSelection::ColumnRange(sel) =
                    &mut self.active
                {
                    sel.range = extend_range(sel.range, index);
                }
                None
            }

            SelectionMsg::CommitRange { kind } => {
                if !self.is_dragging(kind) {
                    log::debug!("CommitRange ignored: no {kind} range in progress");
                    return None;
                }
                let range = self.range(kind).map(commit_range)?;
                let sel = RangeSelection::committed(range);
                match kind {
                    SelectionKind::Rows => {
                        self.active = ActiveSelection::RowRange(sel);
                        Some(CopyScope::Rows {
                            columns: grid.all_column_names(),
                            rows: RowSpan::Range(range),
                        })
                    }
                    SelectionKind::Columns => {
                        self.active = ActiveSelection::ColumnRange(sel);
                        Some(CopyScope::Columns {
                            columns: grid.column_names(range),
                        })
                    }
                }
            }

            SelectionMsg::BeginCellRange(cell) => {
                let Some(cell) = grid.clamp_cell(cell) else {
                    log::debug!("BeginCellRange ignored: grid is empty");
                    return None;
                };
                self.active =
                    ActiveSelection::CellRange(RangeSelection::dragging(begin_cell_range(cell)));
                None
            }

            SelectionMsg::ExtendCellRange(cell) => {
                let cell = grid.clamp_cell(cell)?;
                if let ActiveSelection::CellRange(sel) = &mut self.active {
                    if !sel.committed {
                        sel.range = extend_cell_range(sel.range, cell);
                    }
                }
                None
            }

            SelectionMsg::CommitCellRange => {
                if !self.is_dragging_cells() {
                    log::debug!("CommitCellRange ignored: no cell range in progress");
                    return None;
                }
                let range = self.cell_range().map(commit_cell_range)?;
                self.active = ActiveSelection::CellRange(RangeSelection::committed(range));
                Some(CopyScope::Rows {
                    columns: grid.column_names(range.cols()),
                    rows: RowSpan::Range(range.rows()),
                })
            }

            SelectionMsg::ToggleCtrl { kind, index } => {
                let Some(index) = grid.clamp(kind, index) else {
                    log::debug!("ToggleCtrl ignored: grid has no {kind}");
                    return None;
                };
                let next = toggle_ctrl(self.ctrl_selection(kind), index);
                self.active = match (kind, next.is_empty()) {
                    (_, true) => ActiveSelection::None,
                    (SelectionKind::Rows, false) => ActiveSelection::CtrlRows(next),
                    (SelectionKind::Columns, false) => ActiveSelection::CtrlCols(next),
                };
                None
            }

            SelectionMsg::CopyCtrlSelection => match &self.active {
                ActiveSelection::CtrlRows(rows) => Some(CopyScope::Rows {
                    columns: grid.all_column_names(),
                    rows: RowSpan::Rows(rows.clone()),
                }),
                ActiveSelection::CtrlCols(cols) => Some(CopyScope::Columns {
                    columns: grid.column_names_at(cols),
                }),
                _ => None,
            },

            SelectionMsg::Clear => {
                self.clear();
                None
            }
        }
    }

    /// Pull the selection back inside the grid after its shape changed.
    /// Shapes that no longer fit at all are dropped.
    pub fn retain_within(&mut self, grid: &GridState) {
        let active = std::mem::take(&mut self.active);
        self.active = match active {
            ActiveSelection::None => ActiveSelection::None,
            ActiveSelection::RowRange(sel) => grid
                .clamp_range(SelectionKind::Rows, sel.range)
                .map(|range| ActiveSelection::RowRange(RangeSelection { range, ..sel }))
                .unwrap_or_default(),
            ActiveSelection::ColumnRange(sel) => grid
                .clamp_range(SelectionKind::Columns, sel.range)
                .map(|range| ActiveSelection::ColumnRange(RangeSelection { range, ..sel }))
                .unwrap_or_default(),
            ActiveSelection::CellRange(sel) => grid
                .clamp_cell(sel.range.start)
                .zip(grid.clamp_cell(sel.range.end))
                .map(|(start, end)| {
                    ActiveSelection::CellRange(RangeSelection {
                        range: CellRange::new(start, end),
                        ..sel
                    })
                })
                .unwrap_or_default(),
            ActiveSelection::CtrlRows(rows) => {
                let rows = retain_indices(rows, grid.row_count);
                if rows.is_empty() {
                    ActiveSelection::None
                } else {
                    ActiveSelection::CtrlRows(rows)
                }
            }
            ActiveSelection::CtrlCols(cols) => {
                let cols = retain_indices(cols, grid.column_count());
                if cols.is_empty() {
                    ActiveSelection::None
                } else {
                    ActiveSelection::CtrlCols(cols)
                }
            }
        };
    }
}

fn retain_indices(indices: Vec<usize>, count: usize) -> Vec<usize> {
    indices
        .into_iter()
        .filter(|&i| (1..=count).contains(&i))
        .collect()
}
