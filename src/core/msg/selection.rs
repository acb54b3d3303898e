use serde::{Deserialize, Serialize};

use crate::domain::selection::{CellCoord, SelectionKind};

/// Selection transitions driven by grid pointer and keyboard input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMsg {
    // Row/column ranges (shift-click and drag over headers)
    BeginRange { kind: SelectionKind, index: usize },
    ExtendRange { kind: SelectionKind, index: usize },
    CommitRange { kind: SelectionKind },

    // Free cell ranges (shift-click and drag over cells)
    BeginCellRange(CellCoord),
    ExtendCellRange(CellCoord),
    CommitCellRange,

    // Discontinuous multi-select (ctrl-click)
    ToggleCtrl { kind: SelectionKind, index: usize },
    CopyCtrlSelection,

    Clear,
}

impl SelectionMsg {
    /// Hover-driven extension fires on every pointer move
    pub fn is_frequent(&self) -> bool {
        matches!(
            self,
            SelectionMsg::ExtendRange { .. } | SelectionMsg::ExtendCellRange(_)
        )
    }

    /// Whether this transition starts over, abandoning whatever the copy
    /// surface currently shows or waits for
    pub fn starts_new_selection(&self) -> bool {
        matches!(
            self,
            SelectionMsg::BeginRange { .. }
                | SelectionMsg::BeginCellRange(_)
                | SelectionMsg::ToggleCtrl { .. }
                | SelectionMsg::Clear
        )
    }
}
