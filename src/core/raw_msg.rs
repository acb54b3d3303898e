use serde::{Deserialize, Serialize};

use crate::domain::{grid::ColumnDef, selection::CellCoord};

/// What the pointer is over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridTarget {
    /// Row index cell (leftmost, non-data column)
    RowHeader(usize),
    ColumnHeader(usize),
    Cell(CellCoord),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        shift: false,
        ctrl: true,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Press,
    Hover,
}

/// Pointer event reported by the rendering grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridEvent {
    pub target: GridTarget,
    #[serde(default)]
    pub modifiers: Modifiers,
    pub phase: PointerPhase,
}

impl GridEvent {
    pub fn press(target: GridTarget, modifiers: Modifiers) -> Self {
        Self {
            target,
            modifiers,
            phase: PointerPhase::Press,
        }
    }

    pub fn hover(target: GridTarget, modifiers: Modifiers) -> Self {
        Self {
            target,
            modifiers,
            phase: PointerPhase::Hover,
        }
    }
}

/// Raw messages from the rendering grid and the keyboard, before they are
/// interpreted against the current state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawMsg {
    Pointer(GridEvent),
    /// Copy keystroke (ctrl+c)
    CopyShortcut,
    Escape,

    // Grid layout
    DataId(String),
    Columns(Vec<ColumnDef>),
    RowCount(usize),
    DataRefreshed,
}

impl RawMsg {
    /// Pointer hover fires on every mouse move
    pub fn is_frequent(&self) -> bool {
        matches!(
            self,
            RawMsg::Pointer(GridEvent {
                phase: PointerPhase::Hover,
                ..
            })
        )
    }
}
