use serde::{Deserialize, Serialize};

pub mod copy;
pub mod grid;
pub mod selection;

use copy::CopyMsg;
use grid::GridMsg;
use selection::SelectionMsg;

/// Domain messages representing application intent.
/// These are processed by the update function and carry no side effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Msg {
    // Selection store transitions (delegated to SelectionState)
    Selection(SelectionMsg),

    // Clipboard builder and copy surface (delegated to CopySurfaceState)
    Copy(CopyMsg),

    // Grid layout (delegated to GridState)
    Grid(GridMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Selection(msg) => msg.is_frequent(),
            Msg::Copy(msg) => msg.is_frequent(),
            Msg::Grid(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::selection::{CellCoord, SelectionKind};

    #[test]
    fn test_msg_frequent_detection() {
        assert!(Msg::Selection(SelectionMsg::ExtendCellRange(CellCoord::new(2, 2))).is_frequent());
        assert!(!Msg::Selection(SelectionMsg::BeginRange {
            kind: SelectionKind::Rows,
            index: 1
        })
        .is_frequent());
        assert!(!Msg::Copy(CopyMsg::Confirm).is_frequent());
        assert!(!Msg::Grid(GridMsg::DataRefreshed).is_frequent());
    }

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::Copy(CopyMsg::Dismiss), Msg::Copy(CopyMsg::Dismiss));
        assert_ne!(Msg::Copy(CopyMsg::Dismiss), Msg::Copy(CopyMsg::Confirm));
    }

    #[test]
    fn test_msg_serialization() {
        let msg = Msg::Grid(GridMsg::SetRowCount(50));
        let serialized = serde_json::to_string(&msg).unwrap();
        let deserialized: Msg = serde_json::from_str(&serialized).unwrap();
        assert_eq!(msg, deserialized);
    }
}
