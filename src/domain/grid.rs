use serde::{Deserialize, Serialize};

/// Column definition as reported by the rendering grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
}

fn default_visible() -> bool {
    true
}

impl ColumnDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            locked: false,
        }
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Columns in on-screen order: visible only, locked columns pinned to the
/// leading edge, otherwise the grid's order. The row-index column is never
/// part of this list.
pub fn active_columns(columns: &[ColumnDef]) -> Vec<&ColumnDef> {
    let (locked, unlocked): (Vec<&ColumnDef>, Vec<&ColumnDef>) = columns
        .iter()
        .filter(|c| c.visible)
        .partition(|c| c.locked);
    locked.into_iter().chain(unlocked).collect()
}
