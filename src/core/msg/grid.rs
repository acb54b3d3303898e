use serde::{Deserialize, Serialize};

use crate::domain::grid::ColumnDef;

/// Grid layout updates reported by the rendering grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridMsg {
    SetDataId(String),
    SetColumns(Vec<ColumnDef>),
    SetRowCount(usize),
    /// The underlying data was reloaded (edit, filter, sort)
    DataRefreshed,
}
