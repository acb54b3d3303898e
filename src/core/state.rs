pub mod copy;
pub mod grid;
pub mod selection;

use crate::{domain::grid::ColumnDef, infrastructure::config::Config};

pub use copy::CopySurfaceState;
pub use grid::GridState;
pub use selection::{ActiveSelection, SelectionState};

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub grid: GridState,
    pub selection: SelectionState,
    pub copy: CopySurfaceState,
}

impl AppState {
    /// Initialize AppState for a dataset shown in the grid
    pub fn new(data_id: impl Into<String>, columns: Vec<ColumnDef>, row_count: usize) -> Self {
        Self {
            grid: GridState::new(data_id, columns, row_count),
            ..Default::default()
        }
    }

    /// Initialize AppState with the copy defaults from `config`
    pub fn new_with_config(
        data_id: impl Into<String>,
        columns: Vec<ColumnDef>,
        row_count: usize,
        config: &Config,
    ) -> Self {
        Self {
            grid: GridState::new(data_id, columns, row_count),
            copy: CopySurfaceState::new(!config.include_headers),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::selection::SelectionMode;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert_eq!(state.selection.mode(), SelectionMode::None);
        assert!(!state.copy.is_visible());
        assert_eq!(state.grid.row_count, 0);
    }

    #[test]
    fn test_app_state_new() {
        let state = AppState::new("1", vec![ColumnDef::new("a")], 10);

        assert_eq!(state.grid.data_id, "1");
        assert_eq!(state.grid.column_count(), 1);
        assert!(!state.copy.strip_header);
    }

    #[test]
    fn test_app_state_new_with_config() {
        let config = Config {
            include_headers: false,
            ..Default::default()
        };
        let state = AppState::new_with_config("1", vec![], 0, &config);

        assert!(state.copy.strip_header);
    }
}
