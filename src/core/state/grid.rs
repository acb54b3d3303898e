use crate::{
    core::{cmd::Cmd, msg::grid::GridMsg},
    domain::{
        grid::{active_columns, ColumnDef},
        selection::{CellCoord, IndexRange, SelectionKind},
    },
};

/// What the selection engine knows about the grid it sits on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridState {
    pub data_id: String,
    pub columns: Vec<ColumnDef>,
    pub row_count: usize,
}

impl GridState {
    pub fn new(data_id: impl Into<String>, columns: Vec<ColumnDef>, row_count: usize) -> Self {
        Self {
            data_id: data_id.into(),
            columns,
            row_count,
        }
    }

    /// Grid-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: GridMsg) -> Vec<Cmd> {
        match msg {
            GridMsg::SetDataId(data_id) => {
                self.data_id = data_id;
                vec![]
            }
            GridMsg::SetColumns(columns) => {
                self.columns = columns;
                vec![]
            }
            GridMsg::SetRowCount(row_count) => {
                self.row_count = row_count;
                vec![]
            }
            GridMsg::DataRefreshed => vec![],
        }
    }

    /// Number of selectable columns (visible, excluding the row index)
    pub fn column_count(&self) -> usize {
        active_columns(&self.columns).len()
    }

    pub fn count(&self, kind: SelectionKind) -> usize {
        match kind {
            SelectionKind::Rows => self.row_count,
            SelectionKind::Columns => self.column_count(),
        }
    }

    /// Pull `index` into `1..=count`; `None` when the axis is empty
    pub fn clamp(&self, kind: SelectionKind, index: usize) -> Option<usize> {
        clamp_to(index, self.count(kind))
    }

    pub fn clamp_cell(&self, cell: CellCoord) -> Option<CellCoord> {
        let row = clamp_to(cell.row, self.row_count)?;
        let col = clamp_to(cell.col, self.column_count())?;
        Some(CellCoord::new(row, col))
    }

    pub fn clamp_range(&self, kind: SelectionKind, range: IndexRange) -> Option<IndexRange> {
        Some(IndexRange::new(
            self.clamp(kind, range.start)?,
            self.clamp(kind, range.end)?,
        ))
    }

    /// Names of every selectable column, locked ones first
    pub fn all_column_names(&self) -> Vec<String> {
        active_columns(&self.columns)
            .into_iter()
            .map(|c| c.name.clone())
            .collect()
    }

    /// Names of the columns covered by a 1-based visual span, ascending
    pub fn column_names(&self, span: IndexRange) -> Vec<String> {
        let columns = active_columns(&self.columns);
        span.indices()
            .filter_map(|i| i.checked_sub(1).and_then(|i| columns.get(i)))
            .map(|c| c.name.clone())
            .collect()
    }

    /// Names of the columns at the given 1-based visual positions, in the
    /// order given
    pub fn column_names_at(&self, indices: &[usize]) -> Vec<String> {
        let columns = active_columns(&self.columns);
        indices
            .iter()
            .filter_map(|&i| i.checked_sub(1).and_then(|i| columns.get(i)))
            .map(|c| c.name.clone())
            .collect()
    }
}

fn clamp_to(index: usize, count: usize) -> Option<usize> {
    if count == 0 {
        None
    } else {
        Some(index.clamp(1, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn grid() -> GridState {
        GridState::new(
            "1",
            vec![
                ColumnDef::new("col1"),
                ColumnDef::new("col2"),
                ColumnDef::new("col3").hidden(),
                ColumnDef::new("col4"),
                ColumnDef::new("key").locked(),
            ],
            50,
        )
    }

    #[rstest]
    fn test_column_count_excludes_hidden(grid: GridState) {
        assert_eq!(grid.column_count(), 4);
        assert_eq!(grid.count(SelectionKind::Rows), 50);
        assert_eq!(grid.count(SelectionKind::Columns), 4);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(25, 25)]
    #[case(51, 50)]
    #[case(usize::MAX, 50)]
    fn test_clamp_rows(grid: GridState, #[case] index: usize, #[case] expected: usize) {
        assert_eq!(grid.clamp(SelectionKind::Rows, index), Some(expected));
    }

    #[test]
    fn test_clamp_empty_axis() {
        let grid = GridState::default();
        assert_eq!(grid.clamp(SelectionKind::Rows, 1), None);
        assert_eq!(grid.clamp_cell(CellCoord::new(1, 1)), None);
    }

    #[rstest]
    fn test_clamp_cell(grid: GridState) {
        assert_eq!(
            grid.clamp_cell(CellCoord::new(99, 9)),
            Some(CellCoord::new(50, 4))
        );
    }

    #[rstest]
    fn test_locked_columns_are_enumerated_first(grid: GridState) {
        assert_eq!(
            grid.all_column_names(),
            vec!["key", "col1", "col2", "col4"]
        );
        assert_eq!(
            grid.column_names(IndexRange::new(1, 2)),
            vec!["key", "col1"]
        );
    }

    #[rstest]
    fn test_column_names_backward_span(grid: GridState) {
        assert_eq!(
            grid.column_names(IndexRange::new(4, 3)),
            vec!["col2", "col4"]
        );
    }

    #[rstest]
    fn test_column_names_at_keeps_order(grid: GridState) {
        assert_eq!(grid.column_names_at(&[4, 2, 9, 0]), vec!["col4", "col1"]);
    }

    #[rstest]
    fn test_update(mut grid: GridState) {
        let cmds = grid.update(GridMsg::SetRowCount(10));
        assert!(cmds.is_empty());
        assert_eq!(grid.row_count, 10);

        grid.update(GridMsg::SetDataId("9".to_string()));
        assert_eq!(grid.data_id, "9");

        grid.update(GridMsg::SetColumns(vec![ColumnDef::new("x")]));
        assert_eq!(grid.all_column_names(), vec!["x"]);
    }
}
