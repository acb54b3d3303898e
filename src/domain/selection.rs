//! Selection geometry: index ranges, cell coordinates and the pure
//! start/extend/commit transitions that operate on them.

use std::{fmt, ops::RangeInclusive, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use thiserror::Error;

/// Axis a range or ctrl-selection runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum SelectionKind {
    Rows,
    Columns,
}

/// Which selection shape is currently active
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum SelectionMode {
    #[default]
    None,
    RowRange,
    ColumnRange,
    CellRange,
    CtrlRows,
    CtrlCols,
}

/// Inclusive span of 1-based visual row or column positions.
///
/// While a drag is in progress `start` may be greater than `end`;
/// [`commit_range`] always hands back an ascending range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexRange {
    pub start: usize,
    pub end: usize,
}

impl IndexRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn single(index: usize) -> Self {
        Self::new(index, index)
    }

    /// Smallest and largest index, in that order
    pub fn normalized(self) -> Self {
        Self {
            start: self.start.min(self.end),
            end: self.start.max(self.end),
        }
    }

    pub fn is_normalized(&self) -> bool {
        self.start <= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        let n = self.normalized();
        n.start <= index && index <= n.end
    }

    /// Number of covered indices, at least one
    pub fn span(&self) -> usize {
        let n = self.normalized();
        n.end - n.start + 1
    }

    /// Ascending walk over the covered indices
    pub fn indices(&self) -> RangeInclusive<usize> {
        let n = self.normalized();
        n.start..=n.end
    }
}

/// Start a range anchored at `index`
pub fn begin_range(index: usize) -> IndexRange {
    IndexRange::single(index)
}

/// Move the free end of a range; the anchor never moves
pub fn extend_range(current: IndexRange, index: usize) -> IndexRange {
    IndexRange {
        start: current.start,
        end: index,
    }
}

/// Finalize a range so that `start <= end`
pub fn commit_range(current: IndexRange) -> IndexRange {
    current.normalized()
}

/// A grid cell addressed by 1-based visual row and column.
///
/// The rendering grid exchanges cells as `"row|col"` strings; this type
/// parses and prints that form but compares the two axes numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    pub row: usize,
    pub col: usize,
}

impl CellCoord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellCoordParseError {
    #[error("cell key {0:?} is missing the '|' separator")]
    MissingSeparator(String),
    #[error("cell key {key:?} has an invalid {axis} component")]
    InvalidComponent { key: String, axis: &'static str },
}

impl FromStr for CellCoord {
    type Err = CellCoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once('|')
            .ok_or_else(|| CellCoordParseError::MissingSeparator(s.to_string()))?;
        let row = row
            .trim()
            .parse()
            .map_err(|_| CellCoordParseError::InvalidComponent {
                key: s.to_string(),
                axis: "row",
            })?;
        let col = col
            .trim()
            .parse()
            .map_err(|_| CellCoordParseError::InvalidComponent {
                key: s.to_string(),
                axis: "column",
            })?;
        Ok(Self { row, col })
    }
}

/// Rectangle of cells between two corners (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRange {
    pub start: CellCoord,
    pub end: CellCoord,
}

impl CellRange {
    pub fn new(start: CellCoord, end: CellCoord) -> Self {
        Self { start, end }
    }

    /// Top-left / bottom-right form. Rows and columns are min/maxed
    /// independently so `10|2 .. 2|3` becomes `2|2 .. 10|3`.
    pub fn normalized(self) -> Self {
        Self {
            start: CellCoord::new(
                self.start.row.min(self.end.row),
                self.start.col.min(self.end.col),
            ),
            end: CellCoord::new(
                self.start.row.max(self.end.row),
                self.start.col.max(self.end.col),
            ),
        }
    }

    pub fn rows(&self) -> IndexRange {
        IndexRange::new(self.start.row, self.end.row).normalized()
    }

    pub fn cols(&self) -> IndexRange {
        IndexRange::new(self.start.col, self.end.col).normalized()
    }

    pub fn contains(&self, cell: CellCoord) -> bool {
        self.rows().contains(cell.row) && self.cols().contains(cell.col)
    }
}

pub fn begin_cell_range(cell: CellCoord) -> CellRange {
    CellRange::new(cell, cell)
}

pub fn extend_cell_range(current: CellRange, cell: CellCoord) -> CellRange {
    CellRange {
        start: current.start,
        end: cell,
    }
}

pub fn commit_cell_range(current: CellRange) -> CellRange {
    current.normalized()
}

/// Ctrl-click toggle: remove `index` if present (keeping the order of the
/// rest), otherwise append it.
pub fn toggle_ctrl(current: &[usize], index: usize) -> Vec<usize> {
    if current.contains(&index) {
        current.iter().copied().filter(|&i| i != index).collect()
    } else {
        let mut next = current.to_vec();
        next.push(index);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(5, 2)]
    #[case(10, 1)]
    #[case(3, 2)]
    fn test_commit_range_swaps_backward_drag(#[case] start: usize, #[case] end: usize) {
        let committed = commit_range(IndexRange::new(start, end));
        assert_eq!(committed, IndexRange::new(end, start));
    }

    #[test]
    fn test_range_lifecycle() {
        let range = begin_range(4);
        assert_eq!(range, IndexRange::new(4, 4));

        let range = extend_range(range, 2);
        assert_eq!(range, IndexRange::new(4, 2));
        assert!(!range.is_normalized());

        let range = extend_range(range, 7);
        assert_eq!(range, IndexRange::new(4, 7));

        assert_eq!(commit_range(range), IndexRange::new(4, 7));
    }

    #[test]
    fn test_single_index_range() {
        let range = commit_range(extend_range(begin_range(3), 3));
        assert_eq!(range, IndexRange::single(3));
        assert_eq!(range.span(), 1);
        assert_eq!(range.indices().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_index_range_contains_backward() {
        let range = IndexRange::new(6, 2);
        assert!(range.contains(2));
        assert!(range.contains(6));
        assert!(!range.contains(7));
        assert_eq!(range.span(), 5);
    }

    #[rstest]
    #[case("3|3", CellCoord::new(3, 3))]
    #[case("10|2", CellCoord::new(10, 2))]
    #[case(" 4 | 5 ", CellCoord::new(4, 5))]
    fn test_cell_coord_parse(#[case] key: &str, #[case] expected: CellCoord) {
        assert_eq!(key.parse::<CellCoord>(), Ok(expected));
    }

    #[test]
    fn test_cell_coord_parse_errors() {
        assert_eq!(
            "33".parse::<CellCoord>(),
            Err(CellCoordParseError::MissingSeparator("33".to_string()))
        );
        assert!(matches!(
            "a|1".parse::<CellCoord>(),
            Err(CellCoordParseError::InvalidComponent { axis: "row", .. })
        ));
        assert!(matches!(
            "1|".parse::<CellCoord>(),
            Err(CellCoordParseError::InvalidComponent { axis: "column", .. })
        ));
    }

    #[test]
    fn test_cell_coord_display() {
        assert_eq!(CellCoord::new(4, 5).to_string(), "4|5");
    }

    #[test]
    fn test_cell_range_normalizes_each_axis_numerically() {
        // "10|2" sorts before "2|3" as a string, which would be wrong here
        let range = commit_cell_range(CellRange::new(CellCoord::new(10, 2), CellCoord::new(2, 3)));
        assert_eq!(range.start, CellCoord::new(2, 2));
        assert_eq!(range.end, CellCoord::new(10, 3));
        assert_eq!(range.rows(), IndexRange::new(2, 10));
        assert_eq!(range.cols(), IndexRange::new(2, 3));
    }

    #[test]
    fn test_cell_range_anti_diagonal_drag() {
        let range = extend_cell_range(begin_cell_range(CellCoord::new(2, 5)), CellCoord::new(6, 1));
        let committed = commit_cell_range(range);
        assert_eq!(committed.start, CellCoord::new(2, 1));
        assert_eq!(committed.end, CellCoord::new(6, 5));
    }

    #[test]
    fn test_cell_range_forward_drag_unchanged() {
        let range = extend_cell_range(begin_cell_range(CellCoord::new(3, 3)), CellCoord::new(4, 5));
        assert_eq!(commit_cell_range(range), range);
        assert!(range.contains(CellCoord::new(4, 4)));
        assert!(!range.contains(CellCoord::new(5, 4)));
    }

    #[test]
    fn test_toggle_ctrl() {
        let selected = toggle_ctrl(&[], 1);
        assert_eq!(selected, vec![1]);

        let selected = toggle_ctrl(&selected, 2);
        assert_eq!(selected, vec![1, 2]);

        let selected = toggle_ctrl(&selected, 1);
        assert_eq!(selected, vec![2]);
    }

    #[test]
    fn test_toggle_ctrl_preserves_click_order() {
        let selected = [5, 1, 3, 2]
            .iter()
            .fold(Vec::new(), |acc, &i| toggle_ctrl(&acc, i));
        assert_eq!(selected, vec![5, 1, 3, 2]);

        let selected = toggle_ctrl(&selected, 3);
        assert_eq!(selected, vec![5, 1, 2]);
    }
}
