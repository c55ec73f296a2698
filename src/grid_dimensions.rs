use crate::cells::CellCoordinate;
use crate::errors::*;
use error_chain::bail;
use crate::units::{ColumnsCount, EdgesCount, NodesCount, RowsCount};

/// Validated size of a rectangular maze grid.
///
/// Both counts are positive, and both `rows * columns` and the internal wall count fit in a `usize`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GridDimensions {
    rows: RowsCount,
    columns: ColumnsCount,
}

impl GridDimensions {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<GridDimensions> {
        if rows.0 == 0 || columns.0 == 0 {
            bail!(ErrorKind::InvalidDimension(rows.0, columns.0));
        }
        if rows.0.checked_mul(columns.0).is_none() ||
           checked_internal_walls(rows.0, columns.0).is_none() {
            bail!(ErrorKind::ResourceExhausted(rows.0, columns.0));
        }

        Ok(GridDimensions { rows, columns })
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline(always)]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.rows.0 * self.columns.0)
    }

    /// Number of passages in any perfect maze on this grid.
    #[inline(always)]
    pub fn spanning_tree_edges(&self) -> EdgesCount {
        EdgesCount(self.size().0 - 1)
    }

    /// Number of internal walls: every pair of horizontally or vertically adjacent cells.
    pub fn internal_walls(&self) -> EdgesCount {
        let (r, c) = (self.rows.0, self.columns.0);
        EdgesCount(r * (c - 1) + (r - 1) * c)
    }

    #[inline(always)]
    pub fn contains(&self, coord: CellCoordinate) -> bool {
        coord.row < self.rows.0 && coord.column < self.columns.0
    }

    /// The cell in the bottom right corner of the grid.
    pub fn far_corner(&self) -> CellCoordinate {
        CellCoordinate::new(self.rows.0 - 1, self.columns.0 - 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = CellCoordinate> {
        let columns = self.columns.0;
        (0..self.size().0).map(move |index| CellCoordinate::new(index / columns, index % columns))
    }
}

/// `rows * (columns - 1) + (rows - 1) * columns`, or None on overflow.
fn checked_internal_walls(rows: usize, columns: usize) -> Option<usize> {
    let vertical = rows.checked_mul(columns - 1)?;
    let horizontal = (rows - 1).checked_mul(columns)?;
    vertical.checked_add(horizontal)
}
