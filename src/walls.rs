use std::fmt;

use crate::cells::{CellCoordinate, Direction};
use crate::errors::*;
use crate::grid_dimensions::GridDimensions;
use crate::units::{ColumnIndex, ColumnsCount, EdgesCount, RowIndex, RowsCount};
use error_chain::bail;

/// Row major matrix of wall states, `true` meaning the wall has been carved open.
///
/// Either dimension may be 0, e.g. the horizontal walls of a single row maze.
#[derive(Clone, Eq, PartialEq)]
pub struct WallMatrix {
    rows: RowsCount,
    columns: ColumnsCount,
    open: Vec<bool>,
}

impl WallMatrix {
    /// A matrix with every wall closed.
    pub fn closed(rows: RowsCount, columns: ColumnsCount) -> WallMatrix {
        WallMatrix {
            rows,
            columns,
            open: vec![false; rows.0 * columns.0],
        }
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Is the wall at (row, column) open? Out of range indices are an error.
    pub fn get(&self, row: RowIndex, column: ColumnIndex) -> Result<bool> {
        self.offset(row, column).map(|offset| self.open[offset])
    }

    pub(crate) fn open_at(&mut self, row: RowIndex, column: ColumnIndex) -> Result<()> {
        let offset = self.offset(row, column)?;
        self.open[offset] = true;
        Ok(())
    }

    /// How many walls have been carved open.
    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|&&open| open).count()
    }

    /// All entries as `(row, column, open)` in row major order.
    pub fn iter(&self) -> impl Iterator<Item = (RowIndex, ColumnIndex, bool)> + '_ {
        let columns = self.columns.0;
        self.open
            .iter()
            .enumerate()
            .map(move |(offset, &open)| (RowIndex(offset / columns), ColumnIndex(offset % columns), open))
    }

    /// Nested vectors, outer index is the row.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows.0)
            .map(|row| self.open[row * self.columns.0..(row + 1) * self.columns.0].to_vec())
            .collect()
    }

    fn offset(&self, row: RowIndex, column: ColumnIndex) -> Result<usize> {
        if row.0 >= self.rows.0 || column.0 >= self.columns.0 {
            bail!(ErrorKind::WallIndexOutOfBounds(row.0, column.0, self.rows.0, self.columns.0));
        }
        Ok(row.0 * self.columns.0 + column.0)
    }
}

impl fmt::Debug for WallMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "WallMatrix {}x{} {:?}", self.rows.0, self.columns.0, self.to_rows())
    }
}

/// The two wall matrices of a rectangular maze.
///
/// `vertical` is R x (C-1): entry (r, c) separates cell (r, c) from (r, c+1).
/// `horizontal` is (R-1) x C: entry (r, c) separates cell (r, c) from (r+1, c).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MazeWalls {
    pub vertical: WallMatrix,
    pub horizontal: WallMatrix,
}

/// Which matrix, and where in it, a wall lives.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WallPosition {
    Vertical(RowIndex, ColumnIndex),
    Horizontal(RowIndex, ColumnIndex),
}

impl MazeWalls {
    pub fn closed(dimensions: &GridDimensions) -> MazeWalls {
        let (rows, columns) = (dimensions.rows(), dimensions.columns());
        MazeWalls {
            vertical: WallMatrix::closed(rows, ColumnsCount(columns.0 - 1)),
            horizontal: WallMatrix::closed(RowsCount(rows.0 - 1), columns),
        }
    }

    /// Total open walls across both matrices.
    pub fn passages_count(&self) -> EdgesCount {
        EdgesCount(self.vertical.open_count() + self.horizontal.open_count())
    }

    /// Locate the wall crossed when stepping from `coord` in `direction`.
    ///
    /// Stepping right from column c crosses `vertical[row][c]`, left crosses `vertical[row][c-1]`,
    /// down crosses `horizontal[row][col]` and up crosses `horizontal[row-1][col]`.
    pub fn wall_position(coord: CellCoordinate, direction: Direction) -> Result<WallPosition> {
        let (row, column) = (coord.row, coord.column);
        let position = match direction {
            Direction::Right => WallPosition::Vertical(RowIndex(row), ColumnIndex(column)),
            Direction::Down => WallPosition::Horizontal(RowIndex(row), ColumnIndex(column)),
            Direction::Left => {
                if column == 0 {
                    bail!(ErrorKind::InvalidCoordinate(row, column));
                }
                WallPosition::Vertical(RowIndex(row), ColumnIndex(column - 1))
            }
            Direction::Up => {
                if row == 0 {
                    bail!(ErrorKind::InvalidCoordinate(row, column));
                }
                WallPosition::Horizontal(RowIndex(row - 1), ColumnIndex(column))
            }
        };
        Ok(position)
    }

    /// Remove the wall between `coord` and its neighbour in `direction`.
    pub fn carve(&mut self, coord: CellCoordinate, direction: Direction) -> Result<()> {
        match MazeWalls::wall_position(coord, direction)? {
            WallPosition::Vertical(r, c) => self.vertical.open_at(r, c),
            WallPosition::Horizontal(r, c) => self.horizontal.open_at(r, c),
        }
    }

    /// Is there a passage from `coord` to its neighbour in `direction`?
    ///
    /// Walls on the outer boundary of the grid are always closed.
    pub fn is_open(&self, coord: CellCoordinate, direction: Direction) -> bool {
        match MazeWalls::wall_position(coord, direction) {
            Ok(WallPosition::Vertical(r, c)) => self.vertical.get(r, c).unwrap_or(false),
            Ok(WallPosition::Horizontal(r, c)) => self.horizontal.get(r, c).unwrap_or(false),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn dims(rows: usize, columns: usize) -> GridDimensions {
        GridDimensions::new(RowsCount(rows), ColumnsCount(columns)).unwrap()
    }

    #[test]
    fn shapes() {
        let walls = MazeWalls::closed(&dims(3, 5));
        assert_eq!((walls.vertical.rows(), walls.vertical.columns()),
                   (RowsCount(3), ColumnsCount(4)));
        assert_eq!((walls.horizontal.rows(), walls.horizontal.columns()),
                   (RowsCount(2), ColumnsCount(5)));
        assert_eq!(walls.passages_count(), EdgesCount(0));
    }

    #[test]
    fn single_row_has_no_horizontal_walls() {
        let walls = MazeWalls::closed(&dims(1, 5));
        assert!(walls.horizontal.is_empty());
        assert_eq!(walls.horizontal.to_rows(), Vec::<Vec<bool>>::new());
        assert_eq!(walls.vertical.to_rows(), vec![vec![false; 4]]);
    }

    #[test]
    fn out_of_range_access_fails() {
        let walls = MazeWalls::closed(&dims(2, 3));
        assert!(walls.vertical.get(RowIndex(1), ColumnIndex(1)).is_ok());
        match walls.vertical.get(RowIndex(1), ColumnIndex(2)) {
            Err(Error(ErrorKind::WallIndexOutOfBounds(1, 2, 2, 2), _)) => {}
            other => panic!("expected WallIndexOutOfBounds, got {:?}", other),
        }
        match walls.horizontal.get(RowIndex(1), ColumnIndex(0)) {
            Err(Error(ErrorKind::WallIndexOutOfBounds(1, 0, 1, 3), _)) => {}
            other => panic!("expected WallIndexOutOfBounds, got {:?}", other),
        }
    }

    #[test]
    fn carving_picks_the_shared_wall() {
        let mut walls = MazeWalls::closed(&dims(3, 3));
        let centre = CellCoordinate::new(1, 1);

        walls.carve(centre, Direction::Right).unwrap();
        assert_eq!(walls.vertical.get(RowIndex(1), ColumnIndex(1)).unwrap(), true);
        walls.carve(centre, Direction::Left).unwrap();
        assert_eq!(walls.vertical.get(RowIndex(1), ColumnIndex(0)).unwrap(), true);
        walls.carve(centre, Direction::Down).unwrap();
        assert_eq!(walls.horizontal.get(RowIndex(1), ColumnIndex(1)).unwrap(), true);
        walls.carve(centre, Direction::Up).unwrap();
        assert_eq!(walls.horizontal.get(RowIndex(0), ColumnIndex(1)).unwrap(), true);

        assert_eq!(walls.passages_count(), EdgesCount(4));
        for &dir in Direction::ALL.iter() {
            assert!(walls.is_open(centre, dir));
        }
        assert!(walls.is_open(CellCoordinate::new(0, 1), Direction::Down));
        assert!(!walls.is_open(CellCoordinate::new(0, 0), Direction::Right));
    }

    #[test]
    fn boundary_walls_cannot_be_carved() {
        let mut walls = MazeWalls::closed(&dims(2, 2));
        assert!(walls.carve(CellCoordinate::new(0, 0), Direction::Up).is_err());
        assert!(walls.carve(CellCoordinate::new(0, 0), Direction::Left).is_err());
        assert!(walls.carve(CellCoordinate::new(0, 1), Direction::Right).is_err());
        assert!(walls.carve(CellCoordinate::new(1, 0), Direction::Down).is_err());
        assert!(!walls.is_open(CellCoordinate::new(1, 1), Direction::Down));
        assert_eq!(walls.passages_count(), EdgesCount(0));
    }

    #[test]
    fn iter_is_row_major() {
        let mut walls = MazeWalls::closed(&dims(2, 3));
        walls.carve(CellCoordinate::new(1, 1), Direction::Right).unwrap();
        let entries = walls.vertical.iter().collect::<Vec<_>>();
        assert_eq!(entries,
                   vec![(RowIndex(0), ColumnIndex(0), false),
                        (RowIndex(0), ColumnIndex(1), false),
                        (RowIndex(1), ColumnIndex(0), false),
                        (RowIndex(1), ColumnIndex(1), true)]);
    }
}
