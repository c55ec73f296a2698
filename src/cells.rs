use std::fmt;

use crate::grid_dimensions::GridDimensions;

/// A cell on the maze grid, addressed by 0-based row and column.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct CellCoordinate {
    pub row: usize,
    pub column: usize,
}

impl CellCoordinate {
    pub fn new(row: usize, column: usize) -> CellCoordinate {
        CellCoordinate { row, column }
    }

    /// Row major index of this cell on a grid with the given dimensions.
    #[inline(always)]
    pub fn row_major_index(&self, dimensions: &GridDimensions) -> usize {
        self.row * dimensions.columns().0 + self.column
    }

    pub fn from_row_major_index(index: usize, dimensions: &GridDimensions) -> CellCoordinate {
        let columns = dimensions.columns().0;
        CellCoordinate::new(index / columns, index % columns)
    }
}

impl fmt::Display for CellCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// The order candidate neighbours are listed in before they are shuffled.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];
}

/// The cell one step away in `direction`.
///
/// Returns None when the neighbour would be off the grid.
pub fn offset_coordinate(coord: CellCoordinate,
                         direction: Direction,
                         dimensions: &GridDimensions)
                         -> Option<CellCoordinate> {
    let (row, column) = (coord.row, coord.column);
    let neighbour = match direction {
        Direction::Up => {
            if row > 0 {
                CellCoordinate::new(row - 1, column)
            } else {
                return None;
            }
        }
        Direction::Right => CellCoordinate::new(row, column + 1),
        Direction::Down => CellCoordinate::new(row + 1, column),
        Direction::Left => {
            if column > 0 {
                CellCoordinate::new(row, column - 1)
            } else {
                return None;
            }
        }
    };

    if dimensions.contains(neighbour) {
        Some(neighbour)
    } else {
        None
    }
}

/// The direction to step from `a` to reach the adjacent cell `b`, if they are adjacent.
pub fn direction_between(a: CellCoordinate, b: CellCoordinate) -> Option<Direction> {
    if a.row == b.row {
        if b.column == a.column + 1 {
            return Some(Direction::Right);
        } else if a.column == b.column + 1 {
            return Some(Direction::Left);
        }
    } else if a.column == b.column {
        if b.row == a.row + 1 {
            return Some(Direction::Down);
        } else if a.row == b.row + 1 {
            return Some(Direction::Up);
        }
    }
    None
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::units::{ColumnsCount, RowsCount};

    fn dims(rows: usize, columns: usize) -> GridDimensions {
        GridDimensions::new(RowsCount(rows), ColumnsCount(columns)).expect("valid dimensions")
    }

    #[test]
    fn offsets_stay_on_the_grid() {
        let d = dims(3, 4);
        let cc = |r, c| CellCoordinate::new(r, c);

        assert_eq!(offset_coordinate(cc(0, 0), Direction::Up, &d), None);
        assert_eq!(offset_coordinate(cc(0, 0), Direction::Left, &d), None);
        assert_eq!(offset_coordinate(cc(0, 0), Direction::Right, &d), Some(cc(0, 1)));
        assert_eq!(offset_coordinate(cc(0, 0), Direction::Down, &d), Some(cc(1, 0)));

        assert_eq!(offset_coordinate(cc(2, 3), Direction::Down, &d), None);
        assert_eq!(offset_coordinate(cc(2, 3), Direction::Right, &d), None);
        assert_eq!(offset_coordinate(cc(2, 3), Direction::Up, &d), Some(cc(1, 3)));
        assert_eq!(offset_coordinate(cc(2, 3), Direction::Left, &d), Some(cc(2, 2)));
    }

    #[test]
    fn row_major_indices() {
        let d = dims(3, 4);
        for index in 0..12 {
            let coord = CellCoordinate::from_row_major_index(index, &d);
            assert_eq!(coord.row_major_index(&d), index);
        }
        assert_eq!(CellCoordinate::from_row_major_index(5, &d), CellCoordinate::new(1, 1));
    }

    #[test]
    fn directions_between_adjacent_cells() {
        let cc = |r, c| CellCoordinate::new(r, c);
        for &dir in Direction::ALL.iter() {
            let d = dims(3, 3);
            let neighbour = offset_coordinate(cc(1, 1), dir, &d).expect("centre has 4 neighbours");
            assert_eq!(direction_between(cc(1, 1), neighbour), Some(dir));
            let back = direction_between(neighbour, cc(1, 1)).expect("adjacent");
            assert_eq!(offset_coordinate(neighbour, back, &d), Some(cc(1, 1)));
        }
        assert_eq!(direction_between(cc(0, 0), cc(1, 1)), None);
        assert_eq!(direction_between(cc(0, 0), cc(0, 0)), None);
        assert_eq!(direction_between(cc(0, 0), cc(0, 2)), None);
    }
}
