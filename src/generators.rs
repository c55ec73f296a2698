use bit_set::BitSet;
use log::{debug, trace};

use crate::cells::{self, CellCoordinate, Direction};
use crate::errors::*;
use crate::grid_dimensions::GridDimensions;
use crate::maze::Maze;
use crate::random::{self, RandomSource};
use crate::units::{ColumnsCount, RowsCount};
use crate::walls::{MazeWalls, WallMatrix};

/// Generate a perfect maze, returning only its `(vertical, horizontal)` open wall matrices.
///
/// `vertical` is rows x (columns - 1) and `horizontal` is (rows - 1) x columns.
pub fn generate<S>(rows: usize, columns: usize, rng: &mut S) -> Result<(WallMatrix, WallMatrix)>
    where S: RandomSource + ?Sized
{
    let dimensions = GridDimensions::new(RowsCount(rows), ColumnsCount(columns))?;
    recursive_backtracker(&dimensions, rng).map(Maze::into_walls)
}

/// Apply the recursive backtracker maze generation algorithm to a grid.
///
/// Starting from a random cell it does a depth first walk, visiting the neighbours of each cell in a
/// random order and carving a passage only when stepping into a cell that has not been visited yet.
/// Every cell is visited once and is entered through exactly one carved wall (apart from the start),
/// so the passages form a spanning tree of the grid: a perfect maze.
///
/// The walk keeps its own stack rather than recursing, so grid size is not bounded by the call
/// stack. Random values are drawn in the same order a recursive walk would draw them: two draws for
/// the start row and column, then three shuffle draws each time a cell is first entered.
pub fn recursive_backtracker<S>(dimensions: &GridDimensions, rng: &mut S) -> Result<Maze>
    where S: RandomSource + ?Sized
{
    let start_row = random::draw_below(rng, dimensions.rows().0)?;
    let start_column = random::draw_below(rng, dimensions.columns().0)?;
    let start = CellCoordinate::new(start_row, start_column);

    debug!("carving {}x{} maze from {}", dimensions.rows().0, dimensions.columns().0, start);

    let walls = Carver::new(*dimensions, rng).carve_from(start)?;

    debug!("carved {} passages", walls.passages_count().0);

    Ok(Maze::new(*dimensions, walls, start))
}

/// The neighbours of one cell still to be tried, in shuffled order.
struct Frame {
    cell: CellCoordinate,
    candidates: [Direction; 4],
    next: usize,
}

/// Scratch state owned by a single generation call.
struct Carver<'a, S: RandomSource + ?Sized> {
    dimensions: GridDimensions,
    visited: BitSet,
    walls: MazeWalls,
    rng: &'a mut S,
}

impl<'a, S: RandomSource + ?Sized> Carver<'a, S> {
    fn new(dimensions: GridDimensions, rng: &'a mut S) -> Carver<'a, S> {
        Carver {
            dimensions,
            visited: BitSet::with_capacity(dimensions.size().0),
            walls: MazeWalls::closed(&dimensions),
            rng,
        }
    }

    fn carve_from(mut self, start: CellCoordinate) -> Result<MazeWalls> {
        let mut stack = Vec::new();
        if let Some(frame) = self.enter(start)? {
            stack.push(frame);
        }

        while let Some(frame) = stack.last_mut() {
            if frame.next == frame.candidates.len() {
                // Every neighbour tried, backtrack
                stack.pop();
                continue;
            }
            let direction = frame.candidates[frame.next];
            frame.next += 1;
            let cell = frame.cell;

            let neighbour = match cells::offset_coordinate(cell, direction, &self.dimensions) {
                Some(coord) => coord,
                None => continue,
            };
            if self.is_visited(neighbour) {
                continue;
            }

            self.walls.carve(cell, direction)?;
            trace!("carved {:?} from {} to {}", direction, cell, neighbour);

            if let Some(next_frame) = self.enter(neighbour)? {
                stack.push(next_frame);
            }
        }

        Ok(self.walls)
    }

    /// Mark a cell visited and shuffle its neighbours. None if it was already visited.
    fn enter(&mut self, cell: CellCoordinate) -> Result<Option<Frame>> {
        let index = cell.row_major_index(&self.dimensions);
        if !self.visited.insert(index) {
            return Ok(None);
        }

        let mut candidates = Direction::ALL;
        random::shuffle(&mut candidates[..], &mut *self.rng)?;

        Ok(Some(Frame {
            cell,
            candidates,
            next: 0,
        }))
    }

    #[inline(always)]
    fn is_visited(&self, cell: CellCoordinate) -> bool {
        self.visited.contains(cell.row_major_index(&self.dimensions))
    }
}
