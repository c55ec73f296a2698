use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::{IndexType, NodeIndex};
use petgraph::{Graph, Undirected};
use smallvec::SmallVec;

use crate::cells::{self, CellCoordinate, Direction};
use crate::errors::*;
use crate::grid_dimensions::GridDimensions;
use crate::walls::{MazeWalls, WallMatrix};
use error_chain::bail;

pub type CoordinateSmallVec = SmallVec<[CellCoordinate; 4]>;

/// A generated maze: its wall state plus the cell the carving traversal started from.
///
/// Immutable once generated.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Maze {
    dimensions: GridDimensions,
    walls: MazeWalls,
    start: CellCoordinate,
}

impl Maze {
    pub(crate) fn new(dimensions: GridDimensions, walls: MazeWalls, start: CellCoordinate) -> Maze {
        Maze {
            dimensions,
            walls,
            start,
        }
    }

    #[inline(always)]
    pub fn dimensions(&self) -> &GridDimensions {
        &self.dimensions
    }

    #[inline(always)]
    pub fn walls(&self) -> &MazeWalls {
        &self.walls
    }

    /// R x (C-1) open flags between horizontally adjacent cells.
    #[inline(always)]
    pub fn vertical(&self) -> &WallMatrix {
        &self.walls.vertical
    }

    /// (R-1) x C open flags between vertically adjacent cells.
    #[inline(always)]
    pub fn horizontal(&self) -> &WallMatrix {
        &self.walls.horizontal
    }

    /// Where the carving traversal began. Not necessarily where play starts.
    #[inline(always)]
    pub fn start(&self) -> CellCoordinate {
        self.start
    }

    /// Give up the maze for its `(vertical, horizontal)` matrices.
    pub fn into_walls(self) -> (WallMatrix, WallMatrix) {
        (self.walls.vertical, self.walls.horizontal)
    }

    /// Cells reachable in one step from `coord` through a carved passage.
    pub fn links(&self, coord: CellCoordinate) -> Result<CoordinateSmallVec> {
        self.check_coordinate(coord)?;
        Ok(Direction::ALL
               .iter()
               .filter(|&&dir| self.walls.is_open(coord, dir))
               .filter_map(|&dir| cells::offset_coordinate(coord, dir, &self.dimensions))
               .collect())
    }

    /// Are two cells joined directly by a passage? Non adjacent cells never are.
    pub fn is_linked(&self, a: CellCoordinate, b: CellCoordinate) -> bool {
        if !self.dimensions.contains(a) || !self.dimensions.contains(b) {
            return false;
        }
        cells::direction_between(a, b).map_or(false, |dir| self.walls.is_open(a, dir))
    }

    /// Every passage once, as a pair of cells with the first before the second in row major order.
    pub fn iter_links(&self) -> impl Iterator<Item = (CellCoordinate, CellCoordinate)> + '_ {
        let across = self.walls
            .vertical
            .iter()
            .filter(|&(_, _, open)| open)
            .map(|(r, c, _)| (CellCoordinate::new(r.0, c.0), CellCoordinate::new(r.0, c.0 + 1)));
        let down = self.walls
            .horizontal
            .iter()
            .filter(|&(_, _, open)| open)
            .map(|(r, c, _)| (CellCoordinate::new(r.0, c.0), CellCoordinate::new(r.0 + 1, c.0)));
        across.chain(down)
    }

    /// The passages as an undirected graph, node `i` being the cell with row major index `i`.
    pub fn to_graph<GridIndexType: IndexType>(&self) -> Result<Graph<(), (), Undirected, GridIndexType>> {
        let cells_count = self.dimensions.size().0;
        if cells_count > <GridIndexType as IndexType>::max().index() {
            bail!(ErrorKind::ResourceExhausted(self.dimensions.rows().0, self.dimensions.columns().0));
        }

        let edges_count = self.walls.passages_count().0;
        let mut graph = Graph::with_capacity(cells_count, edges_count);
        for _ in 0..cells_count {
            let _ = graph.add_node(());
        }
        for (a, b) in self.iter_links() {
            let a_index = NodeIndex::<GridIndexType>::new(a.row_major_index(&self.dimensions));
            let b_index = NodeIndex::<GridIndexType>::new(b.row_major_index(&self.dimensions));
            let _ = graph.add_edge(a_index, b_index, ());
        }
        Ok(graph)
    }

    /// Is the passage graph a spanning tree of the grid: connected, R*C-1 passages, no cycles.
    pub fn is_perfect(&self) -> bool {
        let graph = match self.to_graph::<u32>() {
            Ok(g) => g,
            Err(_) => return false,
        };
        graph.edge_count() == self.dimensions.spanning_tree_edges().0 &&
        connected_components(&graph) == 1 && !is_cyclic_undirected(&graph)
    }

    fn check_coordinate(&self, coord: CellCoordinate) -> Result<()> {
        if !self.dimensions.contains(coord) {
            bail!(ErrorKind::InvalidCoordinate(coord.row, coord.column));
        }
        Ok(())
    }
}
