use smallvec::SmallVec;

use crate::cells::CellCoordinate;
use crate::errors::*;
use crate::maze::Maze;
use crate::utils::{self, FnvHashMap};
use error_chain::bail;

/// Step counts from one start cell to every cell reachable from it.
#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: CellCoordinate,
    distances: FnvHashMap<CellCoordinate, usize>,
    max_distance: usize,
}

impl Distances {
    /// Flood fill the maze passages outwards from `start_coordinate`.
    pub fn new(maze: &Maze, start_coordinate: CellCoordinate) -> Result<Distances> {
        if !maze.dimensions().contains(start_coordinate) {
            bail!(ErrorKind::InvalidCoordinate(start_coordinate.row, start_coordinate.column));
        }

        let mut max = 0;
        let mut distances = utils::fnv_hashmap(maze.dimensions().size().0);
        distances.insert(start_coordinate, 0);

        // Every step costs one, so the first time a cell is reached is by its shortest route and the
        // distances map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell_coord in &frontier {
                let distance_to_cell = distances[cell_coord];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                for link_coordinate in maze.links(*cell_coord)?.iter() {
                    if !distances.contains_key(link_coordinate) {
                        distances.insert(*link_coordinate, distance_to_cell + 1);
                        new_frontier.push(*link_coordinate);
                    }
                }
            }
            frontier = new_frontier;
        }

        Ok(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> CellCoordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> usize {
        self.max_distance
    }

    /// None when `coord` is unreachable or off the grid.
    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: CellCoordinate) -> Option<usize> {
        self.distances.get(&coord).cloned()
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// The cells at the maximum distance, in row major order.
    pub fn furthest_points_on_grid(&self) -> SmallVec<[CellCoordinate; 8]> {
        let mut furthest = self.distances
            .iter()
            .filter(|&(_, &distance)| distance == self.max_distance)
            .map(|(&coord, _)| coord)
            .collect::<SmallVec<[CellCoordinate; 8]>>();
        furthest.sort();
        furthest
    }
}

/// Walk back from `end_point` to the start, always stepping to a linked cell one closer.
///
/// Returns the cells from start to end inclusive, or None if `end_point` is not reachable.
pub fn shortest_path(maze: &Maze,
                     distances_from_start: &Distances,
                     end_point: CellCoordinate)
                     -> Option<Vec<CellCoordinate>> {

    let mut current_distance = distances_from_start.distance_from_start_to(end_point)?;
    let mut path = vec![end_point];
    let mut current_coord = end_point;

    while current_distance > 0 {
        let closer = maze.links(current_coord)
            .ok()?
            .iter()
            .cloned()
            .find(|&linked| {
                distances_from_start.distance_from_start_to(linked) == Some(current_distance - 1)
            })?;

        current_coord = closer;
        current_distance -= 1;
        path.push(current_coord);
    }

    path.reverse();
    Some(path)
}

/// The route through the maze from the play start (0, 0) to the goal in the far corner.
pub fn solution(maze: &Maze) -> Option<Vec<CellCoordinate>> {
    let distances = Distances::new(maze, CellCoordinate::new(0, 0)).ok()?;
    shortest_path(maze, &distances, maze.dimensions().far_corner())
}

/// Works only as long as we are looking at a perfect maze, otherwise you get back some arbitrary path.
pub fn longest_path(maze: &Maze) -> Option<Vec<CellCoordinate>> {
    let first_distances = Distances::new(maze, CellCoordinate::new(0, 0)).ok()?;

    // The start of the longest path is just the point furthest away from an arbitrary initial point
    let long_path_start_coordinate = *first_distances.furthest_points_on_grid().first()?;

    let distances_from_start = Distances::new(maze, long_path_start_coordinate).ok()?;
    let end_point = *distances_from_start.furthest_points_on_grid().first()?;

    shortest_path(maze, &distances_from_start, end_point)
}
