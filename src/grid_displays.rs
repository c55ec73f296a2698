use std::fmt;

use crate::cells::{CellCoordinate, Direction};
use crate::maze::Maze;
use crate::pathing::Distances;
use crate::utils::{self, FnvHashSet};

pub trait GridDisplay {
    /// Render the contents of a grid cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: CellCoordinate) -> String {
        String::from("   ")
    }
}

impl GridDisplay for Distances {
    fn render_cell_body(&self, coord: CellCoordinate) -> String {
        if let Some(d) = self.distance_from_start_to(coord) {
            // centre align, padding 3, lowercase hexadecimal
            format!("{:^3x}", d)
        } else {
            String::from("   ")
        }
    }
}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<CellCoordinate>,
}
impl PathDisplay {
    pub fn new(path: &[CellCoordinate]) -> Self {
        let mut on_path_coordinates = utils::fnv_hashset(path.len());
        on_path_coordinates.extend(path.iter().cloned());
        PathDisplay { on_path_coordinates }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: CellCoordinate) -> String {
        if self.on_path_coordinates.contains(&coord) {
            String::from(" . ")
        } else {
            String::from("   ")
        }
    }
}

/// Marks where play starts ('S') and where the goal is ('E').
#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start: CellCoordinate,
    end: CellCoordinate,
}
impl StartEndPointsDisplay {
    pub fn new(start: CellCoordinate, end: CellCoordinate) -> StartEndPointsDisplay {
        StartEndPointsDisplay { start, end }
    }

    /// Ball start at (0, 0), goal in the far corner.
    pub fn for_play(maze: &Maze) -> StartEndPointsDisplay {
        StartEndPointsDisplay::new(CellCoordinate::new(0, 0), maze.dimensions().far_corner())
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: CellCoordinate) -> String {
        if coord == self.start {
            String::from(" S ")
        } else if coord == self.end {
            String::from(" E ")
        } else {
            String::from("   ")
        }
    }
}

/// A maze drawn with box drawing characters, cell bodies filled by an optional `GridDisplay`.
pub struct MazeDisplay<'a> {
    maze: &'a Maze,
    cell_display: Option<&'a dyn GridDisplay>,
}

impl<'a> MazeDisplay<'a> {
    pub fn new(maze: &'a Maze) -> MazeDisplay<'a> {
        MazeDisplay {
            maze,
            cell_display: None,
        }
    }

    pub fn with_cells(maze: &'a Maze, cell_display: &'a dyn GridDisplay) -> MazeDisplay<'a> {
        MazeDisplay {
            maze,
            cell_display: Some(cell_display),
        }
    }
}

impl<'a> fmt::Display for MazeDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {

        const WALL_L: &str = "╴";
        const WALL_R: &str = "╶";
        const WALL_U: &str = "╵";
        const WALL_D: &str = "╷";
        const WALL_LR_3: &str = "───";
        const WALL_LR: &str = "─";
        const WALL_UD: &str = "│";
        const WALL_LD: &str = "┐";
        const WALL_RU: &str = "└";
        const WALL_LU: &str = "┘";
        const WALL_RD: &str = "┌";
        const WALL_LRU: &str = "┴";
        const WALL_LRD: &str = "┬";
        const WALL_LRUD: &str = "┼";
        const WALL_RUD: &str = "├";
        const WALL_LUD: &str = "┤";

        let walls = self.maze.walls();
        let columns_count = self.maze.dimensions().columns().0;
        let rows_count = self.maze.dimensions().rows().0;
        let open = |row, column, direction| walls.is_open(CellCoordinate::new(row, column), direction);

        // Start by special case rendering the text for the north most boundary
        let mut output = String::from(WALL_RD);
        for column in 0..columns_count {
            output.push_str(WALL_LR_3);
            if open(0, column, Direction::Right) {
                output.push_str(WALL_LR);
            } else if column == columns_count - 1 {
                output.push_str(WALL_LD);
            } else {
                output.push_str(WALL_LRD);
            }
        }
        output.push('\n');

        for row in 0..rows_count {

            let is_last_row = row == rows_count - 1;

            // The top section of each cell is the bottom section of the cell above, so a row only
            // renders its body, east boundary and south boundary.
            let mut row_middle_section_render = String::from(WALL_UD);
            let mut row_bottom_section_render = String::new();

            for column in 0..columns_count {
                let is_first_column = column == 0;
                let is_last_column = column == columns_count - 1;
                let east_open = open(row, column, Direction::Right);
                let south_open = open(row, column, Direction::Down);

                let body = match self.cell_display {
                    Some(display) => display.render_cell_body(CellCoordinate::new(row, column)),
                    None => String::from("   "),
                };
                row_middle_section_render.push_str(&body);
                row_middle_section_render.push_str(if east_open { " " } else { WALL_UD });

                if is_first_column {
                    row_bottom_section_render.push_str(if is_last_row {
                        WALL_RU
                    } else if south_open {
                        WALL_UD
                    } else {
                        WALL_RUD
                    });
                }
                row_bottom_section_render.push_str(if south_open { "   " } else { WALL_LR_3 });

                let corner = match (is_last_row, is_last_column) {
                    (true, true) => WALL_LU,
                    (true, false) => {
                        if east_open {
                            WALL_LR
                        } else {
                            WALL_LRU
                        }
                    }
                    (false, true) => {
                        if south_open {
                            WALL_UD
                        } else {
                            WALL_LUD
                        }
                    }
                    (false, false) => {
                        let access_se_from_east = open(row, column + 1, Direction::Down);
                        let access_se_from_south = open(row + 1, column, Direction::Right);
                        let show_right_section = !access_se_from_east;
                        let show_down_section = !access_se_from_south;
                        let show_up_section = !east_open;
                        let show_left_section = !south_open;

                        match (show_left_section,
                               show_right_section,
                               show_up_section,
                               show_down_section) {
                            (true, true, true, true) => WALL_LRUD,
                            (true, true, true, false) => WALL_LRU,
                            (true, true, false, true) => WALL_LRD,
                            (true, false, true, true) => WALL_LUD,
                            (false, true, true, true) => WALL_RUD,
                            (true, true, false, false) => WALL_LR,
                            (false, false, true, true) => WALL_UD,
                            (false, true, true, false) => WALL_RU,
                            (true, false, false, true) => WALL_LD,
                            (true, false, true, false) => WALL_LU,
                            (false, true, false, true) => WALL_RD,
                            (true, false, false, false) => WALL_L,
                            (false, true, false, false) => WALL_R,
                            (false, false, true, false) => WALL_U,
                            (false, false, false, true) => WALL_D,
                            _ => " ",
                        }
                    }
                };

                row_bottom_section_render.push_str(corner);
            }

            output.push_str(&row_middle_section_render);
            output.push('\n');
            output.push_str(&row_bottom_section_render);
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", MazeDisplay::new(self))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::generators;
    use crate::grid_dimensions::GridDimensions;
    use crate::pathing;
    use crate::random::{RngSource, SequenceSource};
    use crate::units::{ColumnsCount, RowsCount};

    fn maze(rows: usize, columns: usize, sequence: Vec<usize>) -> Maze {
        let dimensions = GridDimensions::new(RowsCount(rows), ColumnsCount(columns)).unwrap();
        generators::recursive_backtracker(&dimensions, &mut SequenceSource::new(sequence)).unwrap()
    }

    fn hooked_two_by_two() -> Maze {
        maze(2, 2, vec![0, 0, 3, 0, 0, 3, 0, 0, 3, 0, 0, 3, 0, 0])
    }

    #[test]
    fn single_cell() {
        assert_eq!(maze(1, 1, vec![0]).to_string(), "┌───┐\n│   │\n└───┘\n");
    }

    #[test]
    fn corridor() {
        assert_eq!(maze(1, 2, vec![0]).to_string(),
                   "┌───────┐\n│       │\n└───────┘\n");
    }

    #[test]
    fn hook_with_solution_path() {
        let m = hooked_two_by_two();
        let path = pathing::solution(&m).unwrap();
        let path_display = PathDisplay::new(&path);
        let expected = "┌───────┐\n\
                        │ .   . │\n\
                        ├───╴   │\n\
                        │     . │\n\
                        └───────┘\n";
        assert_eq!(MazeDisplay::with_cells(&m, &path_display).to_string(), expected);
    }

    #[test]
    fn hook_with_start_and_end() {
        let m = hooked_two_by_two();
        let markers = StartEndPointsDisplay::for_play(&m);
        let expected = "┌───────┐\n\
                        │ S     │\n\
                        ├───╴   │\n\
                        │     E │\n\
                        └───────┘\n";
        assert_eq!(MazeDisplay::with_cells(&m, &markers).to_string(), expected);
    }

    #[test]
    fn hook_with_distances() {
        let m = hooked_two_by_two();
        let distances = Distances::new(&m, CellCoordinate::new(0, 0)).unwrap();
        let rendered = MazeDisplay::with_cells(&m, &distances).to_string();
        assert_eq!(rendered.lines().nth(1), Some("│ 0   1 │"));
        assert_eq!(rendered.lines().nth(3), Some("│ 3   2 │"));
    }

    #[test]
    fn every_row_has_the_same_width() {
        let dimensions = GridDimensions::new(RowsCount(7), ColumnsCount(9)).unwrap();
        let m = generators::recursive_backtracker(&dimensions, &mut RngSource::seeded(4)).unwrap();
        let rendered = m.to_string();
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 1 + 2 * 7);
        assert!(lines.iter().all(|line| line.chars().count() == 1 + 4 * 9));
    }
}
