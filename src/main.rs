use docopt::Docopt;
use log::info;
use rand::Rng;
use serde_derive::Deserialize;
use mazes::{
    generators,
    grid_dimensions::GridDimensions,
    grid_displays::{GridDisplay, MazeDisplay, PathDisplay, StartEndPointsDisplay},
    layout::WallLayoutBuilder,
    maze::Maze,
    pathing,
    random::RngSource,
    renderers,
    units,
};
use std::{
    io,
    io::prelude::*,
    fs::File,
    path::Path,
};

const USAGE: &str = "Mazes

Usage:
    mazes_driver -h | --help
    mazes_driver [--rows=<r>] [--columns=<c>] [--seed=<s>] [--text-out=<path>] [--no-text] [--show-path] [--mark-start-end] [--image-out=<path>] [--width=<w>] [--height=<h>] [--save-edges=<path>]

Options:
    -h --help              Show this screen.
    --rows=<r>             Number of cell rows in the maze [default: 12].
    --columns=<c>          Number of cell columns in the maze [default: 30].
    --seed=<s>             Seed for the random number generator. The same seed always gives the same maze.
    --text-out=<path>      Output file path for a textual rendering of the maze instead of standard output.
    --no-text              Do not render the maze as text.
    --show-path            Show the path from the top left cell to the goal in the bottom right cell.
    --mark-start-end       Draw an 'S' (start) and 'E' (goal) in the textual rendering.
    --image-out=<path>     Output file path for an image rendering of the maze wall layout. Always PNG format.
    --width=<w>            Width in pixels of the wall layout canvas [default: 1200].
    --height=<h>           Height in pixels of the wall layout canvas [default: 480].
    --save-edges=<path>    Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based row major vertex indices.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_rows: usize,
    flag_columns: usize,
    flag_seed: Option<u64>,
    flag_text_out: String,
    flag_no_text: bool,
    flag_show_path: bool,
    flag_mark_start_end: bool,
    flag_image_out: String,
    flag_width: f64,
    flag_height: f64,
    flag_save_edges: String,
}

// The binary's own errors, wrapping the library errors via `links`.
mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::mazes::errors::Error, ::mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();

    let args: MazeArgs = match Docopt::new(USAGE).and_then(|d| d.deserialize()) {
        Ok(args) => args,
        Err(e) if e.fatal() => return Err(e.into()),
        Err(e) => e.exit(),
    };

    let dimensions = GridDimensions::new(units::RowsCount(args.flag_rows),
                                         units::ColumnsCount(args.flag_columns))?;

    let seed = args.flag_seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("generating a {}x{} maze with seed {}", args.flag_rows, args.flag_columns, seed);

    let maze = generators::recursive_backtracker(&dimensions, &mut RngSource::seeded(seed))?;
    info!("maze carved from start cell {}", maze.start());

    let path = if args.flag_show_path {
        pathing::solution(&maze)
    } else {
        None
    };

    if !args.flag_no_text {
        let text = render_text(&maze, &args, path.as_ref().map(|p| p.as_slice()));

        if args.flag_text_out.is_empty() {
            print!("{}", text);
        } else {
            write_text_to_file(&text, &args.flag_text_out)
                .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
            info!("wrote maze text to {}", args.flag_text_out);
        }
    }

    if !args.flag_image_out.is_empty() {
        let layout = WallLayoutBuilder::new(units::Width(args.flag_width),
                                            units::Height(args.flag_height))
            .build(&maze)?;
        let render_options = renderers::RenderOptionsBuilder::new()
            .output_file(Some(Path::new(&args.flag_image_out)))
            .path(path)
            .build();
        renderers::render_to_file(&layout, &render_options)
            .chain_err(|| format!("Failed to write maze image {}", args.flag_image_out))?;
    }

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(&maze, &args.flag_save_edges)?;
    }

    Ok(())
}

/// Pick what goes in each cell body of the text rendering: the path, start and end markers, or nothing.
fn render_text(maze: &Maze, maze_args: &MazeArgs, path: Option<&[mazes::cells::CellCoordinate]>) -> String {
    let cell_display: Option<Box<dyn GridDisplay>> = if let Some(p) = path {
        Some(Box::new(PathDisplay::new(p)))
    } else if maze_args.flag_mark_start_end {
        Some(Box::new(StartEndPointsDisplay::for_play(maze)))
    } else {
        None
    };

    match cell_display {
        Some(ref display) => MazeDisplay::with_cells(maze, &**display).to_string(),
        None => MazeDisplay::new(maze).to_string(),
    }
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze: &Maze, file_path: &str) -> Result<()> {

    let mut graph_data = String::new();
    let vertices_count = maze.dimensions().size().0;
    let edges_count = maze.walls().passages_count().0;
    graph_data.push_str(vertices_count.to_string().as_ref());
    graph_data.push(' ');
    graph_data.push_str(edges_count.to_string().as_ref());
    graph_data.push('\n');

    for (src, dst) in maze.iter_links() {
        let src_as_1_based_index = src.row_major_index(maze.dimensions()) + 1;
        let dst_as_1_based_index = dst.row_major_index(maze.dimensions()) + 1;

        graph_data.push_str(src_as_1_based_index.to_string().as_ref());
        graph_data.push(' ');
        graph_data.push_str(dst_as_1_based_index.to_string().as_ref());
        graph_data.push('\n');
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;
    info!("wrote maze graph to {}", file_path);

    Ok(())
}
