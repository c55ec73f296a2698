//! Error types for the library, generated by `error_chain!`.
//!
//! Other modules `use crate::errors::*;` to get `Error`, `ErrorKind`, `Result` and `ResultExt`.

use error_chain::*;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        Image(::image::ImageError);
    }

    errors {
        InvalidDimension(rows: usize, columns: usize) {
            description("invalid grid dimension")
            display("invalid grid dimension {} rows x {} columns, both must be positive", rows, columns)
        }
        InvalidRandomSource(value: usize, bound: usize) {
            description("random source out of range")
            display("random source returned {} which is outside [0, {})", value, bound)
        }
        ResourceExhausted(rows: usize, columns: usize) {
            description("grid too large")
            display("a {} x {} grid cannot be represented", rows, columns)
        }
        WallIndexOutOfBounds(row: usize, column: usize, rows: usize, columns: usize) {
            description("wall index out of bounds")
            display("wall index ({}, {}) is outside a {} x {} wall matrix", row, column, rows, columns)
        }
        InvalidCoordinate(row: usize, column: usize) {
            description("invalid cell coordinate")
            display("cell ({}, {}) is not on the maze grid", row, column)
        }
        InvalidCanvas(width: f64, height: f64) {
            description("invalid canvas size")
            display("canvas {} x {} must have a positive finite width and height", width, height)
        }
    }
}
