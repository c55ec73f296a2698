//! **mazes** generates perfect rectangular mazes and lays them out as walls ready for a physics or
//! rendering layer.
//!
//! ```
//! use mazes::generators;
//! use mazes::random::RngSource;
//!
//! let (vertical, horizontal) = generators::generate(12, 30, &mut RngSource::seeded(7)).unwrap();
//! assert_eq!(vertical.open_count() + horizontal.open_count(), 12 * 30 - 1);
//! ```

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod layout;
pub mod maze;
pub mod pathing;
pub mod random;
pub mod renderers;
pub mod units;
pub mod walls;
mod utils;
