//! Physical placement of a maze on a canvas.
//!
//! Every closed wall becomes a static rectangle sized from the cell dimensions, ready to hand to a
//! physics or rendering layer. The canvas is framed by thin border walls, the goal sits in the far
//! corner cell and the ball starts in cell (0, 0).

use log::debug;

use crate::errors::*;
use crate::maze::Maze;
use crate::units::{Height, Width};
use error_chain::bail;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BodyKind {
    Border,
    Wall,
    Goal,
}

/// An axis aligned rectangle given by its centre point and size, in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub centre_x: f64,
    pub centre_y: f64,
    pub width: f64,
    pub height: f64,
    pub kind: BodyKind,
}

impl Rect {
    pub fn new(centre_x: f64, centre_y: f64, width: f64, height: f64, kind: BodyKind) -> Rect {
        Rect {
            centre_x,
            centre_y,
            width,
            height,
            kind,
        }
    }

    pub fn left(&self) -> f64 {
        self.centre_x - self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.centre_y - self.height / 2.0
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub centre_x: f64,
    pub centre_y: f64,
    pub radius: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayoutOptions {
    pub wall_thickness: f64,
    pub border_thickness: f64,
    /// Goal side length as a fraction of the cell size.
    pub goal_scale: f64,
    /// The ball radius is the smaller cell side divided by this.
    pub ball_radius_divisor: f64,
}

impl Default for LayoutOptions {
    fn default() -> LayoutOptions {
        LayoutOptions {
            wall_thickness: 10.0,
            border_thickness: 2.0,
            goal_scale: 0.6,
            ball_radius_divisor: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WallLayout {
    pub canvas_width: Width,
    pub canvas_height: Height,
    pub unit_length_x: f64,
    pub unit_length_y: f64,
    pub borders: Vec<Rect>,
    /// Horizontal walls first, then vertical walls, each in row major order.
    pub walls: Vec<Rect>,
    pub goal: Rect,
    pub ball: Circle,
}

impl WallLayout {
    /// Borders, walls and the goal: every static body.
    pub fn static_bodies(&self) -> impl Iterator<Item = &Rect> {
        self.borders.iter().chain(self.walls.iter()).chain(std::iter::once(&self.goal))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WallLayoutBuilder {
    width: Width,
    height: Height,
    options: LayoutOptions,
}

impl WallLayoutBuilder {
    pub fn new(width: Width, height: Height) -> WallLayoutBuilder {
        WallLayoutBuilder {
            width,
            height,
            options: LayoutOptions::default(),
        }
    }

    pub fn options(mut self, options: LayoutOptions) -> WallLayoutBuilder {
        self.options = options;
        self
    }

    pub fn build(&self, maze: &Maze) -> Result<WallLayout> {
        let (w, h) = (self.width.0, self.height.0);
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            bail!(ErrorKind::InvalidCanvas(w, h));
        }

        let dimensions = maze.dimensions();
        let unit_x = w / dimensions.columns().0 as f64;
        let unit_y = h / dimensions.rows().0 as f64;
        let opts = &self.options;

        let border = opts.border_thickness;
        let borders = vec![Rect::new(w / 2.0, 0.0, w, border, BodyKind::Border),
                           Rect::new(w / 2.0, h, w, border, BodyKind::Border),
                           Rect::new(0.0, h / 2.0, border, h, BodyKind::Border),
                           Rect::new(w, h / 2.0, border, h, BodyKind::Border)];

        let horizontal_walls = maze.horizontal()
            .iter()
            .filter(|&(_, _, open)| !open)
            .map(|(row, column, _)| {
                Rect::new(column.0 as f64 * unit_x + unit_x / 2.0,
                          row.0 as f64 * unit_y + unit_y,
                          unit_x,
                          opts.wall_thickness,
                          BodyKind::Wall)
            });
        let vertical_walls = maze.vertical()
            .iter()
            .filter(|&(_, _, open)| !open)
            .map(|(row, column, _)| {
                Rect::new(column.0 as f64 * unit_x + unit_x,
                          row.0 as f64 * unit_y + unit_y / 2.0,
                          opts.wall_thickness,
                          unit_y,
                          BodyKind::Wall)
            });
        let walls = horizontal_walls.chain(vertical_walls).collect::<Vec<_>>();

        let goal = Rect::new(w - unit_x / 2.0,
                             h - unit_y / 2.0,
                             unit_x * opts.goal_scale,
                             unit_y * opts.goal_scale,
                             BodyKind::Goal);
        let ball = Circle {
            centre_x: unit_x / 2.0,
            centre_y: unit_y / 2.0,
            radius: unit_x.min(unit_y) / opts.ball_radius_divisor,
        };

        debug!("laid out {} walls on a {}x{} canvas", walls.len(), w, h);

        Ok(WallLayout {
            canvas_width: self.width,
            canvas_height: self.height,
            unit_length_x: unit_x,
            unit_length_y: unit_y,
            borders,
            walls,
            goal,
            ball,
        })
    }
}
