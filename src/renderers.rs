use std::path::Path;

use image::{Rgb, RgbImage};
use log::info;

use crate::cells::CellCoordinate;
use crate::errors::*;
use crate::layout::{BodyKind, Circle, Rect, WallLayout};
use error_chain::bail;

#[derive(Debug, Clone)]
pub struct RenderOptions<'a> {
    output_file: Option<&'a Path>,
    path: Option<Vec<CellCoordinate>>,
    show_goal: bool,
    show_ball: bool,
}

impl<'a> RenderOptions<'a> {
    pub fn output_file(&self) -> Option<&'a Path> {
        self.output_file
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptionsBuilder<'a> {
    options: RenderOptions<'a>,
}

impl<'a> RenderOptionsBuilder<'a> {
    pub fn new() -> RenderOptionsBuilder<'a> {
        RenderOptionsBuilder {
            options: RenderOptions {
                output_file: None,
                path: None,
                show_goal: true,
                show_ball: true,
            },
        }
    }
    pub fn output_file(mut self, output_file: Option<&'a Path>) -> RenderOptionsBuilder<'a> {
        self.options.output_file = output_file;
        self
    }
    pub fn path(mut self, path: Option<Vec<CellCoordinate>>) -> RenderOptionsBuilder<'a> {
        self.options.path = path;
        self
    }
    pub fn show_goal(mut self, on: bool) -> RenderOptionsBuilder<'a> {
        self.options.show_goal = on;
        self
    }
    pub fn show_ball(mut self, on: bool) -> RenderOptionsBuilder<'a> {
        self.options.show_ball = on;
        self
    }
    pub fn build(self) -> RenderOptions<'a> {
        self.options
    }
}

impl<'a> Default for RenderOptionsBuilder<'a> {
    fn default() -> RenderOptionsBuilder<'a> {
        RenderOptionsBuilder::new()
    }
}

const BACKGROUND: Rgb<u8> = Rgb([0x11, 0x11, 0x11]);
const WALL: Rgb<u8> = Rgb([0xff, 0, 0]);
const BORDER: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
const GOAL: Rgb<u8> = Rgb([0, 0xff, 0]);
const BALL: Rgb<u8> = Rgb([0, 0, 0xff]);
const PATH: Rgb<u8> = Rgb([0xff, 0xff, 0]);

/// Rasterise a wall layout, one image pixel per layout pixel.
///
/// Fails with `InvalidCanvas` when the canvas is too large for an image buffer.
pub fn render_layout(layout: &WallLayout, options: &RenderOptions) -> Result<RgbImage> {
    let (width, height) = image_size(layout.canvas_width.0, layout.canvas_height.0)?;
    let mut image = RgbImage::from_pixel(width, height, BACKGROUND);

    if let Some(ref path) = options.path {
        // a small square at the centre of each cell on the path
        let side = layout.unit_length_x.min(layout.unit_length_y) / 5.0;
        for coord in path {
            let centre_x = coord.column as f64 * layout.unit_length_x + layout.unit_length_x / 2.0;
            let centre_y = coord.row as f64 * layout.unit_length_y + layout.unit_length_y / 2.0;
            fill_rect(&mut image,
                      &Rect::new(centre_x, centre_y, side, side, BodyKind::Wall),
                      PATH);
        }
    }

    for rect in layout.static_bodies() {
        let colour = match rect.kind {
            BodyKind::Border => BORDER,
            BodyKind::Wall => WALL,
            BodyKind::Goal if options.show_goal => GOAL,
            BodyKind::Goal => continue,
        };
        fill_rect(&mut image, rect, colour);
    }

    if options.show_ball {
        fill_circle(&mut image, &layout.ball, BALL);
    }

    Ok(image)
}

/// Whole pixel image size of a canvas, as long as its RGB buffer length fits in a `usize`.
fn image_size(canvas_width: f64, canvas_height: f64) -> Result<(u32, u32)> {
    let (width, height) = (canvas_width.ceil(), canvas_height.ceil());
    let max = u32::MAX as f64;
    if !(width >= 1.0 && width <= max && height >= 1.0 && height <= max) {
        bail!(ErrorKind::InvalidCanvas(canvas_width, canvas_height));
    }

    let (width, height) = (width as u32, height as u32);
    let buffer_length = (width as usize).checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(3));
    if buffer_length.is_none() {
        bail!(ErrorKind::InvalidCanvas(canvas_width, canvas_height));
    }
    Ok((width, height))
}

/// Render and write a PNG to the builder's output file, if one was given.
pub fn render_to_file(layout: &WallLayout, options: &RenderOptions) -> Result<Option<RgbImage>> {
    let image = render_layout(layout, options)?;
    if let Some(file_path) = options.output_file() {
        image.save(file_path)?;
        info!("wrote maze image to {}", file_path.display());
        return Ok(None);
    }
    Ok(Some(image))
}

fn fill_rect(image: &mut RgbImage, rect: &Rect, colour: Rgb<u8>) {
    let (x0, x1) = clamped_span(rect.left(), rect.width, image.width());
    let (y0, y1) = clamped_span(rect.top(), rect.height, image.height());
    for y in y0..y1 {
        for x in x0..x1 {
            image.put_pixel(x, y, colour);
        }
    }
}

fn fill_circle(image: &mut RgbImage, circle: &Circle, colour: Rgb<u8>) {
    let (x0, x1) = clamped_span(circle.centre_x - circle.radius, circle.radius * 2.0, image.width());
    let (y0, y1) = clamped_span(circle.centre_y - circle.radius, circle.radius * 2.0, image.height());
    let radius_squared = circle.radius * circle.radius;
    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f64 + 0.5 - circle.centre_x;
            let dy = y as f64 + 0.5 - circle.centre_y;
            if dx * dx + dy * dy <= radius_squared {
                image.put_pixel(x, y, colour);
            }
        }
    }
}

/// Pixel range `[start, end)` covered by `length` pixels from `from`, clipped to `[0, limit)`.
fn clamped_span(from: f64, length: f64, limit: u32) -> (u32, u32) {
    let start = from.floor().max(0.0).min(limit as f64) as u32;
    let end = (from + length).ceil().max(0.0).min(limit as f64) as u32;
    (start, end)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::generators;
    use crate::grid_dimensions::GridDimensions;
    use crate::layout::WallLayoutBuilder;
    use crate::pathing;
    use crate::random::SequenceSource;
    use crate::units::{ColumnsCount, Height, RowsCount, Width};

    fn hooked_layout() -> (crate::maze::Maze, WallLayout) {
        let dimensions = GridDimensions::new(RowsCount(2), ColumnsCount(2)).unwrap();
        let mut rng = SequenceSource::new(vec![0, 0, 3, 0, 0, 3, 0, 0, 3, 0, 0, 3, 0, 0]);
        let maze = generators::recursive_backtracker(&dimensions, &mut rng).unwrap();
        let layout = WallLayoutBuilder::new(Width(200.0), Height(100.0)).build(&maze).unwrap();
        (maze, layout)
    }

    #[test]
    fn image_matches_canvas() {
        let (_, layout) = hooked_layout();
        let image = render_layout(&layout, &RenderOptionsBuilder::new().build()).unwrap();
        assert_eq!(image.dimensions(), (200, 100));
    }

    #[test]
    fn walls_goal_and_ball_are_drawn() {
        let (_, layout) = hooked_layout();
        let image = render_layout(&layout, &RenderOptionsBuilder::new().build()).unwrap();

        // closed wall between (0,0) and (1,0) centred at (50, 50)
        assert_eq!(*image.get_pixel(20, 50), WALL);
        // open wall between (0,1) and (1,1)
        assert_eq!(*image.get_pixel(150, 50), BACKGROUND);
        assert_eq!(*image.get_pixel(150, 75), GOAL);
        assert_eq!(*image.get_pixel(50, 25), BALL);
        assert_eq!(*image.get_pixel(100, 0), BORDER);
    }

    #[test]
    fn optional_bodies_and_path() {
        let (maze, layout) = hooked_layout();
        let options = RenderOptionsBuilder::new()
            .show_goal(false)
            .show_ball(false)
            .path(pathing::solution(&maze))
            .build();
        let image = render_layout(&layout, &options).unwrap();

        assert_eq!(*image.get_pixel(50, 25), PATH);
        assert_eq!(*image.get_pixel(150, 25), PATH);
        assert_eq!(*image.get_pixel(150, 75), PATH);
        assert_eq!(*image.get_pixel(150, 65), BACKGROUND);
        assert_eq!(*image.get_pixel(50, 75), BACKGROUND);
    }

    #[test]
    fn no_output_file_returns_the_image() {
        let (_, layout) = hooked_layout();
        let rendered = render_to_file(&layout, &RenderOptionsBuilder::new().build()).unwrap();
        assert!(rendered.is_some());
    }

    #[test]
    fn oversized_canvas_is_rejected() {
        let (maze, _) = hooked_layout();
        let layout = WallLayoutBuilder::new(Width(1e12), Height(1e12)).build(&maze).unwrap();
        match render_layout(&layout, &RenderOptionsBuilder::new().build()) {
            Err(Error(ErrorKind::InvalidCanvas(w, h), _)) => assert_eq!((w, h), (1e12, 1e12)),
            other => panic!("expected InvalidCanvas, got {:?}", other.map(|i| i.dimensions())),
        }
        assert!(render_to_file(&layout, &RenderOptionsBuilder::new().build()).is_err());
    }

    #[test]
    fn image_sizes() {
        assert_eq!(image_size(199.2, 100.0).unwrap(), (200, 100));
        assert!(image_size(0.5, 0.5).is_ok());
        assert!(image_size(u32::MAX as f64 + 1.0, 1.0).is_err());
        assert!(image_size(1.0, 1e10).is_err());
    }

    #[test]
    fn spans_are_clipped() {
        assert_eq!(clamped_span(-5.0, 10.0, 100), (0, 5));
        assert_eq!(clamped_span(95.0, 10.0, 100), (95, 100));
        assert_eq!(clamped_span(10.5, 2.0, 100), (10, 13));
        assert_eq!(clamped_span(200.0, 2.0, 100), (100, 100));
    }
}
