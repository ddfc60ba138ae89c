mod window;

pub use window::{MacroquadSurface, MacroquadTicker};

use macroquad::color::{BLACK, Color, WHITE};
use crate::domain::Grid;

/// A 2D raster the host hands us to draw on.
/// Coordinates are pixels with the origin at the top-left.
pub trait Surface {
    /// Size the raster to exactly `width` x `height` pixels
    fn resize(&mut self, width: u32, height: u32);

    /// Fill the entire surface with a solid color
    fn fill(&mut self, color: Color);

    /// Fill a rectangle with a solid color
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
}

/// Colors used when painting a grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub alive: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: BLACK,
            alive: WHITE,
        }
    }
}

/// Clear the surface, then paint one `block_size` square per live cell
/// at `(col * block_size, row * block_size)`.
pub fn draw_grid<S: Surface + ?Sized>(grid: &Grid, block_size: u32, palette: &Palette, surface: &mut S) {
    surface.fill(palette.background);

    let size = block_size as f32;
    grid.iter_cells()
        .filter(|(_, _, cell)| cell.is_alive())
        .for_each(|(row, col, _)| {
            surface.fill_rect(col as f32 * size, row as f32 * size, size, size, palette.alive);
        });
}

/// Surface that records every call, for asserting on what was drawn
#[cfg(test)]
#[derive(Default, Debug)]
pub(crate) struct RecordingSurface {
    pub size: Option<(u32, u32)>,
    pub ops: Vec<DrawOp>,
}

#[cfg(test)]
#[derive(Debug, PartialEq)]
pub(crate) enum DrawOp {
    Fill(Color),
    Rect { x: f32, y: f32, w: f32, h: f32, color: Color },
}

#[cfg(test)]
impl RecordingSurface {
    /// Number of full-surface fills, one per drawn frame
    pub fn frames(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Fill(_))).count()
    }
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
    }

    fn fill(&mut self, color: Color) {
        self.ops.push(DrawOp::Fill(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ops.push(DrawOp::Rect { x, y, w, h, color });
    }
}
