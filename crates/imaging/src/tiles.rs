//! Checkerboard tile sheet generation

use crate::canvas::{check_dimensions, Canvas};
use crate::color::Color;
use crate::error::{ImageError, Result};

/// Color of even cells unless overridden
pub const DEFAULT_COLOR1: Color = Color::WHITE;

/// Color of odd cells unless overridden
pub const DEFAULT_COLOR2: Color = Color::rgb(200, 200, 200);

/// Tile sheet configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileConfig {
    /// Edge length of one cell in pixels
    pub cell_size: u32,
    /// Number of cells across
    pub width: u32,
    /// Number of cells down
    pub height: u32,
    /// Color of cells where `(x + y)` is even
    pub color1: Color,
    /// Color of the other cells
    pub color2: Color,
}

impl TileConfig {
    /// One row of `width` cells in the default colors
    pub fn new(cell_size: u32, width: u32) -> Self {
        Self {
            cell_size,
            width,
            height: 1,
            color1: DEFAULT_COLOR1,
            color2: DEFAULT_COLOR2,
        }
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Output size in pixels
    pub fn dimensions(&self) -> Result<(u32, u32)> {
        if self.cell_size == 0 || self.width == 0 || self.height == 0 {
            return Err(ImageError::InvalidDimensions(format!(
                "cell size {} with {}x{} cells",
                self.cell_size, self.width, self.height
            )));
        }

        let overflow = || {
            ImageError::InvalidDimensions(format!(
                "{}x{} cells of {}px is too large",
                self.width, self.height, self.cell_size
            ))
        };

        let w = self.width.checked_mul(self.cell_size).ok_or_else(overflow)?;
        let h = self.height.checked_mul(self.cell_size).ok_or_else(overflow)?;
        check_dimensions(w, h)?;
        Ok((w, h))
    }
}

/// Render a checkerboard of `width x height` cells
pub fn generate(config: &TileConfig) -> Result<Canvas> {
    let (w, h) = config.dimensions()?;
    let mut canvas = Canvas::new(w, h, config.color1)?;

    for y in 0..h {
        for x in 0..w {
            let cell = x / config.cell_size + y / config.cell_size;
            if cell % 2 == 1 {
                canvas.set_pixel(x, y, config.color2)?;
            }
        }
    }

    Ok(canvas)
}
