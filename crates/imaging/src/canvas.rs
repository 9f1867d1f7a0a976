//! In-memory RGBA pixel grid

use crate::color::Color;
use crate::error::{ImageError, Result};
use image::RgbaImage;
use std::path::Path;
use tracing::debug;

/// Largest canvas accepted, in pixels (1 GiB of RGBA data)
pub const MAX_PIXELS: u64 = 1 << 28;

/// Reject empty canvases and ones larger than [`MAX_PIXELS`]
pub fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(ImageError::InvalidDimensions(format!(
            "{}x{} has no pixels",
            width, height
        )));
    }

    if u64::from(width) * u64::from(height) > MAX_PIXELS {
        return Err(ImageError::InvalidDimensions(format!(
            "{}x{} exceeds the {} pixel limit",
            width, height, MAX_PIXELS
        )));
    }

    Ok(())
}

/// Owned RGBA image with bounds-checked pixel access
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Blank canvas filled with `fill`
    pub fn new(width: u32, height: u32, fill: Color) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            pixels: RgbaImage::from_pixel(width, height, fill.to_pixel()),
        })
    }

    /// Decode an image file; images without alpha load as opaque
    pub fn load(path: &Path) -> Result<Self> {
        let decoded = image::open(path).map_err(|source| ImageError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let pixels = decoded.to_rgba8();
        debug!(
            "Loaded {} ({}x{})",
            path.display(),
            pixels.width(),
            pixels.height()
        );
        Ok(Self { pixels })
    }

    /// Encode to `path`, format chosen by extension
    pub fn save(&self, path: &Path) -> Result<()> {
        self.pixels.save(path).map_err(|source| ImageError::Save {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Saved {}", path.display());
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Color> {
        self.check_bounds(x, y)?;
        Ok(Color::from_pixel(self.pixels.get_pixel(x, y)))
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        self.check_bounds(x, y)?;
        self.pixels.put_pixel(x, y, color.to_pixel());
        Ok(())
    }

    /// Rewrite every pixel in place
    pub(crate) fn map_pixels(&mut self, mut f: impl FnMut(Color) -> Color) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = f(Color::from_pixel(pixel)).to_pixel();
        }
    }

    fn check_bounds(&self, x: u32, y: u32) -> Result<()> {
        if x < self.width() && y < self.height() {
            Ok(())
        } else {
            Err(ImageError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
        }
    }
}
