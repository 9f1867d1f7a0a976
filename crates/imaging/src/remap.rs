//! Replace one exact color with another

use crate::canvas::Canvas;
use crate::color::Color;

/// Remap configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemapConfig {
    /// Color to replace (default: black)
    pub transparent: Color,
    /// Replacement color (default: white)
    pub background: Color,
}

impl Default for RemapConfig {
    fn default() -> Self {
        Self {
            transparent: Color::BLACK,
            background: Color::WHITE,
        }
    }
}

/// Replace every pixel exactly equal to `transparent` with `background`
///
/// Alpha takes part in the comparison, so opaque black never matches a
/// fully transparent pixel. Returns the number of pixels replaced.
pub fn remap(canvas: &mut Canvas, config: &RemapConfig) -> usize {
    let mut replaced = 0;

    canvas.map_pixels(|pixel| {
        if pixel == config.transparent {
            replaced += 1;
            config.background
        } else {
            pixel
        }
    });

    replaced
}
