//! Generate a checkerboard tile sheet

use crate::settings::Settings;
use anyhow::Result;
use imaging::{generate, Color, TileConfig};
use owo_colors::{OwoColorize, Stream};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug)]
pub struct TileOptions {
    pub gridsize: u32,
    pub width: u32,
    pub height: u32,
    pub color1: Option<Color>,
    pub color2: Option<Color>,
    pub output: Option<PathBuf>,
}

impl TileOptions {
    /// Layout from the command line, colors from flags or settings
    pub fn to_config(&self, settings: &Settings) -> TileConfig {
        TileConfig {
            color1: self.color1.unwrap_or(settings.tiles.color1),
            color2: self.color2.unwrap_or(settings.tiles.color2),
            ..TileConfig::new(self.gridsize, self.width).with_height(self.height)
        }
    }
}

pub fn run(options: TileOptions, settings: &Settings) -> Result<()> {
    let config = options.to_config(settings);
    let output = options
        .output
        .unwrap_or_else(|| settings.tiles.output.clone());

    info!(
        "Generating {}x{} cells of {}px ({} / {})",
        config.width, config.height, config.cell_size, config.color1, config.color2
    );

    let canvas = generate(&config)?;
    canvas.save(&output)?;

    let size = format!("({}x{})", canvas.width(), canvas.height());
    println!(
        "{} {} {}",
        "✓".if_supports_color(Stream::Stdout, |t| t.green()),
        output.display(),
        size.if_supports_color(Stream::Stdout, |t| t.dimmed())
    );
    Ok(())
}
