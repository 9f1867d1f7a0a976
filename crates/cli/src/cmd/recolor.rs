//! Replace one color of an image with another

use crate::settings::Settings;
use anyhow::{Context, Result};
use imaging::{remap, Canvas, Color};
use owo_colors::{OwoColorize, Stream};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug)]
pub struct RecolorOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub transparent: Option<Color>,
    pub background: Option<Color>,
}

pub fn run(options: RecolorOptions, settings: &Settings) -> Result<()> {
    let mut recolor = settings.recolor.clone();
    if let Some(color) = options.transparent {
        recolor.transparent = color;
    }
    if let Some(color) = options.background {
        recolor.background = color;
    }
    let output = options.output.unwrap_or(recolor.output.clone());

    let mut canvas = Canvas::load(&options.input)
        .with_context(|| format!("Cannot recolor {}", options.input.display()))?;

    info!(
        "Replacing {} with {} in {}x{} image",
        recolor.transparent,
        recolor.background,
        canvas.width(),
        canvas.height()
    );
    let replaced = remap(&mut canvas, &recolor.to_config());

    canvas.save(&output)?;

    let summary = format!("({} pixels replaced)", replaced);
    println!(
        "{} {} {}",
        "✓".if_supports_color(Stream::Stdout, |t| t.green()),
        output.display(),
        summary.if_supports_color(Stream::Stdout, |t| t.dimmed())
    );
    Ok(())
}
