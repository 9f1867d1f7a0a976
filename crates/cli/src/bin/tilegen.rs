//! Tilegen CLI - write a checkerboard tile sheet

use anyhow::Result;
use clap::Parser;
use cli_lib::cmd::tiles::{self, TileOptions};
use cli_lib::settings::Settings;
use cli_lib::{logging, usage};
use imaging::Color;
use std::path::PathBuf;

/// Generate a checkerboard of two alternating colors
#[derive(Parser)]
#[command(name = "tilegen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Cell edge length in pixels
    gridsize: u32,

    /// Number of cells across
    width: u32,

    /// Number of cells down
    #[arg(default_value_t = 1)]
    height: u32,

    /// Color of the top-left cell (default: #ffffff)
    #[arg(long)]
    color1: Option<Color>,

    /// Alternate cell color (default: #c8c8c8)
    #[arg(long)]
    color2: Option<Color>,

    /// Where to write the sheet (default: out.png)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log each step
    #[arg(short, long)]
    verbose: bool,

    /// Settings file (default: ./buildwatch.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli: Cli = usage::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    logging::init(cli.verbose);

    tiles::run(
        TileOptions {
            gridsize: cli.gridsize,
            width: cli.width,
            height: cli.height,
            color1: cli.color1,
            color2: cli.color2,
            output: cli.output,
        },
        &settings,
    )
}
