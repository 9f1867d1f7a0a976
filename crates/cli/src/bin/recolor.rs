//! Recolor CLI - replace one exact color of an image

use anyhow::Result;
use clap::Parser;
use cli_lib::cmd::recolor::{self, RecolorOptions};
use cli_lib::settings::Settings;
use cli_lib::{logging, usage};
use imaging::Color;
use std::path::PathBuf;

/// Replace every pixel of one color with another
#[derive(Parser)]
#[command(name = "recolor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Image to read
    input: PathBuf,

    /// Where to write the result (default: out.png)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Color to replace, as #rrggbb or r,g,b (default: black)
    #[arg(short, long)]
    transparent: Option<Color>,

    /// Replacement color (default: white)
    #[arg(short, long)]
    background: Option<Color>,

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

    recolor::run(
        RecolorOptions {
            input: cli.input,
            output: cli.output,
            transparent: cli.transparent,
            background: cli.background,
        },
        &settings,
    )
}
