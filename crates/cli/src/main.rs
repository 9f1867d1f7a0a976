//! Buildwatch CLI - rerun a build command when watched files change

use anyhow::Result;
use clap::Parser;
use cli_lib::cmd::watch::{self, WatchOptions};
use cli_lib::settings::Settings;
use cli_lib::{logging, usage};
use std::path::PathBuf;

/// Buildwatch - poll files and rerun a command when they change
#[derive(Parser)]
#[command(name = "buildwatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files or directories to watch (directories are expanded once)
    paths: Vec<PathBuf>,

    /// Shell command to run on change (default: make)
    #[arg(short, long)]
    command: Option<String>,

    /// Seconds between polls (default: 1)
    #[arg(short, long)]
    interval: Option<u64>,

    /// Dump the watch state on every change
    #[arg(short, long)]
    verbose: bool,

    /// Settings file (default: ./buildwatch.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli: Cli = usage::parse();

    let options = WatchOptions {
        paths: cli.paths,
        command: cli.command,
        interval_secs: cli.interval,
        verbose: cli.verbose,
    };
    let settings = watch::resolve(&options, Settings::load(cli.config.as_deref())?)?;

    logging::init(settings.watch.verbose);

    watch::run(options, &settings).await
}
