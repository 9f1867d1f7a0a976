//! Watch files and rebuild on change

use crate::settings::Settings;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;
use watcher::{shutdown, Watcher};

/// Options from the command line; `None` falls back to the settings file
#[derive(Debug, Default)]
pub struct WatchOptions {
    pub paths: Vec<PathBuf>,
    pub command: Option<String>,
    pub interval_secs: Option<u64>,
    pub verbose: bool,
}

/// Merge command-line options over the settings file
pub fn resolve(options: &WatchOptions, mut settings: Settings) -> Result<Settings> {
    if let Some(command) = &options.command {
        settings.watch.command = command.clone();
    }
    if let Some(secs) = options.interval_secs {
        settings.watch.poll_interval_secs = secs;
    }
    settings.watch.verbose |= options.verbose;

    settings.validate()?;
    Ok(settings)
}

/// Poll until Ctrl-C or a fatal error
pub async fn run(options: WatchOptions, settings: &Settings) -> Result<()> {
    let config = settings.watch.to_config();
    let mut watcher = Watcher::new(config, options.paths.as_slice())
        .context("Failed to set up watcher")?;

    let (trigger, shutdown) = shutdown::channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupted, stopping");
            trigger.trigger();
        }
    });

    watcher
        .run(shutdown)
        .await
        .context("Watcher stopped")?;

    Ok(())
}
