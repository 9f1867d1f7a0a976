//! Polling file watcher for Buildwatch
//!
//! This crate provides:
//! - WatchSet construction from file and directory arguments
//! - mtime polling with per-path baselines
//! - Synchronous build command invocation
//! - Colored outcome notices
//! - Cooperative shutdown

pub mod config;
pub mod error;
pub mod invoke;
pub mod report;
pub mod shutdown;
pub mod watchset;

// Re-exports
pub use config::WatchConfig;
pub use error::{Result, WatchError};
pub use invoke::{Invoker, Outcome, ShellCommand};
pub use report::{ConsoleReporter, Reporter};
pub use shutdown::{Shutdown, ShutdownTrigger};
pub use watchset::{PollResult, WatchSet};

use std::path::Path;
use tracing::{debug, info};

/// What one poll cycle saw and did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    /// Paths whose mtime advanced
    pub changes: PollResult,
    /// Outcome of the command, `None` on a quiet cycle
    pub outcome: Option<Outcome>,
}

/// Polls a [`WatchSet`] and runs the build command on changes
///
/// Polling and invocation are strictly sequential: a slow command delays
/// the next poll, and at most one invocation is ever in flight.
pub struct Watcher<I = ShellCommand, R = ConsoleReporter> {
    config: WatchConfig,
    watch_set: WatchSet,
    invoker: I,
    reporter: R,
}

impl Watcher {
    /// Build a watcher running `config.command` through the shell
    ///
    /// Fails with [`WatchError::NotFound`] if any path is neither a file nor
    /// a directory.
    pub fn new<P: AsRef<Path>>(config: WatchConfig, paths: &[P]) -> Result<Self> {
        let watch_set = WatchSet::build(paths)?;
        let invoker = ShellCommand::new(config.command.clone());

        Ok(Self::from_parts(config, watch_set, invoker, ConsoleReporter::stdout()))
    }
}

impl<I: Invoker, R: Reporter> Watcher<I, R> {
    pub fn from_parts(config: WatchConfig, watch_set: WatchSet, invoker: I, reporter: R) -> Self {
        Self {
            config,
            watch_set,
            invoker,
            reporter,
        }
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    pub fn watch_set(&self) -> &WatchSet {
        &self.watch_set
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Poll once and, if anything changed, run the command
    pub async fn cycle(&mut self) -> Result<Cycle> {
        let changes = self.watch_set.poll()?;

        if changes.is_empty() {
            return Ok(Cycle {
                changes,
                outcome: None,
            });
        }

        if self.config.verbose {
            self.dump_state();
        }

        self.reporter.changed(changes.paths());
        let outcome = self.invoker.invoke(changes.paths()).await?;
        self.reporter.outcome(&outcome);

        Ok(Cycle {
            changes,
            outcome: Some(outcome),
        })
    }

    /// Poll until `shutdown` fires or a fatal error occurs
    pub async fn run(&mut self, mut shutdown: Shutdown) -> Result<()> {
        info!(
            "Watching {} files (interval: {:?}, command: `{}`)",
            self.watch_set.len(),
            self.config.poll_interval,
            self.config.command
        );

        loop {
            if shutdown.is_triggered() {
                break;
            }

            self.cycle().await?;

            tokio::select! {
                _ = tokio::time::sleep(self.config.poll_interval) => {}
                _ = shutdown.wait() => break,
            }
        }

        info!("Watcher stopped");
        Ok(())
    }

    fn dump_state(&self) {
        debug!("Watch state ({} files):", self.watch_set.len());
        for (path, mtime) in self.watch_set.iter() {
            debug!("  {} = {}", path.display(), mtime);
        }
    }
}
