//! Build command invocation

use crate::error::{Result, WatchError};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::ExitStatus;
use tokio::process::Command;
use tracing::debug;

/// Result of one run of the build command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Command exited with status 0
    Success,
    /// Command exited nonzero, or was killed by a signal (`code` is `None`)
    Failure { code: Option<i32> },
}

impl Outcome {
    pub fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(0) => Outcome::Success,
            code => Outcome::Failure { code },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// Something that runs once per cycle with changes
#[async_trait]
pub trait Invoker: Send {
    /// Run to completion and report how it ended
    ///
    /// Only failures to start are errors; a nonzero exit is an [`Outcome`].
    async fn invoke(&mut self, changed: &[PathBuf]) -> Result<Outcome>;
}

/// Runs a command line through the platform shell
///
/// The child inherits stdin, stdout and stderr, so its output interleaves
/// with the watcher's own notices.
#[derive(Debug, Clone)]
pub struct ShellCommand {
    command: String,
}

impl ShellCommand {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    fn build(&self) -> Command {
        let (shell, flag) = if cfg!(windows) { ("cmd", "/C") } else { ("sh", "-c") };

        let mut cmd = Command::new(shell);
        cmd.arg(flag).arg(&self.command);
        cmd
    }
}

#[async_trait]
impl Invoker for ShellCommand {
    async fn invoke(&mut self, changed: &[PathBuf]) -> Result<Outcome> {
        debug!("Running `{}` for {} changed files", self.command, changed.len());

        let status = self
            .build()
            .status()
            .await
            .map_err(|source| WatchError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        Ok(Outcome::from_status(status))
    }
}
