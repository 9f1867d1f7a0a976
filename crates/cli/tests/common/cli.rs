//! CLI command execution helpers with timeouts
//!
//! Wraps the workspace binaries so tests can run them with a timeout and
//! assert on the captured output.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// CLI command builder with a timeout
pub struct BinCommand {
    binary_path: PathBuf,
    working_dir: PathBuf,
    args: Vec<String>,
    timeout: Duration,
}

impl BinCommand {
    /// Create a command for binary `name` in the given working directory
    pub fn new(name: &str, working_dir: impl AsRef<Path>) -> Self {
        Self {
            binary_path: find_binary(name),
            working_dir: working_dir.as_ref().to_path_buf(),
            args: Vec::new(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Add command arguments
    pub fn args(&mut self, args: &[&str]) -> &mut Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set command timeout; the process is killed when it runs longer
    pub fn timeout(&mut self, timeout: Duration) -> &mut Self {
        self.timeout = timeout;
        self
    }

    /// Execute command, killing it once the timeout elapses
    pub fn execute(&self) -> Result<CommandResult> {
        let start = Instant::now();

        let mut child = Command::new(&self.binary_path)
            .args(&self.args)
            .current_dir(&self.working_dir)
            .env_remove("FORCE_COLOR")
            .env_remove("CLICOLOR_FORCE")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to spawn {}", self.binary_path.display()))?;

        let mut timed_out = false;
        while child.try_wait()?.is_none() {
            if start.elapsed() >= self.timeout {
                child.kill().context("Failed to kill command")?;
                timed_out = true;
                break;
            }
            std::thread::sleep(Duration::from_millis(50));
        }

        let output = child
            .wait_with_output()
            .context("Failed to wait for command")?;

        Ok(CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
            timed_out,
        })
    }

    /// Execute and assert success
    pub fn assert_success(&self) -> Result<CommandResult> {
        let result = self.execute()?;

        if !result.success() {
            anyhow::bail!(
                "Command failed (exit code: {}):\nArgs: {:?}\nStdout: {}\nStderr: {}",
                result.exit_code,
                self.args,
                result.stdout,
                result.stderr
            );
        }

        Ok(result)
    }

    /// Execute and expect failure
    pub fn assert_failure(&self) -> Result<CommandResult> {
        let result = self.execute()?;

        if result.success() || result.timed_out {
            anyhow::bail!(
                "Command should have failed but did not:\nArgs: {:?}\nStdout: {}",
                self.args,
                result.stdout
            );
        }

        Ok(result)
    }

    /// Execute a command that never exits on its own, stopping it at the timeout
    pub fn run_until_timeout(&self) -> Result<CommandResult> {
        let result = self.execute()?;

        if !result.timed_out {
            anyhow::bail!(
                "Command exited early (exit code: {}):\nArgs: {:?}\nStdout: {}\nStderr: {}",
                result.exit_code,
                self.args,
                result.stdout,
                result.stderr
            );
        }

        Ok(result)
    }
}

/// Captured output and exit status of one run
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub timed_out: bool,
}

impl CommandResult {
    /// Check if command exited cleanly on its own
    pub fn success(&self) -> bool {
        !self.timed_out && self.exit_code == 0
    }

    /// Check if stdout contains text
    pub fn contains_stdout(&self, text: &str) -> bool {
        self.stdout.contains(text)
    }

    /// Check if stderr contains text
    pub fn contains_stderr(&self, text: &str) -> bool {
        self.stderr.contains(text)
    }

    /// Number of stdout lines containing text
    pub fn count_stdout(&self, text: &str) -> usize {
        self.stdout.lines().filter(|line| line.contains(text)).count()
    }
}

/// Find a workspace binary in the target directory
fn find_binary(name: &str) -> PathBuf {
    let file_name = format!("{}{}", name, std::env::consts::EXE_SUFFIX);

    // Try to locate the binary relative to the current executable (test binary)
    let mut path = std::env::current_exe().expect("Failed to get current exe path");

    // Go up from test binary location
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps/

    let bin = path.join(&file_name);
    if bin.exists() {
        return bin;
    }

    // Try release
    path.pop(); // Remove debug/
    let release_bin = path.join("release").join(&file_name);
    if release_bin.exists() {
        return release_bin;
    }

    // Fallback to debug
    path.join("debug").join(file_name)
}

/// Macro for convenient command construction
///
/// Usage:
/// ```ignore
/// bin!("buildwatch", dir, "-c", "true", "a.txt").run_until_timeout()?;
/// ```
#[macro_export]
macro_rules! bin {
    ($name:expr, $dir:expr $(, $arg:expr)*) => {{
        let mut cmd = $crate::common::cli::BinCommand::new($name, $dir);
        cmd.args(&[$($arg),*]);
        cmd
    }};
}
