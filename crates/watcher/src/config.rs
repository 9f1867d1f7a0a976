//! Watcher configuration

use std::time::Duration;

/// Command run when no other is configured
pub const DEFAULT_COMMAND: &str = "make";

/// Delay between two poll cycles when no other is configured
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Watcher configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    /// Shell command run after every cycle that saw a change (default: `make`)
    pub command: String,

    /// Sleep between poll cycles (default: 1s)
    pub poll_interval: Duration,

    /// Dump the full watch state whenever a change is detected
    pub verbose: bool,
}

impl WatchConfig {
    /// Default configuration running `command` instead of `make`
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Self::default()
        }
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            verbose: false,
        }
    }
}
