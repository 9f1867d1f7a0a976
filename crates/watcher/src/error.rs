//! Error types for the watcher

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal watcher errors
///
/// A failing build command is not an error: it is reported as an
/// [`Outcome`](crate::Outcome) and polling continues.
#[derive(Debug, Error)]
pub enum WatchError {
    /// A watch argument is neither an existing file nor an existing directory
    #[error("watch path not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Enumerating a watched directory failed
    #[error("failed to scan watched directory")]
    Walk(#[from] walkdir::Error),

    /// A watched file could not be stat'ed during a poll cycle
    #[error("failed to stat watched file {}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The shell running the build command could not be spawned
    #[error("failed to spawn command `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Result type for watcher operations
pub type Result<T> = std::result::Result<T, WatchError>;
