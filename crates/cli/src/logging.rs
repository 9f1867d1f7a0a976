//! Diagnostic logging setup

use tracing::Level;

/// Send tracing output to stderr, at debug level when `verbose`
///
/// Stdout is left to user-facing notices and the build command's output.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
