//! Console notices for changes and command outcomes

use crate::invoke::Outcome;
use owo_colors::{OwoColorize, Stream, Style};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::warn;

/// Terminal bell
pub const BELL: char = '\x07';

/// Receives the notices of a watch cycle
pub trait Reporter: Send {
    /// Changes were detected and the command is about to run
    fn changed(&mut self, paths: &[PathBuf]);

    /// The command finished
    fn outcome(&mut self, outcome: &Outcome);
}

/// Writes notices to a sink, stdout by default
///
/// Notices share the stream with the child's output, so lines are flushed
/// as soon as they are written. Colors are only emitted when enabled and
/// stdout is a terminal that supports them.
pub struct ConsoleReporter<W = io::Stdout> {
    out: W,
    color: bool,
}

impl ConsoleReporter {
    pub fn stdout() -> Self {
        Self::new(io::stdout()).with_color(true)
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Plain-text reporter
    pub fn new(out: W) -> Self {
        Self { out, color: false }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.if_supports_color(Stream::Stdout, |t| t.style(style))
                .to_string()
        } else {
            text.to_string()
        }
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line).and_then(|_| self.out.flush()) {
            warn!("Failed to write notice: {}", e);
        }
    }
}

impl<W: Write + Send> Reporter for ConsoleReporter<W> {
    fn changed(&mut self, paths: &[PathBuf]) {
        let list = paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");

        let line = self.paint(
            &format!(">>> changed: {}", list),
            Style::new().yellow().bold(),
        );
        self.emit(&line);
    }

    fn outcome(&mut self, outcome: &Outcome) {
        let failed = Style::new().red().bold();
        let line = match outcome {
            Outcome::Success => self.paint(">>> command succeeded", Style::new().green()),
            Outcome::Failure { code: Some(code) } => {
                let text = format!(">>> command failed (exit code {})", code);
                format!("{}{}", self.paint(&text, failed), BELL)
            }
            Outcome::Failure { code: None } => {
                let text = ">>> command failed (terminated by signal)";
                format!("{}{}", self.paint(text, failed), BELL)
            }
        };
        self.emit(&line);
    }
}
