//! Colored terminal output for progress messages.

use crate::bundler::Ui;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use std::io::{self, Write};

/// Writes progress and results to the terminal.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Create a new output manager
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a progress line
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.styled("==> ", ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true), message)
    }

    /// Print only in verbose mode
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.verbose || self.quiet {
            return Ok(());
        }
        self.styled("    ", ColorSpec::new().set_dimmed(true), message)
    }

    /// Print a success line
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.styled("✓ ", ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true), message)
    }

    fn styled(&self, marker: &str, spec: &ColorSpec, message: &str) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        stdout.set_color(spec)?;
        write!(stdout, "{marker}")?;
        stdout.reset()?;
        writeln!(stdout, "{message}")
    }
}

impl Ui for OutputManager {
    fn message(&self, text: &str) {
        // Progress display must never fail the pipeline.
        let _ = self.progress(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_suppresses_everything() {
        let output = OutputManager::new(true, true);
        assert!(output.progress("p").is_ok());
        assert!(output.verbose("v").is_ok());
        assert!(output.success("s").is_ok());
    }

    #[test]
    fn writes_styled_lines() {
        let output = OutputManager::new(true, false);
        assert!(output.progress("Compressing box...").is_ok());
        assert!(output.success("done").is_ok());
    }
}
