use std::io::{self, Write};

use crossterm::terminal;
use termcolor::Color;

use crate::{error::Result, manager::Manager, style};

/// Fallback wrap width when the terminal size cannot be determined.
const FALLBACK_WIDTH: usize = 80;

/// Abstraction over how user-facing status lines are produced.
///
/// Implementations can render to a terminal, suppress output, or emit to
/// other formats (e.g. files or JSON) in the future. Lines cooperate with the
/// live display: they print above any active widgets instead of clobbering
/// them.
pub trait Output: Send + Sync {
    /// Print an informational message.
    fn message(&self, msg: &str) -> Result<()>;
    /// Print a success message.
    fn success(&self, msg: &str) -> Result<()>;
    /// Print a warning message.
    fn warn(&self, msg: &str) -> Result<()>;
    /// Print an error/failure message.
    fn fail(&self, msg: &str) -> Result<()>;
    /// Flush any buffered output.
    fn finish(&self) -> Result<()>;
}

/// Output implementation that suppresses all messages. Useful for
/// non-interactive or test environments.
pub struct Quiet;

impl Output for Quiet {
    fn message(&self, _msg: &str) -> Result<()> {
        Ok(())
    }

    fn success(&self, _msg: &str) -> Result<()> {
        Ok(())
    }

    fn warn(&self, _msg: &str) -> Result<()> {
        Ok(())
    }

    fn fail(&self, _msg: &str) -> Result<()> {
        Ok(())
    }

    fn finish(&self) -> Result<()> {
        Ok(())
    }
}

/// Color-capable terminal renderer for status lines.
///
/// Messages are wrapped to the terminal width and routed through a
/// [`Manager`] so they appear above any running widgets.
pub struct Terminal {
    /// Whether to emit ANSI color sequences.
    colors: bool,
    /// Wrap width override; the terminal width when `None`.
    width: Option<usize>,
    /// Manager whose display the lines must not clobber.
    manager: Manager,
}

impl Terminal {
    /// Create a terminal output on the global manager.
    ///
    /// - `colors`: when `true`, always render colored output; when `false`,
    ///   disable ANSI colors.
    pub fn new(colors: bool) -> Self {
        Self::with_manager(colors, Manager::global().clone())
    }

    /// Create a terminal output routing through an explicit manager.
    pub fn with_manager(colors: bool, manager: Manager) -> Self {
        Self {
            colors,
            width: None,
            manager,
        }
    }

    /// Override the wrap width instead of asking the terminal.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Wrap `msg` to the effective width, then print it in `color` above any
    /// live widgets.
    fn write_colored(&self, msg: &str, color: Color) -> Result<()> {
        let width = self.width.unwrap_or_else(terminal_width);
        let wrapped = textwrap::fill(msg, width);
        let painted = style::paint(&wrapped, color, self.colors)?;
        self.manager.println(painted)?;
        Ok(())
    }
}

impl Output for Terminal {
    fn message(&self, msg: &str) -> Result<()> {
        self.write_colored(msg, Color::Cyan)
    }

    fn success(&self, msg: &str) -> Result<()> {
        self.write_colored(msg, Color::Green)
    }

    fn warn(&self, msg: &str) -> Result<()> {
        self.write_colored(msg, Color::Rgb(255, 165, 0)) // Orange
    }

    fn fail(&self, msg: &str) -> Result<()> {
        self.write_colored(msg, Color::Red)
    }

    fn finish(&self) -> Result<()> {
        io::stderr().flush()?;
        Ok(())
    }
}

/// Current terminal width, with a conservative fallback.
fn terminal_width() -> usize {
    terminal::size()
        .map(|(cols, _rows)| usize::from(cols))
        .unwrap_or(FALLBACK_WIDTH)
}
