//! Colored diagnostic lines for the terminal.
//!
//! Diagnostics are user-facing status messages (loaded config, applied
//! overrides, failures). They go to stdout and are kept apart from the
//! `tracing` log stream, which goes to stderr.

use owo_colors::{OwoColorize, Style};
use std::io::{self, IsTerminal, Write};

/// Named colors used by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    White,
    Cyan,
    Green,
    Yellow,
    Red,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Self::White => Style::new().white(),
            Self::Cyan => Style::new().cyan(),
            Self::Green => Style::new().green(),
            Self::Yellow => Style::new().yellow(),
            Self::Red => Style::new().red(),
            Self::BrightGreen => Style::new().bright_green(),
            Self::BrightYellow => Style::new().bright_yellow(),
            Self::BrightBlue => Style::new().bright_blue(),
            Self::BrightMagenta => Style::new().bright_magenta(),
        }
    }
}

/// Decides whether diagnostics carry ANSI color codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Plain output, no escape codes.
    #[must_use]
    pub const fn plain() -> Self {
        Self::new(false)
    }

    /// Color only when stdout is a terminal and `NO_COLOR` is unset
    /// (see <https://no-color.org>)
    #[must_use]
    pub fn from_env() -> Self {
        Self::detect(
            std::env::var_os("NO_COLOR").is_some(),
            io::stdout().is_terminal(),
        )
    }

    #[must_use]
    pub const fn detect(no_color: bool, is_terminal: bool) -> Self {
        Self::new(is_terminal && !no_color)
    }

    /// Render `text` in `tone`
    #[must_use]
    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if self.enabled {
            text.style(tone.style()).to_string()
        } else {
            text.to_string()
        }
    }

    /// Write `prefix` in `tone` followed by `secondary` in default formatting.
    ///
    /// When `secondary` is empty only the colored prefix is written.
    pub fn line<W: Write + ?Sized>(
        &self,
        w: &mut W,
        prefix: &str,
        secondary: &str,
        tone: Tone,
    ) -> io::Result<()> {
        if secondary.is_empty() {
            writeln!(w, "{}", self.paint(prefix, tone))
        } else {
            writeln!(w, "{}{secondary}", self.paint(prefix, tone))
        }
    }

    /// Write several individually colored segments on one line
    pub fn segments<W: Write + ?Sized>(&self, w: &mut W, parts: &[(&str, Tone)]) -> io::Result<()> {
        for (text, tone) in parts {
            write!(w, "{}", self.paint(text, *tone))?;
        }
        writeln!(w)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_env()
    }
}
