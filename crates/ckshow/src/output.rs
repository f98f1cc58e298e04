//! Output format and color selection.

use std::io::IsTerminal;

/// How listings are printed (`--human`, `--basic`, `--json`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Aligned, colored tables.
    #[default]
    Human,
    /// CSV, for scripts.
    Basic,
    /// Pretty-printed JSON.
    Json,
}

/// When to color the output (`--color <WHEN>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorWhen {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorWhen {
    /// Accepted spellings, as listed in error messages.
    pub const CHOICES: &'static [&'static str] = &[
        "auto", "tty", "if-tty", "always", "yes", "force", "never", "no", "none",
    ];

    /// Parses one of [`ColorWhen::CHOICES`].
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" | "tty" | "if-tty" => Some(ColorWhen::Auto),
            "always" | "yes" | "force" => Some(ColorWhen::Always),
            "never" | "no" | "none" => Some(ColorWhen::Never),
            _ => None,
        }
    }

    /// Resolves `Auto` through `probe`; other modes ignore it.
    pub fn use_colors(&self, probe: &dyn TerminalProbe) -> bool {
        match self {
            ColorWhen::Auto => probe.stdout_is_terminal(),
            ColorWhen::Always => true,
            ColorWhen::Never => false,
        }
    }
}

/// Abstraction over terminal detection, so tests can force either answer.
pub trait TerminalProbe {
    fn stdout_is_terminal(&self) -> bool;
}

/// Checks the real stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutProbe;

impl TerminalProbe for StdoutProbe {
    fn stdout_is_terminal(&self) -> bool {
        std::io::stdout().is_terminal()
    }
}
