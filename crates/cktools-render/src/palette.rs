//! Named terminal styles with a single process-wide instance.
//!
//! A [`Palette`] maps each [`StyleName`] to an ANSI style built with
//! `console`. When disabled it passes text through untouched, so callers
//! never branch on color support themselves.
//!
//! The program decides once, early, whether colors are wanted and calls
//! [`install`]. Everything else reads the palette with [`get`] or receives a
//! `&Palette` directly.
//!
//! ```rust
//! use cktools_render::{Palette, StyleName};
//!
//! let plain = Palette::disabled();
//! assert_eq!(plain.paint(StyleName::Error, "oops"), "oops");
//!
//! let colored = Palette::enabled();
//! assert_ne!(colored.paint(StyleName::Error, "oops"), "oops");
//! ```

use std::sync::OnceLock;

use console::Style;

/// The styles a palette knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleName {
    /// Main text color.
    Primary,
    /// Important information.
    Highlight,
    /// Group headers.
    Group,
    /// Data values.
    Data,
    /// Alternative shade for data values.
    Data2,
    /// Successful outcomes.
    Success,
    /// Warnings.
    Warning,
    /// Errors.
    Error,
    /// Hints and general information.
    Info,
}

impl StyleName {
    fn style(self) -> Style {
        let style = Style::new().force_styling(true);
        match self {
            StyleName::Primary => style.white(),
            StyleName::Highlight => style.white().bright(),
            StyleName::Group => style.blue().bright(),
            StyleName::Data => style.green(),
            StyleName::Data2 => style.yellow(),
            StyleName::Success => style.green().bold(),
            StyleName::Warning => style.yellow().bold(),
            StyleName::Error => style.red().bold(),
            StyleName::Info => style.blue().bold(),
        }
    }
}

/// A set of named styles that can be switched off as a whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// A palette that emits ANSI escape sequences.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// A palette that returns text unchanged.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Builds a palette from a yes/no decision.
    pub fn with_colors(enabled: bool) -> Self {
        Self { enabled }
    }

    /// True if styles are applied.
    pub fn colors_enabled(&self) -> bool {
        self.enabled
    }

    /// Wraps `text` in the escape sequence for `name`.
    pub fn paint(&self, name: StyleName, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        name.style().apply_to(text).to_string()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::enabled()
    }
}

static GLOBAL: OnceLock<Palette> = OnceLock::new();

/// Installs the process-wide palette.
///
/// Only the first call has an effect; returns false if a palette was already
/// installed (or already read through [`get`]).
pub fn install(palette: Palette) -> bool {
    GLOBAL.set(palette).is_ok()
}

/// The process-wide palette, enabled unless [`install`] said otherwise.
pub fn get() -> &'static Palette {
    GLOBAL.get_or_init(Palette::default)
}
