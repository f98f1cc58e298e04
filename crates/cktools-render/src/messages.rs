//! Classified messages for the user, written to stderr.
//!
//! Every message starts with a colored tag (`[WARNING]`, `[ERROR]`). Fatal
//! errors add one hint line per remediation tip and terminate the process.

use std::io::{self, Write};

use crate::palette::{Palette, StyleName};

/// Severity of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Something worth knowing; execution continues.
    Warning,
    /// Something went wrong.
    Error,
}

impl MessageLevel {
    /// The tag printed in front of the message.
    pub fn tag(&self) -> &'static str {
        match self {
            MessageLevel::Warning => "[WARNING]",
            MessageLevel::Error => "[ERROR]",
        }
    }

    fn style(&self) -> StyleName {
        match self {
            MessageLevel::Warning => StyleName::Warning,
            MessageLevel::Error => StyleName::Error,
        }
    }
}

const HINT_MARKER: &str = "\u{1F6C8}";

/// Writes one tagged message line.
pub fn write_message<W: Write + ?Sized>(
    out: &mut W,
    palette: &Palette,
    level: MessageLevel,
    message: &str,
) -> io::Result<()> {
    writeln!(out, "{} {}", palette.paint(level.style(), level.tag()), message)
}

/// Writes an error line followed by one line per hint.
pub fn write_fatal<W: Write + ?Sized>(
    out: &mut W,
    palette: &Palette,
    message: &str,
    hints: &[String],
) -> io::Result<()> {
    write_message(out, palette, MessageLevel::Error, message)?;
    for hint in hints {
        let line = format!("{} {}", HINT_MARKER, hint);
        writeln!(out, " {}", palette.paint(StyleName::Info, &line))?;
    }
    Ok(())
}

/// Prints a warning to stderr.
pub fn warning(palette: &Palette, message: &str) {
    let _ = write_message(&mut io::stderr().lock(), palette, MessageLevel::Warning, message);
}

/// Prints an error to stderr.
pub fn error(palette: &Palette, message: &str) {
    let _ = write_message(&mut io::stderr().lock(), palette, MessageLevel::Error, message);
}

/// Prints an error with its hints to stderr and exits.
///
/// Exit codes below 1 are raised to 1 so a fatal error never reports success.
pub fn fatal(palette: &Palette, message: &str, hints: &[String], exit_code: i32) -> ! {
    let _ = write_fatal(&mut io::stderr().lock(), palette, message, hints);
    std::process::exit(exit_code.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_line() {
        let mut out = Vec::new();
        write_message(&mut out, &Palette::disabled(), MessageLevel::Warning, "careful").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[WARNING] careful\n");
    }

    #[test]
    fn test_fatal_lists_hints() {
        let mut out = Vec::new();
        let hints = vec!["Try `ckshow --help` for more information.".to_string()];
        write_fatal(&mut out, &Palette::disabled(), "Unknown argument: -x", &hints).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "[ERROR] Unknown argument: -x\n \u{1F6C8} Try `ckshow --help` for more information.\n"
        );
    }

    #[test]
    fn test_colored_tag() {
        let mut out = Vec::new();
        write_message(&mut out, &Palette::enabled(), MessageLevel::Error, "boom").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with('\x1b'));
        assert!(text.ends_with(" boom\n"));
    }
}
