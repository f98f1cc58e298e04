//! # cktools-args - Command-Line Token Classification
//!
//! A small, hand-driven argument tokenizer for tools that want full control
//! over their dispatch loop. It does not define a grammar: the caller walks
//! `argv`, asks each slot what it looks like, and decides what to do with it.
//!
//! ## Core Concepts
//!
//! - [`Token`]: immutable classification of one `argv` slot (name, value,
//!   [`ValueSource`])
//! - [`Argument`]: a token plus consumption state, used to detect values given
//!   to flags that take none
//! - [`ArgError`]: usage errors reported by the dispatch loop
//!
//! ## Accepted Shapes
//!
//! | Input | Name | Value | Source |
//! |-------|------|-------|--------|
//! | `--opt=value` | `--opt` | `value` | [`ValueSource::Embedded`] |
//! | `--opt value` | `--opt` | `value` | [`ValueSource::NextArgument`] |
//! | `--opt --other` | `--opt` | (none) | - |
//! | `file.txt` | `file.txt` | (none) | - |
//!
//! A following slot that starts with `-` is never taken as a value, so
//! negative numbers cannot be passed as separate values (`--depth -1`).
//!
//! ## Example
//!
//! ```rust
//! use cktools_args::Argument;
//!
//! let argv = ["ckshow", "--prefix", "model.", "file.safetensors"];
//! let mut prefix = "";
//! let mut file = "";
//!
//! let mut i = 1;
//! while i < argv.len() {
//!     let mut arg = Argument::new(&argv, i);
//!     if arg.is_any(&["-p", "--prefix"]) {
//!         prefix = arg.value(&mut i);
//!     } else if !arg.is_option() {
//!         file = arg.name();
//!     }
//!     i += 1;
//! }
//!
//! assert_eq!(prefix, "model.");
//! assert_eq!(file, "file.safetensors");
//! ```

mod argument;
mod error;
mod token;

pub use argument::Argument;
pub use error::ArgError;
pub use token::{Token, ValueSource};
