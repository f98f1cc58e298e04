//! # cktools-render - Terminal Output for cktools
//!
//! Everything the command-line tools need to put text on a terminal:
//!
//! - [`Table`]: rows of cells rendered with aligned columns, bounded widths
//!   and a pluggable colorizer
//! - [`Palette`]: named ANSI styles that can be disabled as a whole, with one
//!   process-wide instance ([`palette::install`], [`palette::get`])
//! - [`messages`]: tagged warnings and errors on stderr, including fatal
//!   errors that exit the process
//! - padding helpers measured in bytes ([`pad_left`], [`pad_right`],
//!   [`pad_center`], [`truncate_end`])
//!
//! ## Quick Start
//!
//! ```rust
//! use cktools_render::{Align, Palette, StyleName, Table};
//!
//! let palette = Palette::disabled();
//! let mut table = Table::new();
//! table.set_alignments([Align::Right, Align::Left]);
//! table.set_colorizer(move |column, text| match column {
//!     0 => palette.paint(StyleName::Data, text),
//!     _ => palette.paint(StyleName::Primary, text),
//! });
//! table.add_row(["[320]", "conv.bias"]);
//! table.add_row(["[320,4,3,3]", "conv.weight"]);
//!
//! print!("{}", table);
//! ```

pub mod messages;
pub mod palette;
mod table;
mod util;

pub use messages::MessageLevel;
pub use palette::{Palette, StyleName};
pub use table::{Align, Colorizer, Row, Rows, Table};
pub use util::{pad_center, pad_left, pad_right, truncate_end};
