//! Column-aligned tables for terminal output.
//!
//! A [`Table`] accumulates rows of text, computes one width per column from
//! the content and the configured bounds, and renders every row padded to
//! those widths. Widths are byte lengths.
//!
//! # Example
//!
//! ```rust
//! use cktools_render::{Align, Table};
//!
//! let mut table = Table::new();
//! table.set_alignments([Align::Right, Align::Left]);
//! table.add_row(["[2,3]", "weight"]);
//! table.add_row(["[3]", "bias"]);
//!
//! assert_eq!(table.render(), "[2,3] weight\n  [3] bias  \n");
//! ```
//!
//! # Width Resolution
//!
//! 1. Start from the configured minimum widths (missing entries are 0).
//! 2. Grow each column to the length of its longest cell.
//! 3. Clamp columns with a maximum width greater than 0.
//!
//! A maximum only limits the padding: cells longer than the final width are
//! emitted unchanged. Callers that need a visual cut shorten the text first
//! (see [`truncate_end`](crate::truncate_end)).

use std::fmt;
use std::io::{self, Write};

use crate::util::{pad_center, pad_left, pad_right};

/// One row of cells.
pub type Row = Vec<String>;

/// A collection of rows.
pub type Rows = Vec<Row>;

/// Callback applied to every padded cell: `(column, text) -> styled text`.
pub type Colorizer<'a> = Box<dyn Fn(usize, &str) -> String + 'a>;

const SEPARATOR: &str = " ";

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text (pad on both sides, extra space on the right).
    Center,
}

impl Align {
    fn apply(self, text: &str, width: usize) -> String {
        match self {
            Align::Left => pad_right(text, width),
            Align::Right => pad_left(text, width),
            Align::Center => pad_center(text, width),
        }
    }
}

/// A table of text cells rendered with aligned columns.
#[derive(Default)]
pub struct Table<'a> {
    rows: Rows,
    number_of_columns: usize,
    alignments: Vec<Align>,
    min_widths: Vec<usize>,
    max_widths: Vec<usize>,
    colorizer: Option<Colorizer<'a>>,
}

impl<'a> Table<'a> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table populated with `rows`.
    pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for row in rows {
            table.add_row(row);
        }
        table
    }

    // --- capacity ---

    /// Number of rows added so far.
    pub fn number_of_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells in the widest row.
    pub fn number_of_columns(&self) -> usize {
        self.number_of_columns
    }

    /// True if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Reserves space for `additional` rows.
    pub fn reserve(&mut self, additional: usize) {
        self.rows.reserve(additional);
    }

    // --- format ---

    /// Replaces the per-column alignments.
    pub fn set_alignments(&mut self, alignments: impl Into<Vec<Align>>) {
        self.alignments = alignments.into();
    }

    /// Replaces the per-column minimum widths.
    pub fn set_min_widths(&mut self, widths: impl Into<Vec<usize>>) {
        self.min_widths = widths.into();
    }

    /// Replaces the per-column maximum widths (0 = unconstrained).
    pub fn set_max_widths(&mut self, widths: impl Into<Vec<usize>>) {
        self.max_widths = widths.into();
    }

    /// Sets the callback that styles each padded cell.
    pub fn set_colorizer<F>(&mut self, colorizer: F)
    where
        F: Fn(usize, &str) -> String + 'a,
    {
        self.colorizer = Some(Box::new(colorizer));
    }

    // --- modifiers ---

    /// Appends a row.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Row = cells.into_iter().map(Into::into).collect();
        self.number_of_columns = self.number_of_columns.max(row.len());
        self.rows.push(row);
    }

    /// Removes all rows. Formatting options are kept.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.number_of_columns = 0;
    }

    // --- output ---

    /// Computes the width of every column.
    ///
    /// Returns an empty vector when the table has no rows.
    pub fn column_widths(&self) -> Vec<usize> {
        if self.rows.is_empty() {
            return Vec::new();
        }

        let columns = self.number_of_columns.max(self.min_widths.len());
        let mut widths = vec![0; columns];
        for (width, min) in widths.iter_mut().zip(&self.min_widths) {
            *width = *min;
        }

        for row in &self.rows {
            for (column, cell) in row.iter().enumerate() {
                widths[column] = widths[column].max(cell.len());
            }
        }

        for (width, max) in widths.iter_mut().zip(&self.max_widths) {
            if *max > 0 {
                *width = (*width).min(*max);
            }
        }
        widths
    }

    /// Writes every row to `out`, one line per row.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let widths = self.column_widths();
        for row in &self.rows {
            writeln!(out, "{}", self.format_row(row, &widths))?;
        }
        Ok(())
    }

    /// Renders the whole table into a string.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn format_row(&self, row: &[String], widths: &[usize]) -> String {
        let mut line = String::new();
        for (column, cell) in row.iter().enumerate() {
            if column > 0 {
                line.push_str(SEPARATOR);
            }
            let width = widths.get(column).copied().unwrap_or(0);
            let text = if width == 0 {
                cell.clone()
            } else {
                let align = self.alignments.get(column).copied().unwrap_or_default();
                align.apply(cell, width)
            };
            match &self.colorizer {
                Some(colorize) => line.push_str(&colorize(column, &text)),
                None => line.push_str(&text),
            }
        }
        line
    }
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        for row in &self.rows {
            writeln!(f, "{}", self.format_row(row, &widths))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("rows", &self.rows)
            .field("number_of_columns", &self.number_of_columns)
            .field("alignments", &self.alignments)
            .field("min_widths", &self.min_widths)
            .field("max_widths", &self.max_widths)
            .field("colorizer", &self.colorizer.is_some())
            .finish()
    }
}
