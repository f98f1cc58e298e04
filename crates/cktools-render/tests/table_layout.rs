//! Layout properties of the table engine.

use cktools_render::{Align, Palette, StyleName, Table};
use proptest::prelude::*;

fn rows_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-z0-9]{0,8}", 1..5), 1..8)
}

fn align_strategy() -> impl Strategy<Value = Align> {
    prop_oneof![Just(Align::Left), Just(Align::Right), Just(Align::Center)]
}

proptest! {
    /// Every column is at least as wide as its longest cell when unbounded.
    #[test]
    fn widths_cover_content(rows in rows_strategy()) {
        let table = Table::from_rows(rows.clone());
        let widths = table.column_widths();
        for row in &rows {
            for (column, cell) in row.iter().enumerate() {
                prop_assert!(widths[column] >= cell.len());
            }
        }
    }

    /// A positive maximum is never exceeded.
    #[test]
    fn max_width_is_a_hard_cap(rows in rows_strategy(), max in 1usize..6) {
        let mut table = Table::from_rows(rows);
        table.set_max_widths(vec![max; 5]);
        for width in table.column_widths() {
            prop_assert!(width <= max);
        }
    }

    /// Rendering emits one line per row, and fully populated rows line up.
    #[test]
    fn rows_render_as_lines(
        rows in rows_strategy(),
        aligns in prop::collection::vec(align_strategy(), 0..5),
    ) {
        let mut table = Table::from_rows(rows.clone());
        table.set_alignments(aligns);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        prop_assert_eq!(lines.len(), rows.len());

        let widths = table.column_widths();
        let full_width: usize = widths.iter().sum::<usize>() + widths.len() - 1;
        for (line, row) in lines.iter().zip(&rows) {
            if row.len() == widths.len() {
                prop_assert_eq!(line.len(), full_width);
            }
        }
    }
}

#[test]
fn tensor_listing_layout() {
    let palette = Palette::disabled();
    let mut table = Table::new();
    table.set_alignments([Align::Right, Align::Right, Align::Left]);
    table.set_colorizer(move |column, text| match column {
        0 => palette.paint(StyleName::Data, text),
        1 => palette.paint(StyleName::Data2, text),
        _ => palette.paint(StyleName::Primary, text),
    });
    table.add_row(["[320]", "F32", "conv_in.bias"]);
    table.add_row(["[320,4,3,3]", "F16", "conv_in.weight"]);

    assert_eq!(
        table.render(),
        "      [320] F32 conv_in.bias  \n[320,4,3,3] F16 conv_in.weight\n"
    );
}

#[test]
fn colorizer_wraps_each_cell() {
    let palette = Palette::enabled();
    let mut table = Table::new();
    table.set_colorizer(move |_, text| palette.paint(StyleName::Primary, text));
    table.add_row(["a", "b"]);

    let rendered = table.render();
    assert_eq!(rendered.matches("\x1b[0m").count(), 2);
    assert!(rendered.ends_with('\n'));
}
