//! Plain-text results table.

use bizfind_core::{display_rows, Business, DISPLAY_COLUMNS};

const COLUMN_GAP: &str = "  ";

/// Renders `results` as a left-aligned table with a header and a rule line.
pub(crate) fn render_table(results: &[Business]) -> String {
    let rows = display_rows(results);

    let mut widths = DISPLAY_COLUMNS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, DISPLAY_COLUMNS, &widths);
    let rule = widths.map(|w| "-".repeat(w));
    push_line(&mut out, rule.each_ref().map(String::as_str), &widths);
    for row in &rows {
        push_line(&mut out, row.cells(), &widths);
    }
    out
}

fn push_line(out: &mut String, cells: [&str; 6], widths: &[usize; 6]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    out.push_str(line.trim_end());
    out.push('\n');
}
