//! Shared utilities for CLI commands.

use chrono::{Duration, NaiveDate};

/// Expands the `today` and `yesterday` shorthands to `YYYY-MM-DD`.
///
/// Any other value is returned unchanged; dates are free text on a draft row.
pub fn resolve_date(value: &str, today: NaiveDate) -> String {
    match value.trim().to_ascii_lowercase().as_str() {
        "today" => today.format("%Y-%m-%d").to_string(),
        "yesterday" => (today - Duration::days(1)).format("%Y-%m-%d").to_string(),
        _ => value.to_string(),
    }
}

/// Today's date in the local timezone.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Lays out rows as space-padded columns separated by two spaces.
///
/// Columns listed in `right_aligned` are padded on the left. Trailing
/// whitespace is trimmed from every line.
pub fn render_table(header: &[&str], rows: &[Vec<String>], right_aligned: &[usize]) -> Vec<String> {
    let mut widths: Vec<usize> = header.iter().map(|cell| cell.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_line(header.iter().copied(), &widths, right_aligned));
    for row in rows {
        lines.push(render_line(row.iter().map(String::as_str), &widths, right_aligned));
    }
    lines
}

fn render_line<'a>(
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
    right_aligned: &[usize],
) -> String {
    let mut line = String::new();
    for (index, (cell, width)) in cells.zip(widths).enumerate() {
        if index > 0 {
            line.push_str("  ");
        }
        let padding = " ".repeat(width.saturating_sub(cell.chars().count()));
        if right_aligned.contains(&index) {
            line.push_str(&padding);
            line.push_str(cell);
        } else {
            line.push_str(cell);
            line.push_str(&padding);
        }
    }
    line.truncate(line.trim_end().len());
    line
}
