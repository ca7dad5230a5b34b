//! Terminal display utilities for rendering lookup results.

use comfy_table::{Attribute, Cell, Table};
use std::io::{self, IsTerminal};
use terminal_size::terminal_size;
use unicode_width::UnicodeWidthChar;

use crate::models::{Field, Record};

/// Default width when terminal size cannot be determined.
pub const DEFAULT_WIDTH: usize = 100;

/// Get the current terminal width in characters.
pub fn terminal_width() -> usize {
    terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(DEFAULT_WIDTH)
}

/// Check if stdout is a terminal.
pub fn is_terminal() -> bool {
    io::stdout().is_terminal()
}

/// Truncate text to fit within `max_width` display columns.
///
/// Wide characters count as two columns. An ellipsis is appended when
/// anything was cut.
///
/// ```
/// use paper_lookup::utils::truncate_with_ellipsis;
///
/// assert_eq!(truncate_with_ellipsis("Hello World", 8), "Hello...");
/// assert_eq!(truncate_with_ellipsis("Hi", 8), "Hi");
/// ```
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let width = |c: char| c.width().unwrap_or(1);
    let total: usize = text.chars().map(width).sum();
    if total <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut used = 0;
    let kept: String = text
        .chars()
        .take_while(|&c| {
            used += width(c);
            used <= budget
        })
        .collect();

    format!("{}...", kept)
}

/// Column widths for the record table: (title, author, year, link).
pub fn record_table_columns(terminal_width: usize) -> (usize, usize, usize, usize) {
    // borders and padding take roughly three columns per cell
    let available = terminal_width.saturating_sub(13).max(40);
    let year = 6;
    let title = (available - year) * 45 / 100;
    let author = (available - year) * 30 / 100;
    let link = available - year - title - author;

    (title, author, year, link)
}

/// Render records as a table sized to `width`.
pub fn render_table(records: &[&Record], width: usize) -> String {
    let (title_w, author_w, year_w, link_w) = record_table_columns(width);
    let widths = [title_w, author_w, year_w, link_w];

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(Field::ALL.iter().map(|field| field.name()).collect::<Vec<_>>());

    for record in records {
        let cells: Vec<Cell> = Field::ALL
            .iter()
            .zip(widths)
            .map(|(&field, max_width)| {
                let cell = Cell::new(truncate_with_ellipsis(record.get(field), max_width));
                if field == Field::Title {
                    cell.add_attribute(Attribute::Bold)
                } else {
                    cell
                }
            })
            .collect();
        table.add_row(cells);
    }

    table.to_string()
}

/// Render records as labelled plain-text blocks separated by blank lines.
pub fn render_plain(records: &[&Record]) -> String {
    records
        .iter()
        .map(|record| {
            Field::ALL
                .iter()
                .map(|&field| format!("{}: {}\n", field.name(), record.get(field)))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
