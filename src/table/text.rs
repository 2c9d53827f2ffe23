//! Terminal rendering of a column layout via `comfy-table`.

use comfy_table::{Attribute, Cell as TableCell, ContentArrangement, Table};
use serde::Serialize;

use super::{ColumnSpec, render_rows};

/// Build a text table with one header cell per column and one line per row.
/// Computed columns without a header get an empty header cell.
///
/// # Errors
///
/// Returns an error if a row cannot be serialized to JSON.
pub fn render_text_table<T: Serialize>(columns: &[ColumnSpec], rows: &[T]) -> Result<Table, serde_json::Error> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let headers: Vec<TableCell> = columns
        .iter()
        .map(|col| TableCell::new(col.header.unwrap_or_default()).add_attribute(Attribute::Bold))
        .collect();
    table.set_header(headers);

    for cells in render_rows(columns, rows)? {
        let line: Vec<String> = cells.iter().map(super::Cell::to_text).collect();
        table.add_row(line);
    }
    Ok(table)
}

#[cfg(test)]
#[path = "text_test.rs"]
mod tests;
