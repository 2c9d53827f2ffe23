//! Column descriptors for the vendor category list view.
//!
//! DESIGN
//! ======
//! A column is plain data: a logical id, an optional dot-path accessor into
//! the serialized row, an optional header, and a `CellRenderer` naming how
//! the cell is drawn. Nothing here depends on a UI runtime; a front end maps
//! `Cell` fragments onto its own widgets. Column order is significant and
//! matches left-to-right display order.

pub mod menu;
pub mod text;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::CategoryId;

pub use menu::{
    ActionInvocation, ActionMenu, MenuEntry, ROW_ACTION_MENU, RowAction, RowActions, RowMenu, UnwiredActions,
};
pub use text::render_text_table;

// =============================================================================
// COLUMN SPEC
// =============================================================================

/// How a cell's content is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRenderer {
    /// The accessed value, stringified.
    Text,
    /// The per-row edit/delete menu.
    RowActions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Logical column id. Equal to the accessor for data columns.
    pub id: &'static str,
    /// Dot-separated path into the row, e.g. `billboard.title`.
    pub accessor: Option<&'static str>,
    pub header: Option<&'static str>,
    pub renderer: CellRenderer,
}

impl ColumnSpec {
    /// A data column reading `path` and rendered as text.
    #[must_use]
    pub const fn accessor(path: &'static str, header: &'static str) -> Self {
        Self { id: path, accessor: Some(path), header: Some(header), renderer: CellRenderer::Text }
    }

    /// A computed column with no accessor or header.
    #[must_use]
    pub const fn display(id: &'static str, renderer: CellRenderer) -> Self {
        Self { id, accessor: None, header: None, renderer }
    }

    /// The accessor path, or the logical id for computed columns.
    #[must_use]
    pub fn accessor_path(&self) -> &'static str {
        self.accessor.unwrap_or(self.id)
    }

    #[must_use]
    pub fn value<'a>(&self, row: &'a Value) -> Option<&'a Value> {
        self.accessor.and_then(|path| resolve_path(row, path))
    }

    #[must_use]
    pub fn render(&self, row: &Value) -> Cell {
        match self.renderer {
            CellRenderer::Text => Cell::Text(display_value(self.value(row))),
            CellRenderer::RowActions => Cell::Menu(RowMenu {
                menu: ROW_ACTION_MENU,
                row_id: row.get(ROW_ID_FIELD).and_then(|id| CategoryId::deserialize(id).ok()),
            }),
        }
    }
}

/// Row field that identifies the row an action menu belongs to.
const ROW_ID_FIELD: &str = "id";

static CATEGORY_COLUMNS: [ColumnSpec; 5] = [
    ColumnSpec::accessor("id", "Id"),
    ColumnSpec::accessor("name", "Name"),
    ColumnSpec::accessor("billboard.title", "Billboard Title"),
    ColumnSpec::accessor("billboard.description", "Billboard Description"),
    ColumnSpec::display("actions", CellRenderer::RowActions),
];

/// Columns for the category list: id, name, billboard title, billboard
/// description, then the row action menu.
#[must_use]
pub fn category_columns() -> &'static [ColumnSpec] {
    &CATEGORY_COLUMNS
}

// =============================================================================
// CELLS
// =============================================================================

/// A rendered cell, independent of any widget toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Menu(RowMenu),
}

impl Cell {
    /// Plain-text form for terminal output. Menus show their entry labels.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Menu(row_menu) => row_menu.menu.labels().join(" / "),
        }
    }
}

/// Look up a dot-separated path. Numeric segments index into arrays.
#[must_use]
pub fn resolve_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, key| match current {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Render every row through `columns`, preserving column order.
///
/// # Errors
///
/// Returns an error if a row cannot be serialized to JSON.
pub fn render_rows<T: Serialize>(columns: &[ColumnSpec], rows: &[T]) -> Result<Vec<Vec<Cell>>, serde_json::Error> {
    let mut rendered = Vec::with_capacity(rows.len());
    for row in rows {
        let value = serde_json::to_value(row)?;
        rendered.push(columns.iter().map(|col| col.render(&value)).collect());
    }
    Ok(rendered)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
