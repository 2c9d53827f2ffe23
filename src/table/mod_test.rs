use super::*;
use crate::model::{Billboard, Category, CategoryId};
use serde_json::json;

fn shoes() -> Category {
    Category {
        id: CategoryId::from("c1"),
        name: "Shoes".to_owned(),
        billboard: Some(Billboard::new("Summer", "Sale")),
    }
}

// =============================================================================
// LAYOUT
// =============================================================================

#[test]
fn category_columns_are_fixed_and_ordered() {
    let paths: Vec<&str> = category_columns().iter().map(ColumnSpec::accessor_path).collect();
    assert_eq!(paths, ["id", "name", "billboard.title", "billboard.description", "actions"]);
}

#[test]
fn category_column_headers() {
    let headers: Vec<Option<&str>> = category_columns().iter().map(|c| c.header).collect();
    assert_eq!(
        headers,
        [Some("Id"), Some("Name"), Some("Billboard Title"), Some("Billboard Description"), None]
    );
}

#[test]
fn only_the_trailing_column_renders_actions() {
    let columns = category_columns();
    assert_eq!(columns[4].renderer, CellRenderer::RowActions);
    assert_eq!(columns[4].accessor, None);
    assert!(columns[..4].iter().all(|c| c.renderer == CellRenderer::Text));
}

#[test]
fn category_columns_is_static() {
    assert!(std::ptr::eq(category_columns(), category_columns()));
}

#[test]
fn every_accessor_resolves_against_a_category() {
    let row = serde_json::to_value(shoes()).unwrap();
    for col in category_columns().iter().filter(|c| c.accessor.is_some()) {
        assert!(col.value(&row).is_some(), "unresolved accessor {}", col.accessor_path());
    }
}

// =============================================================================
// PATHS
// =============================================================================

#[test]
fn resolve_path_walks_nested_objects() {
    let row = json!({ "billboard": { "title": "Summer" } });
    assert_eq!(resolve_path(&row, "billboard.title"), Some(&json!("Summer")));
}

#[test]
fn resolve_path_indexes_arrays() {
    let row = json!({ "tags": ["a", "b"] });
    assert_eq!(resolve_path(&row, "tags.1"), Some(&json!("b")));
    assert_eq!(resolve_path(&row, "tags.x"), None);
}

#[test]
fn resolve_path_missing_segments() {
    let row = json!({ "billboard": null, "name": "Shoes" });
    assert_eq!(resolve_path(&row, "billboard.title"), None);
    assert_eq!(resolve_path(&row, "name.first"), None);
    assert_eq!(resolve_path(&row, "nope"), None);
}

// =============================================================================
// RENDERING
// =============================================================================

#[test]
fn render_rows_produces_text_then_menu() {
    let rows = render_rows(category_columns(), &[shoes()]).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        vec![
            Cell::Text("c1".to_owned()),
            Cell::Text("Shoes".to_owned()),
            Cell::Text("Summer".to_owned()),
            Cell::Text("Sale".to_owned()),
            Cell::Menu(RowMenu { menu: ROW_ACTION_MENU, row_id: Some(CategoryId::from("c1")) }),
        ]
    );
}

#[test]
fn missing_billboard_renders_empty_cells() {
    let row = Category { billboard: None, ..shoes() };
    let rows = render_rows(category_columns(), &[row]).unwrap();
    assert_eq!(rows[0][2], Cell::Text(String::new()));
    assert_eq!(rows[0][3], Cell::Text(String::new()));
}

#[test]
fn non_string_values_use_display_form() {
    let col = ColumnSpec::accessor("count", "Count");
    assert_eq!(col.render(&json!({ "count": 3 })), Cell::Text("3".to_owned()));
    assert_eq!(col.render(&json!({ "count": true })), Cell::Text("true".to_owned()));
    assert_eq!(col.render(&json!({ "count": null })), Cell::Text(String::new()));
}

#[test]
fn render_rows_accepts_raw_json_rows() {
    let rows = vec![json!({ "id": 42, "name": "Hats" })];
    let rendered = render_rows(category_columns(), &rows).unwrap();
    assert_eq!(rendered[0][0], Cell::Text("42".to_owned()));
    assert_eq!(rendered[0][1], Cell::Text("Hats".to_owned()));
}

#[test]
fn menu_cell_text_lists_entry_labels() {
    let cell = Cell::Menu(RowMenu { menu: ROW_ACTION_MENU, row_id: None });
    assert_eq!(cell.to_text(), "Edit / Delete");
}

#[test]
fn null_billboard_fields_render_empty() {
    let row = Category { billboard: Some(Billboard { title: Some("T".to_owned()), description: None }), ..shoes() };
    let rows = render_rows(category_columns(), &[row]).unwrap();
    assert_eq!(rows[0][2], Cell::Text("T".to_owned()));
    assert_eq!(rows[0][3], Cell::Text(String::new()));
}

#[test]
fn numeric_ids_render_and_bind_menu() {
    let row = Category { id: CategoryId::from(12_i64), ..shoes() };
    let rows = render_rows(category_columns(), &[row]).unwrap();
    assert_eq!(rows[0][0], Cell::Text("12".to_owned()));
    assert_eq!(rows[0][4], Cell::Menu(RowMenu { menu: ROW_ACTION_MENU, row_id: Some(CategoryId::Number(12)) }));
}

#[test]
fn menu_without_readable_id_is_unbound() {
    let rows = render_rows(category_columns(), &[json!({ "name": "Orphan" })]).unwrap();
    assert_eq!(rows[0][4], Cell::Menu(RowMenu { menu: ROW_ACTION_MENU, row_id: None }));
}

#[test]
fn rendered_menu_activates_its_own_row() {
    let rows = vec![shoes(), Category { id: CategoryId::from(2_i64), name: "Hats".to_owned(), billboard: None }];
    let cells = render_rows(category_columns(), &rows).unwrap();
    let Cell::Menu(menu) = &cells[1][4] else {
        panic!("expected menu cell, got {:?}", cells[1][4]);
    };

    let handlers = UnwiredActions::new();
    assert!(menu.activate(RowAction::Delete, &rows, &handlers));
    assert_eq!(
        handlers.invocations(),
        [ActionInvocation { action: RowAction::Delete, row_id: CategoryId::Number(2) }]
    );
}

#[test]
fn rendered_menu_ignores_rows_that_are_gone() {
    let cells = render_rows(category_columns(), &[shoes()]).unwrap();
    let Cell::Menu(menu) = &cells[0][4] else {
        panic!("expected menu cell");
    };

    let handlers = UnwiredActions::new();
    assert!(!menu.activate(RowAction::Edit, &[], &handlers));
    assert!(handlers.invocations().is_empty());
}
