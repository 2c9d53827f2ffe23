//! Row action menu and the command interface it dispatches to.
//!
//! Edit and delete have no backend wiring yet. `UnwiredActions` stands in
//! for real handlers: it does nothing except log and remember that it was
//! reached.

use std::sync::{Mutex, PoisonError};

use crate::model::{Category, CategoryId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

impl RowAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Action(RowAction),
    Separator,
}

impl MenuEntry {
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Action(action) => Some(action.label()),
            Self::Separator => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionMenu {
    /// Accessible label of the button that opens the menu.
    pub trigger_label: &'static str,
    pub entries: &'static [MenuEntry],
}

pub const ROW_ACTION_MENU: ActionMenu = ActionMenu {
    trigger_label: "Open menu",
    entries: &[MenuEntry::Action(RowAction::Edit), MenuEntry::Separator, MenuEntry::Action(RowAction::Delete)],
};

impl ActionMenu {
    /// Labels of the actionable entries, in menu order.
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().filter_map(|entry| entry.label()).collect()
    }

    /// Dispatch `action` for `row` to `handlers`. Returns `false` without
    /// dispatching if the menu has no such entry.
    pub fn activate(&self, action: RowAction, row: &Category, handlers: &dyn RowActions) -> bool {
        if !self.entries.contains(&MenuEntry::Action(action)) {
            return false;
        }
        match action {
            RowAction::Edit => handlers.on_edit(row),
            RowAction::Delete => handlers.on_delete(row),
        }
        true
    }
}

/// The action menu as rendered for one row. Carries the id read from the
/// row so activation reaches the row the menu was drawn for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowMenu {
    pub menu: ActionMenu,
    /// `None` when the row had no readable `id`.
    pub row_id: Option<CategoryId>,
}

impl RowMenu {
    /// Find this menu's row in `rows` and dispatch `action` for it. Returns
    /// `false` when the row is gone, the id is unknown, or the menu lacks
    /// the action.
    pub fn activate(&self, action: RowAction, rows: &[Category], handlers: &dyn RowActions) -> bool {
        let Some(row_id) = &self.row_id else {
            return false;
        };
        rows.iter()
            .find(|row| &row.id == row_id)
            .is_some_and(|row| self.menu.activate(action, row, handlers))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// Handlers invoked from the row action menu.
pub trait RowActions {
    fn on_edit(&self, row: &Category);
    fn on_delete(&self, row: &Category);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionInvocation {
    pub action: RowAction,
    pub row_id: CategoryId,
}

/// Default handlers: no side effect beyond a debug event and an entry in
/// the invocation log.
#[derive(Debug, Default)]
pub struct UnwiredActions {
    invocations: Mutex<Vec<ActionInvocation>>,
}

impl UnwiredActions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn invocations(&self) -> Vec<ActionInvocation> {
        self.invocations.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn record(&self, action: RowAction, row: &Category) {
        tracing::debug!(action = action.label(), row_id = %row.id, "row action has no handler");
        self.invocations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ActionInvocation { action, row_id: row.id.clone() });
    }
}

impl RowActions for UnwiredActions {
    fn on_edit(&self, row: &Category) {
        self.record(RowAction::Edit, row);
    }

    fn on_delete(&self, row: &Category) {
        self.record(RowAction::Delete, row);
    }
}

#[cfg(test)]
#[path = "menu_test.rs"]
mod tests;
