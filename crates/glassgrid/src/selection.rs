//! Transient selection state.
//!
//! Selection is not part of the grid and is not versioned by the history.

use indexmap::IndexSet;

use glassgrid_core::{grid::Grid, identifier::Id};

/// The focused cell plus an optional multi-selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    focused: Option<Id>,
    selected: IndexSet<Id>,
    group: Option<Id>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The focused cell, if any.
    pub fn focused(&self) -> Option<Id> {
        self.focused
    }

    /// Multi-selected cells in selection order.
    pub fn selected(&self) -> impl Iterator<Item = Id> + '_ {
        self.selected.iter().copied()
    }

    pub fn selected_len(&self) -> usize {
        self.selected.len()
    }

    /// Group shared by the multi-selected cells, if they were grouped.
    pub fn group(&self) -> Option<Id> {
        self.group
    }

    pub fn is_selected(&self, id: Id) -> bool {
        self.focused == Some(id) || self.selected.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.focused.is_none() && self.selected.is_empty()
    }

    /// Focuses a single cell, dropping any multi-selection.
    pub fn focus(&mut self, id: Option<Id>) {
        self.focused = id;
        self.selected.clear();
        self.group = None;
    }

    /// Adds `id` to the multi-selection or removes it if already present.
    ///
    /// A previously focused cell joins the multi-selection first, so
    /// focus-then-toggle selects both.
    pub fn toggle(&mut self, id: Id) {
        if let Some(focused) = self.focused {
            self.selected.insert(focused);
        }
        if self.selected.shift_remove(&id) {
            self.focused = self.selected.last().copied();
        } else {
            self.selected.insert(id);
            self.focused = Some(id);
        }
        self.group = None;
    }

    pub fn set_group(&mut self, group: Option<Id>) {
        self.group = group;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Drops references to cells that no longer exist in `grid`.
    pub fn retain_existing(&mut self, grid: &Grid) {
        if self.focused.is_some_and(|id| !grid.contains_cell(id)) {
            self.focused = None;
        }
        self.selected.retain(|id| grid.contains_cell(*id));
        if self.selected.is_empty() {
            self.group = None;
        }
    }
}
