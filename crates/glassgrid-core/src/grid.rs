//! The layout model: a [`Grid`] of rectangular [`Cell`]s.
//!
//! Both types serialize to the camelCase JSON shape consumed by renderers and
//! exporters:
//!
//! ```json
//! {
//!   "id": "grid-1",
//!   "name": "Dashboard",
//!   "rows": 4,
//!   "cols": 12,
//!   "gap": 16,
//!   "cells": [
//!     { "id": "cell-1", "row": 0, "col": 0, "rowSpan": 2, "colSpan": 6, "componentId": "stat-card" }
//!   ]
//! }
//! ```
//!
//! Partial updates are expressed with [`CellPatch`] and [`LayoutSettings`];
//! new cells are described by [`CellSpec`].

use serde::{Deserialize, Deserializer, Serialize};

use crate::{content::Content, geometry::GridArea, identifier::Id};

/// A rectangular placement slot, optionally occupied by a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    id: Id,

    #[serde(flatten)]
    area: GridArea,

    /// Template occupying the cell; `None` means the slot is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    component_id: Option<Id>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<Content>,

    /// Visual clustering tag. Carries no ownership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    group_id: Option<Id>,
}

impl Cell {
    /// Creates an empty cell covering `area`.
    pub fn new(id: Id, area: GridArea) -> Self {
        Self {
            id,
            area,
            component_id: None,
            content: None,
            group_id: None,
        }
    }

    /// Sets the occupying component (builder style).
    pub fn with_component(mut self, component_id: Id, content: Option<Content>) -> Self {
        self.component_id = Some(component_id);
        self.content = content;
        self
    }

    /// Sets the group tag (builder style).
    pub fn with_group(mut self, group_id: Id) -> Self {
        self.group_id = Some(group_id);
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn area(&self) -> GridArea {
        self.area
    }

    pub fn component_id(&self) -> Option<Id> {
        self.component_id
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    pub fn group_id(&self) -> Option<Id> {
        self.group_id
    }

    /// Returns true if a component occupies the cell.
    pub fn has_component(&self) -> bool {
        self.component_id.is_some()
    }

    pub fn set_id(&mut self, id: Id) {
        self.id = id;
    }

    pub fn set_area(&mut self, area: GridArea) {
        self.area = area;
    }

    /// Replaces the occupant and its payload.
    pub fn set_component(&mut self, component_id: Option<Id>, content: Option<Content>) {
        self.component_id = component_id;
        self.content = content;
    }

    /// Removes the occupant, keeping the cell's geometry.
    pub fn clear_component(&mut self) {
        self.component_id = None;
        self.content = None;
    }

    /// Takes the occupant out of the cell, leaving it empty.
    pub fn take_component(&mut self) -> (Option<Id>, Option<Content>) {
        (self.component_id.take(), self.content.take())
    }

    pub fn set_group(&mut self, group_id: Option<Id>) {
        self.group_id = group_id;
    }
}

/// The layout under edit.
///
/// Cell order carries no meaning. `rows` and `cols` are always at least one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    id: Id,
    name: String,
    rows: u32,
    cols: u32,
    gap: u32,
    #[serde(default)]
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an empty grid. Zero `rows` or `cols` are clamped to one.
    pub fn new(id: Id, name: impl Into<String>, rows: u32, cols: u32, gap: u32) -> Self {
        Self {
            id,
            name: name.into(),
            rows: rows.max(1),
            cols: cols.max(1),
            gap,
            cells: Vec::new(),
        }
    }

    /// Adds a cell (builder style).
    pub fn with_cell(mut self, cell: Cell) -> Self {
        self.cells.push(cell);
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn gap(&self) -> u32 {
        self.gap
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Looks up a cell by identifier.
    pub fn cell(&self, id: Id) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.id == id)
    }

    pub fn cell_mut(&mut self, id: Id) -> Option<&mut Cell> {
        self.cells.iter_mut().find(|cell| cell.id == id)
    }

    pub fn contains_cell(&self, id: Id) -> bool {
        self.cell(id).is_some()
    }

    /// Appends a cell without any overlap check.
    pub fn push_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Removes a cell, returning it if it existed.
    pub fn remove_cell(&mut self, id: Id) -> Option<Cell> {
        let idx = self.cells.iter().position(|cell| cell.id == id)?;
        Some(self.cells.remove(idx))
    }

    pub fn retain_cells(&mut self, keep: impl FnMut(&Cell) -> bool) {
        self.cells.retain(keep);
    }

    /// The farthest row reached by any cell (`max(row + row_span)`), or zero
    /// for an empty grid.
    pub fn content_extent(&self) -> u32 {
        self.cells
            .iter()
            .map(|cell| cell.area.row_end())
            .max()
            .unwrap_or(0)
    }

    pub fn set_id(&mut self, id: Id) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_rows(&mut self, rows: u32) {
        self.rows = rows.max(1);
    }

    pub fn set_cols(&mut self, cols: u32) {
        self.cols = cols.max(1);
    }

    pub fn set_gap(&mut self, gap: u32) {
        self.gap = gap;
    }
}

/// Description of a cell to be added; the identifier is assigned by the engine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellSpec {
    #[serde(flatten)]
    area: GridArea,
    #[serde(default)]
    component_id: Option<Id>,
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    group_id: Option<Id>,
}

impl CellSpec {
    pub fn new(area: GridArea) -> Self {
        Self {
            area,
            ..Self::default()
        }
    }

    pub fn with_component(mut self, component_id: Id, content: Option<Content>) -> Self {
        self.component_id = Some(component_id);
        self.content = content;
        self
    }

    pub fn with_group(mut self, group_id: Id) -> Self {
        self.group_id = Some(group_id);
        self
    }

    pub fn area(&self) -> GridArea {
        self.area
    }

    /// Materializes the spec into a cell with the given identifier.
    pub fn into_cell(self, id: Id) -> Cell {
        Cell {
            id,
            area: self.area,
            component_id: self.component_id,
            content: self.content,
            group_id: self.group_id,
        }
    }
}

/// A partial update merged into an existing cell.
///
/// Unset fields leave the cell untouched. For the optional attributes,
/// `Some(None)` clears the value.
///
/// # Examples
///
/// ```
/// # use glassgrid_core::{grid::{Cell, CellPatch}, geometry::GridArea, identifier::Id};
/// let mut cell = Cell::new(Id::new("c"), GridArea::new(0, 0, 1, 1));
/// CellPatch::new().with_row_span(3).with_col(4).apply(&mut cell);
///
/// assert_eq!(cell.area(), GridArea::new(0, 4, 3, 1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellPatch {
    #[serde(default)]
    row: Option<u32>,
    #[serde(default)]
    col: Option<u32>,
    #[serde(default)]
    row_span: Option<u32>,
    #[serde(default)]
    col_span: Option<u32>,
    #[serde(default, deserialize_with = "double_option")]
    component_id: Option<Option<Id>>,
    #[serde(default, deserialize_with = "double_option")]
    content: Option<Option<Content>>,
    #[serde(default, deserialize_with = "double_option")]
    group_id: Option<Option<Id>>,
}

impl CellPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row(mut self, row: u32) -> Self {
        self.row = Some(row);
        self
    }

    pub fn with_col(mut self, col: u32) -> Self {
        self.col = Some(col);
        self
    }

    pub fn with_row_span(mut self, row_span: u32) -> Self {
        self.row_span = Some(row_span);
        self
    }

    pub fn with_col_span(mut self, col_span: u32) -> Self {
        self.col_span = Some(col_span);
        self
    }

    pub fn with_component_id(mut self, component_id: Option<Id>) -> Self {
        self.component_id = Some(component_id);
        self
    }

    pub fn with_content(mut self, content: Option<Content>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_group_id(mut self, group_id: Option<Id>) -> Self {
        self.group_id = Some(group_id);
        self
    }

    /// Returns true if the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges the patch into `cell`. Spans stay at least one.
    pub fn apply(&self, cell: &mut Cell) {
        let area = cell.area;
        let anchored = GridArea::new(
            self.row.unwrap_or(area.row()),
            self.col.unwrap_or(area.col()),
            self.row_span.unwrap_or(area.row_span()),
            self.col_span.unwrap_or(area.col_span()),
        );
        cell.area = anchored;

        if let Some(component_id) = self.component_id {
            cell.component_id = component_id;
        }
        if let Some(content) = &self.content {
            cell.content = content.clone();
        }
        if let Some(group_id) = self.group_id {
            cell.group_id = group_id;
        }
    }
}

/// A partial update of the grid-level settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSettings {
    #[serde(default)]
    pub rows: Option<u32>,
    #[serde(default)]
    pub cols: Option<u32>,
    #[serde(default)]
    pub gap: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
}

impl LayoutSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn with_cols(mut self, cols: u32) -> Self {
        self.cols = Some(cols);
        self
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = Some(gap);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_grid() -> Grid {
        Grid::new(Id::new("g"), "Sample", 4, 12, 16)
            .with_cell(Cell::new(Id::new("a"), GridArea::new(0, 0, 2, 6)))
            .with_cell(
                Cell::new(Id::new("b"), GridArea::new(2, 6, 3, 6))
                    .with_component(Id::new("chart"), Some(Content::new().with("kind", json!("bar")))),
            )
    }

    #[test]
    fn test_new_clamps_dimensions() {
        let grid = Grid::new(Id::new("g"), "Empty", 0, 0, 0);
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.cols(), 1);
    }

    #[test]
    fn test_content_extent() {
        assert_eq!(sample_grid().content_extent(), 5);
        assert_eq!(Grid::new(Id::new("g"), "Empty", 4, 12, 0).content_extent(), 0);
    }

    #[test]
    fn test_remove_cell() {
        let mut grid = sample_grid();
        let removed = grid.remove_cell(Id::new("a")).unwrap();
        assert_eq!(removed.id(), "a");
        assert_eq!(grid.len(), 1);
        assert!(grid.remove_cell(Id::new("a")).is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let grid = sample_grid();
        let value = serde_json::to_value(&grid).unwrap();

        assert_eq!(value["rows"], json!(4));
        assert_eq!(value["cells"][0], json!({
            "id": "a", "row": 0, "col": 0, "rowSpan": 2, "colSpan": 6
        }));
        assert_eq!(value["cells"][1]["componentId"], json!("chart"));
        assert_eq!(value["cells"][1]["content"], json!({ "kind": "bar" }));
    }

    #[test]
    fn test_deserialize_round_trip() {
        let grid = sample_grid();
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_patch_clears_with_explicit_null() {
        let mut cell = sample_grid().cell(Id::new("b")).cloned().unwrap();
        let patch: CellPatch =
            serde_json::from_value(json!({ "componentId": null, "colSpan": 2 })).unwrap();
        patch.apply(&mut cell);

        assert_eq!(cell.component_id(), None);
        assert!(cell.content().is_some());
        assert_eq!(cell.area(), GridArea::new(2, 6, 3, 2));
    }

    #[test]
    fn test_patch_missing_fields_leave_cell_untouched() {
        let original = sample_grid().cell(Id::new("b")).cloned().unwrap();
        let mut cell = original.clone();
        let patch: CellPatch = serde_json::from_value(json!({})).unwrap();
        assert!(patch.is_empty());
        patch.apply(&mut cell);
        assert_eq!(cell, original);
    }

    #[test]
    fn test_patch_keeps_spans_positive() {
        let mut cell = Cell::new(Id::new("c"), GridArea::new(1, 1, 2, 2));
        CellPatch::new().with_row_span(0).apply(&mut cell);
        assert_eq!(cell.area().row_span(), 1);
    }

    #[test]
    fn test_spec_rejects_zero_span() {
        let spec: CellSpec =
            serde_json::from_value(json!({ "row": 1, "col": 0, "rowSpan": 2, "colSpan": 3 }))
                .unwrap();
        assert_eq!(spec.area(), GridArea::new(1, 0, 2, 3));

        let zero = json!({ "row": 0, "col": 0, "rowSpan": 0, "colSpan": 0 });
        assert!(serde_json::from_value::<CellSpec>(zero).is_err());
    }
}
