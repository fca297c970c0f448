//! Placement and mutation transforms.
//!
//! Every function takes the current grid by reference and returns a new grid,
//! or an [`EditError`] when the arguments are invalid. The input grid is
//! never modified.
//!
//! Only [`swap_cells`] validates the non-overlap invariant. [`add_cell`] and
//! [`update_cell`] trust the caller to have picked a free region (see
//! [`GridQuery::find_free_region`]) or clamped the new spans (see
//! [`clamp_spans`]).

use log::{debug, warn};

use glassgrid_core::{
    content::Content,
    geometry::{GridArea, GridPoint},
    grid::{CellPatch, CellSpec, Grid, LayoutSettings},
    identifier::Id,
};

use crate::{error::EditError, query::GridQuery};

/// Appends a new cell built from `spec`. No overlap check.
pub fn add_cell(grid: &Grid, id: Id, spec: CellSpec) -> Grid {
    let mut next = grid.clone();
    next.push_cell(spec.into_cell(id));
    next
}

/// Merges `patch` into the cell `id`. No overlap check.
pub fn update_cell(grid: &Grid, id: Id, patch: &CellPatch) -> Result<Grid, EditError> {
    let mut next = grid.clone();
    let cell = next.cell_mut(id).ok_or(EditError::UnknownCell(id))?;
    patch.apply(cell);
    Ok(next)
}

/// Deletes the cell `id`.
pub fn remove_cell(grid: &Grid, id: Id) -> Result<Grid, EditError> {
    let mut next = grid.clone();
    next.remove_cell(id).ok_or(EditError::UnknownCell(id))?;
    Ok(next)
}

/// Empties the cell `id`, keeping its geometry.
pub fn clear_cell(grid: &Grid, id: Id) -> Result<Grid, EditError> {
    let mut next = grid.clone();
    next.cell_mut(id)
        .ok_or(EditError::UnknownCell(id))?
        .clear_component();
    Ok(next)
}

/// Puts `component_id` with `content` into the cell `cell_id`, replacing any
/// previous occupant.
pub fn place_component(
    grid: &Grid,
    cell_id: Id,
    component_id: Id,
    content: Option<Content>,
) -> Result<Grid, EditError> {
    let mut next = grid.clone();
    next.cell_mut(cell_id)
        .ok_or(EditError::UnknownCell(cell_id))?
        .set_component(Some(component_id), content);
    Ok(next)
}

/// Moves the occupant of `from` into `to`, leaving `from` empty.
pub fn move_component(grid: &Grid, from: Id, to: Id) -> Result<Grid, EditError> {
    if from == to {
        return Err(EditError::SameCell(from));
    }
    if !grid.contains_cell(to) {
        return Err(EditError::UnknownCell(to));
    }

    let mut next = grid.clone();
    let source = next.cell_mut(from).ok_or(EditError::UnknownCell(from))?;
    if !source.has_component() {
        return Err(EditError::EmptySource(from));
    }
    let (component_id, content) = source.take_component();

    if let Some(target) = next.cell_mut(to) {
        target.set_component(component_id, content);
    }
    Ok(next)
}

/// Exchanges the anchors (not the spans) of two cells.
///
/// The result is checked for overlap across the whole grid; an overlapping
/// result is discarded with [`EditError::Overlap`].
pub fn swap_cells(grid: &Grid, first: Id, second: Id) -> Result<Grid, EditError> {
    if first == second {
        return Err(EditError::SameCell(first));
    }
    let first_area = grid.cell(first).ok_or(EditError::UnknownCell(first))?.area();
    let second_area = grid
        .cell(second)
        .ok_or(EditError::UnknownCell(second))?
        .area();

    let mut next = grid.clone();
    if let Some(cell) = next.cell_mut(first) {
        cell.set_area(first_area.with_anchor(second_area.anchor()));
    }
    if let Some(cell) = next.cell_mut(second) {
        cell.set_area(second_area.with_anchor(first_area.anchor()));
    }

    if let Some((a, b)) = next.overlapping_pair() {
        warn!(first:%, second:%, overlap_a:% = a, overlap_b:% = b; "Swap discarded, result would overlap");
        return Err(EditError::Overlap {
            first: a,
            second: b,
        });
    }
    Ok(next)
}

/// Applies grid-level settings.
///
/// Shrinking `rows` or `cols` drops every cell whose anchor falls outside the
/// new bound and clamps the spans of the survivors.
pub fn update_layout_settings(grid: &Grid, settings: &LayoutSettings) -> Grid {
    let mut next = grid.clone();
    if let Some(name) = &settings.name {
        next.set_name(name.clone());
    }
    if let Some(gap) = settings.gap {
        next.set_gap(gap);
    }
    if let Some(rows) = settings.rows {
        next.set_rows(rows);
    }
    if let Some(cols) = settings.cols {
        next.set_cols(cols);
    }

    if settings.rows.is_some() || settings.cols.is_some() {
        let (rows, cols) = (next.rows(), next.cols());
        let before = next.len();
        next.retain_cells(|cell| cell.area().clip_to(rows, cols).is_some());
        for cell in next.cells_mut() {
            if let Some(clipped) = cell.area().clip_to(rows, cols) {
                cell.set_area(clipped);
            }
        }
        let dropped = before - next.len();
        if dropped > 0 {
            debug!(rows, cols, dropped; "Resize clipped cells");
        }
    }
    next
}

/// Sets (or clears) the group tag of every listed cell.
pub fn set_group(grid: &Grid, ids: &[Id], group_id: Option<Id>) -> Result<Grid, EditError> {
    let mut next = grid.clone();
    for &id in ids {
        next.cell_mut(id)
            .ok_or(EditError::UnknownCell(id))?
            .set_group(group_id);
    }
    Ok(next)
}

/// Clamps requested spans for a cell anchored at `anchor` so the cell ends
/// within the declared grid: `span <= extent - anchor`, never below one.
pub fn clamp_spans(grid: &Grid, anchor: GridPoint, row_span: u32, col_span: u32) -> (u32, u32) {
    let max_rows = grid.rows().saturating_sub(anchor.row()).max(1);
    let max_cols = grid.cols().saturating_sub(anchor.col()).max(1);
    (row_span.clamp(1, max_rows), col_span.clamp(1, max_cols))
}

/// Clamps a requested anchor so `area` stays within the declared columns.
pub fn clamp_anchor(grid: &Grid, area: GridArea, anchor: GridPoint) -> GridPoint {
    let max_col = grid.cols().saturating_sub(area.col_span());
    GridPoint::new(anchor.row(), anchor.col().min(max_col))
}
