//! The editing session: one grid, its history and the selection.
//!
//! Every mutation follows the same path: a pure transform from
//! [`placement`](crate::placement) computes the next grid, auto-fit adjusts
//! its row count, and the result is committed to history and becomes the
//! live grid. A rejected mutation returns an [`EditError`] and commits
//! nothing.
//!
//! Drag gestures are the exception: while a drag is in progress the live grid
//! shows a preview that is committed once on release, or discarded on cancel.
//! Issuing any other operation while a drag is pending cancels the drag first.

use log::{debug, info};

use glassgrid_core::{
    content::Content,
    geometry::{GridArea, GridPoint},
    grid::{Cell, CellPatch, CellSpec, Grid, LayoutSettings},
    identifier::Id,
    template::TemplateCatalog,
};

use crate::{
    autofit::fit_rows,
    config::EngineConfig,
    error::{EditError, GlassGridError},
    export,
    gesture::{Gesture, GestureKind},
    history::History,
    ids::IdGenerator,
    placement,
    preset::{PresetCatalog, instantiate},
    query::{EmptySlots, GridQuery},
    selection::Selection,
};

/// An editing session owning the live grid, the undo history and the
/// selection.
///
/// # Examples
///
/// ```
/// use glassgrid::{EditorSession, config::EngineConfig};
/// use glassgrid_core::{geometry::GridArea, grid::CellSpec};
///
/// let mut session = EditorSession::new(EngineConfig::default());
/// let id = session.add_cell(CellSpec::new(GridArea::new(0, 0, 6, 4)));
///
/// assert_eq!(session.grid().rows(), 6);
/// assert!(session.undo());
/// assert!(session.grid().cell(id).is_none());
/// assert_eq!(session.grid().rows(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct EditorSession {
    config: EngineConfig,
    grid: Grid,
    history: History<Grid>,
    selection: Selection,
    gesture: Option<Gesture>,
    ids: IdGenerator,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl EditorSession {
    /// Creates a session editing an empty grid sized from `config`.
    pub fn new(config: EngineConfig) -> Self {
        let mut ids = IdGenerator::new();
        let grid = Grid::new(
            ids.next_id("grid", |_| false),
            "Untitled Layout",
            config.default_rows(),
            config.default_cols(),
            config.default_gap(),
        );
        Self::start(config, grid, ids)
    }

    /// Creates a session editing `grid`, which becomes the oldest history entry.
    pub fn with_grid(config: EngineConfig, grid: Grid) -> Self {
        Self::start(config, grid, IdGenerator::new())
    }

    fn start(config: EngineConfig, mut grid: Grid, ids: IdGenerator) -> Self {
        fit_rows(&mut grid, config.min_rows());
        let history = History::new(grid.clone(), config.max_history());
        info!(grid_id:% = grid.id(), cells = grid.len(); "Editing session started");
        Self {
            config,
            grid,
            history,
            selection: Selection::new(),
            gesture: None,
            ids,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The live grid, including any in-progress drag preview.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn history(&self) -> &History<Grid> {
        &self.history
    }

    /// The pending drag, if any.
    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_index(&self) -> usize {
        self.history.index()
    }

    // ====================================================================
    // Queries
    // ====================================================================

    pub fn cell_at(&self, row: u32, col: u32) -> Option<&Cell> {
        self.grid.cell_at(row, col)
    }

    pub fn is_occupied(&self, row: u32, col: u32) -> bool {
        self.grid.is_occupied(row, col)
    }

    pub fn empty_slots(&self) -> EmptySlots<'_> {
        self.grid.empty_slots()
    }

    pub fn find_free_region(&self, col_span: u32, row_span: u32) -> GridPoint {
        self.grid.find_free_region(col_span, row_span)
    }

    // ====================================================================
    // Mutations
    // ====================================================================

    /// Adds a cell with a fresh identifier and returns that identifier.
    ///
    /// No overlap check; pick the area with [`Self::find_free_region`].
    pub fn add_cell(&mut self, spec: CellSpec) -> Id {
        self.settle();
        let id = self.fresh_cell_id();
        let next = placement::add_cell(&self.grid, id, spec);
        self.commit("add_cell", next);
        id
    }

    /// Merges `patch` into the cell `id`. No overlap check.
    pub fn update_cell(&mut self, id: Id, patch: &CellPatch) -> Result<(), EditError> {
        self.settle();
        let next = placement::update_cell(&self.grid, id, patch);
        self.apply("update_cell", next)
    }

    /// Resizes the cell `id`, clamping the spans to the declared grid.
    pub fn resize_cell(&mut self, id: Id, row_span: u32, col_span: u32) -> Result<(), EditError> {
        self.settle();
        let anchor = self
            .grid
            .cell(id)
            .ok_or(EditError::UnknownCell(id))?
            .area()
            .anchor();
        let (row_span, col_span) = placement::clamp_spans(&self.grid, anchor, row_span, col_span);
        let patch = CellPatch::new()
            .with_row_span(row_span)
            .with_col_span(col_span);
        let next = placement::update_cell(&self.grid, id, &patch);
        self.apply("resize_cell", next)
    }

    /// Deletes the cell `id`. Clears the selection if the cell was selected.
    pub fn remove_cell(&mut self, id: Id) -> Result<(), EditError> {
        self.settle();
        let next = placement::remove_cell(&self.grid, id);
        self.apply("remove_cell", next)?;
        self.deselect(id);
        Ok(())
    }

    /// Empties the cell `id`, keeping its geometry. Clears the selection if
    /// the cell was selected.
    pub fn clear_cell(&mut self, id: Id) -> Result<(), EditError> {
        self.settle();
        let next = placement::clear_cell(&self.grid, id);
        self.apply("clear_cell", next)?;
        self.deselect(id);
        Ok(())
    }

    /// Puts a component into the cell `cell_id`, replacing any occupant.
    pub fn place_component(
        &mut self,
        cell_id: Id,
        component_id: Id,
        content: Option<Content>,
    ) -> Result<(), EditError> {
        self.settle();
        let next = placement::place_component(&self.grid, cell_id, component_id, content);
        self.apply("place_component", next)
    }

    /// Moves the occupant of `from` into `to`.
    pub fn move_component(&mut self, from: Id, to: Id) -> Result<(), EditError> {
        self.settle();
        let next = placement::move_component(&self.grid, from, to);
        self.apply("move_component", next)
    }

    /// Exchanges the anchors of two cells, rejecting overlapping results.
    pub fn swap_cells(&mut self, first: Id, second: Id) -> Result<(), EditError> {
        self.settle();
        let next = placement::swap_cells(&self.grid, first, second);
        self.apply("swap_cells", next)
    }

    /// Changes name, gap or dimensions. Shrinking clips cells; the row count
    /// is then auto-fitted like after any other mutation.
    pub fn update_layout_settings(&mut self, settings: &LayoutSettings) {
        self.settle();
        let next = placement::update_layout_settings(&self.grid, settings);
        self.commit("update_layout_settings", next);
        self.selection.retain_existing(&self.grid);
    }

    /// Places `template_id` into the first free region of the requested size
    /// and seeds its content from the catalog. Returns the new cell.
    ///
    /// The column span is clamped to the grid width so a free region always
    /// exists. The new cell becomes focused.
    pub fn insert_template(
        &mut self,
        catalog: &impl TemplateCatalog,
        template_id: Id,
        col_span: u32,
        row_span: u32,
    ) -> Result<Id, EditError> {
        self.settle();
        let info = catalog
            .template(template_id)
            .ok_or(EditError::UnknownTemplate(template_id))?;

        let col_span = col_span.clamp(1, self.grid.cols());
        let anchor = self.grid.find_free_region(col_span, row_span);
        let area = GridArea::new(anchor.row(), anchor.col(), row_span, col_span);
        let spec =
            CellSpec::new(area).with_component(template_id, Some(info.default_content().clone()));

        let id = self.fresh_cell_id();
        let next = placement::add_cell(&self.grid, id, spec);
        self.commit("insert_template", next);
        self.selection.focus(Some(id));
        Ok(id)
    }

    /// Drops `template_id` onto an existing cell, seeding its content from
    /// the catalog.
    pub fn drop_template(
        &mut self,
        catalog: &impl TemplateCatalog,
        cell_id: Id,
        template_id: Id,
    ) -> Result<(), EditError> {
        self.settle();
        let info = catalog
            .template(template_id)
            .ok_or(EditError::UnknownTemplate(template_id))?;
        let next = placement::place_component(
            &self.grid,
            cell_id,
            template_id,
            Some(info.default_content().clone()),
        );
        self.apply("drop_template", next)
    }

    /// Copies the cell `id` (size, component and content) into the first
    /// free region of the same size. Returns the copy's identifier.
    pub fn duplicate_cell(&mut self, id: Id) -> Result<Id, EditError> {
        self.settle();
        let source = self.grid.cell(id).ok_or(EditError::UnknownCell(id))?;
        let area = source.area();
        let anchor = self.grid.find_free_region(area.col_span(), area.row_span());

        let mut spec = CellSpec::new(area.with_anchor(anchor));
        if let Some(component_id) = source.component_id() {
            spec = spec.with_component(component_id, source.content().cloned());
        }

        let copy_id = self.fresh_cell_id();
        let next = placement::add_cell(&self.grid, copy_id, spec);
        self.commit("duplicate_cell", next);
        Ok(copy_id)
    }

    /// Tags every multi-selected cell with a fresh group identifier.
    pub fn group_selection(&mut self) -> Result<Id, EditError> {
        self.settle();
        let count = self.selection.selected_len();
        if count < 2 {
            return Err(EditError::NotGrouped(count));
        }
        let members: Vec<Id> = self.selection.selected().collect();

        let grid = &self.grid;
        let group_id = self.ids.next_id("group", |id| {
            grid.cells().iter().any(|cell| cell.group_id() == Some(id))
        });
        let next = placement::set_group(&self.grid, &members, Some(group_id));
        self.apply("group_selection", next)?;
        self.selection.set_group(Some(group_id));
        Ok(group_id)
    }

    /// Removes the group tag `group_id` from every cell carrying it.
    pub fn ungroup(&mut self, group_id: Id) -> Result<(), EditError> {
        self.settle();
        let members: Vec<Id> = self
            .grid
            .cells()
            .iter()
            .filter(|cell| cell.group_id() == Some(group_id))
            .map(Cell::id)
            .collect();
        if members.is_empty() {
            return Err(EditError::UnknownGroup(group_id));
        }

        let next = placement::set_group(&self.grid, &members, None);
        self.apply("ungroup", next)?;
        if self.selection.group() == Some(group_id) {
            self.selection.set_group(None);
        }
        Ok(())
    }

    /// Replaces the live grid with a fresh copy of the named preset.
    pub fn load_preset(
        &mut self,
        catalog: &impl PresetCatalog,
        name: &str,
    ) -> Result<(), EditError> {
        self.settle();
        let template = catalog
            .preset(name)
            .ok_or_else(|| EditError::UnknownPreset(name.to_string()))?;
        let grid = instantiate(template, &mut self.ids);
        info!(preset = name, grid_id:% = grid.id(); "Loading preset");
        self.commit("load_preset", grid);
        self.selection.clear();
        Ok(())
    }

    /// Replaces the live grid with an externally supplied one, as-is.
    pub fn apply_grid(&mut self, grid: Grid) {
        self.settle();
        info!(grid_id:% = grid.id(), cells = grid.len(); "Applying grid");
        self.commit("apply_grid", grid);
        self.selection.retain_existing(&self.grid);
    }

    // ====================================================================
    // Undo / redo
    // ====================================================================

    /// Restores the previous snapshot. Returns false if there is none.
    pub fn undo(&mut self) -> bool {
        self.settle();
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.grid = snapshot.clone();
        self.selection.retain_existing(&self.grid);
        true
    }

    /// Restores the next snapshot. Returns false if there is none.
    pub fn redo(&mut self) -> bool {
        self.settle();
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.grid = snapshot.clone();
        self.selection.retain_existing(&self.grid);
        true
    }

    // ====================================================================
    // Selection
    // ====================================================================

    /// Focuses a single cell (or nothing). Unknown ids are ignored.
    pub fn select(&mut self, id: Option<Id>) {
        match id {
            Some(id) if !self.grid.contains_cell(id) => {
                debug!(cell_id:% = id; "Ignoring selection of unknown cell");
            }
            _ => self.selection.focus(id),
        }
    }

    /// Adds or removes a cell from the multi-selection. Unknown ids are ignored.
    pub fn toggle_selected(&mut self, id: Id) {
        if self.grid.contains_cell(id) {
            self.selection.toggle(id);
        } else {
            debug!(cell_id:% = id; "Ignoring selection of unknown cell");
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ====================================================================
    // Drag gestures
    // ====================================================================

    /// Starts resizing the cell `id` by its bottom-right corner.
    pub fn begin_resize(&mut self, id: Id) -> Result<(), EditError> {
        self.begin_gesture(GestureKind::Resize, id)
    }

    /// Starts moving the cell `id` by its anchor.
    pub fn begin_move(&mut self, id: Id) -> Result<(), EditError> {
        self.begin_gesture(GestureKind::Move, id)
    }

    fn begin_gesture(&mut self, kind: GestureKind, id: Id) -> Result<(), EditError> {
        if self.gesture.is_some() {
            return Err(EditError::GestureInProgress);
        }
        self.gesture = Some(Gesture::begin(kind, &self.grid, id)?);
        debug!(cell_id:% = id, kind:?; "Gesture started");
        Ok(())
    }

    /// Updates the pending drag with the pointer at `point`. The live grid
    /// shows the preview; history is untouched.
    pub fn drag_to(&mut self, point: GridPoint) -> Result<(), EditError> {
        let gesture = self.gesture.as_ref().ok_or(EditError::NoGesture)?;
        self.grid = gesture.preview(point);
        Ok(())
    }

    /// Releases the pending drag. Commits one history entry if the drag
    /// changed anything and returns whether it did.
    pub fn end_gesture(&mut self) -> Result<bool, EditError> {
        let gesture = self.gesture.take().ok_or(EditError::NoGesture)?;
        if &self.grid == gesture.origin() {
            debug!(cell_id:% = gesture.cell_id(); "Gesture released without change");
            return Ok(false);
        }
        let next = self.grid.clone();
        self.commit("gesture", next);
        Ok(true)
    }

    /// Discards the pending drag and restores the grid it started from.
    /// Returns false if no drag was pending.
    pub fn cancel_gesture(&mut self) -> bool {
        let Some(gesture) = self.gesture.take() else {
            return false;
        };
        debug!(cell_id:% = gesture.cell_id(); "Gesture cancelled");
        self.grid = gesture.origin().clone();
        true
    }

    // ====================================================================
    // Export
    // ====================================================================

    /// Serializes the live grid to JSON.
    pub fn export_json(&self, pretty: bool) -> Result<String, GlassGridError> {
        export::to_json(&self.grid, pretty)
    }

    // ====================================================================
    // Internals
    // ====================================================================

    fn settle(&mut self) {
        self.cancel_gesture();
    }

    fn fresh_cell_id(&mut self) -> Id {
        let grid = &self.grid;
        self.ids.next_id("cell", |id| grid.contains_cell(id))
    }

    fn deselect(&mut self, id: Id) {
        if self.selection.is_selected(id) {
            self.selection.clear();
        }
    }

    fn apply(&mut self, op: &'static str, next: Result<Grid, EditError>) -> Result<(), EditError> {
        match next {
            Ok(next) => {
                self.commit(op, next);
                Ok(())
            }
            Err(err) => {
                debug!(op, err:%; "Edit rejected");
                Err(err)
            }
        }
    }

    fn commit(&mut self, op: &'static str, mut next: Grid) {
        fit_rows(&mut next, self.config.min_rows());
        self.history.commit(next.clone());
        self.grid = next;
        debug!(op, rows = self.grid.rows(), cells = self.grid.len(); "Edit committed");
    }
}
