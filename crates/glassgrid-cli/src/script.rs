//! Edit scripts replayed against an editing session.
//!
//! A script is a JSON array of commands tagged by `op`:
//!
//! ```json
//! [
//!   { "op": "load_preset", "name": "bento" },
//!   { "op": "insert_template", "templateId": "stat-card", "colSpan": 4, "rowSpan": 1 },
//!   { "op": "swap_cells", "first": "a", "second": "b" },
//!   { "op": "drag", "id": "a", "mode": "resize", "path": [{ "row": 1, "col": 5 }] },
//!   { "op": "undo" }
//! ]
//! ```

use log::debug;
use serde::Deserialize;

use glassgrid::{
    EditError, EditorSession,
    content::Content,
    geometry::GridPoint,
    grid::{CellPatch, CellSpec, LayoutSettings},
    identifier::Id,
    preset::PresetCatalog,
    template::TemplateCatalog,
};

/// How a scripted drag moves its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragMode {
    Resize,
    Move,
}

/// One scripted session operation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Command {
    AddCell(CellSpec),
    UpdateCell {
        id: Id,
        #[serde(flatten)]
        patch: CellPatch,
    },
    ResizeCell {
        id: Id,
        row_span: u32,
        col_span: u32,
    },
    RemoveCell {
        id: Id,
    },
    ClearCell {
        id: Id,
    },
    PlaceComponent {
        cell_id: Id,
        component_id: Id,
        #[serde(default)]
        content: Option<Content>,
    },
    DropTemplate {
        cell_id: Id,
        template_id: Id,
    },
    InsertTemplate {
        template_id: Id,
        col_span: u32,
        row_span: u32,
    },
    MoveComponent {
        from: Id,
        to: Id,
    },
    SwapCells {
        first: Id,
        second: Id,
    },
    DuplicateCell {
        id: Id,
    },
    UpdateLayout(LayoutSettings),
    Select {
        #[serde(default)]
        id: Option<Id>,
    },
    ToggleSelected {
        id: Id,
    },
    GroupSelection,
    Ungroup {
        group_id: Id,
    },
    LoadPreset {
        name: String,
    },
    Drag {
        id: Id,
        mode: DragMode,
        path: Vec<GridPoint>,
        #[serde(default)]
        cancel: bool,
    },
    Undo,
    Redo,
}

/// Parses a script from JSON.
pub fn parse(source: &str) -> Result<Vec<Command>, serde_json::Error> {
    serde_json::from_str(source)
}

impl Command {
    /// Runs the command against `session`.
    ///
    /// Undo and redo at the ends of history are not errors.
    pub fn apply(
        &self,
        session: &mut EditorSession,
        presets: &impl PresetCatalog,
        templates: &impl TemplateCatalog,
    ) -> Result<(), EditError> {
        match self {
            Command::AddCell(spec) => {
                let id = session.add_cell(spec.clone());
                debug!(cell_id:% = id; "Cell added");
                Ok(())
            }
            Command::UpdateCell { id, patch } => session.update_cell(*id, patch),
            Command::ResizeCell {
                id,
                row_span,
                col_span,
            } => session.resize_cell(*id, *row_span, *col_span),
            Command::RemoveCell { id } => session.remove_cell(*id),
            Command::ClearCell { id } => session.clear_cell(*id),
            Command::PlaceComponent {
                cell_id,
                component_id,
                content,
            } => session.place_component(*cell_id, *component_id, content.clone()),
            Command::DropTemplate {
                cell_id,
                template_id,
            } => session.drop_template(templates, *cell_id, *template_id),
            Command::InsertTemplate {
                template_id,
                col_span,
                row_span,
            } => session
                .insert_template(templates, *template_id, *col_span, *row_span)
                .map(|id| debug!(cell_id:% = id; "Template inserted")),
            Command::MoveComponent { from, to } => session.move_component(*from, *to),
            Command::SwapCells { first, second } => session.swap_cells(*first, *second),
            Command::DuplicateCell { id } => session
                .duplicate_cell(*id)
                .map(|copy| debug!(cell_id:% = copy; "Cell duplicated")),
            Command::UpdateLayout(settings) => {
                session.update_layout_settings(settings);
                Ok(())
            }
            Command::Select { id } => {
                session.select(*id);
                Ok(())
            }
            Command::ToggleSelected { id } => {
                session.toggle_selected(*id);
                Ok(())
            }
            Command::GroupSelection => session
                .group_selection()
                .map(|group| debug!(group_id:% = group; "Selection grouped")),
            Command::Ungroup { group_id } => session.ungroup(*group_id),
            Command::LoadPreset { name } => session.load_preset(presets, name),
            Command::Drag {
                id,
                mode,
                path,
                cancel,
            } => {
                match mode {
                    DragMode::Resize => session.begin_resize(*id)?,
                    DragMode::Move => session.begin_move(*id)?,
                }
                for point in path {
                    session.drag_to(*point)?;
                }
                if *cancel {
                    session.cancel_gesture();
                } else {
                    session.end_gesture()?;
                }
                Ok(())
            }
            Command::Undo => {
                session.undo();
                Ok(())
            }
            Command::Redo => {
                session.redo();
                Ok(())
            }
        }
    }
}
