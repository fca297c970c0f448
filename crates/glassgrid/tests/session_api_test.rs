//! Integration tests for the EditorSession API.

use serde_json::json;

use glassgrid::{
    EditError, EditorSession,
    config::EngineConfig,
    content::Content,
    geometry::{GridArea, GridPoint},
    grid::{Cell, CellPatch, CellSpec, Grid, LayoutSettings},
    identifier::Id,
    preset::{PresetCatalog, PresetLibrary},
    query::GridQuery,
    template::{TemplateInfo, TemplateRegistry},
};

fn cell(id: &str, row: u32, col: u32, row_span: u32, col_span: u32) -> Cell {
    Cell::new(Id::new(id), GridArea::new(row, col, row_span, col_span))
}

fn quadrants() -> Grid {
    Grid::new(Id::new("quadrants"), "Quadrants", 4, 12, 16)
        .with_cell(cell("q1", 0, 0, 2, 6).with_component(Id::new("card"), None))
        .with_cell(cell("q2", 0, 6, 2, 6))
        .with_cell(cell("q3", 2, 0, 2, 6))
        .with_cell(cell("q4", 2, 6, 2, 6))
}

fn session_with(grid: Grid) -> EditorSession {
    EditorSession::with_grid(EngineConfig::default(), grid)
}

fn templates() -> TemplateRegistry {
    TemplateRegistry::new().with_template(
        Id::new("glass-button"),
        TemplateInfo::new("Button", "cursor", Content::new().with("label", json!("Click me"))),
    )
}

#[test]
fn test_new_session_defaults() {
    let session = EditorSession::default();
    let grid = session.grid();

    assert_eq!(grid.rows(), 4);
    assert_eq!(grid.cols(), 12);
    assert!(grid.is_empty());
    assert_eq!(session.history_len(), 1);
    assert!(!session.can_undo());
    assert!(!session.can_redo());
}

#[test]
fn test_find_free_region_after_removing_quadrant() {
    let mut session = session_with(quadrants());
    session.remove_cell(Id::new("q1")).unwrap();

    assert_eq!(session.find_free_region(4, 2), GridPoint::new(0, 0));
}

#[test]
fn test_clear_vs_remove() {
    let mut session = session_with(quadrants());

    session.clear_cell(Id::new("q1")).unwrap();
    let cleared = session.grid().cell(Id::new("q1")).unwrap();
    assert_eq!(cleared.area(), GridArea::new(0, 0, 2, 6));
    assert_eq!(cleared.component_id(), None);
    assert!(cleared.content().is_none());

    session.remove_cell(Id::new("q1")).unwrap();
    assert!(session.grid().cell(Id::new("q1")).is_none());
    assert_eq!(session.grid().len(), 3);
}

#[test]
fn test_shrink_clipping() {
    let grid = Grid::new(Id::new("g"), "G", 4, 12, 0)
        .with_cell(cell("below", 3, 0, 1, 2))
        .with_cell(cell("tall", 0, 4, 4, 2));
    let mut session = session_with(grid);

    session.update_layout_settings(&LayoutSettings::new().with_rows(3));

    assert!(session.grid().cell(Id::new("below")).is_none());
    assert_eq!(
        session.grid().cell(Id::new("tall")).unwrap().area(),
        GridArea::new(0, 4, 3, 2)
    );
    // Auto-fit floor applies after the explicit resize.
    assert_eq!(session.grid().rows(), 4);
}

#[test]
fn test_history_branch_truncation() {
    let mut session = EditorSession::default();
    let g0 = session.grid().clone();
    session.add_cell(CellSpec::new(GridArea::new(0, 0, 1, 1)));
    let g1 = session.grid().clone();
    session.add_cell(CellSpec::new(GridArea::new(0, 1, 1, 1)));
    session.add_cell(CellSpec::new(GridArea::new(0, 2, 1, 1)));
    assert_eq!(session.history_index(), 3);

    assert!(session.undo());
    assert!(session.undo());
    assert_eq!(session.history_index(), 1);

    let m = session.add_cell(CellSpec::new(GridArea::new(3, 3, 1, 1)));

    let entries: Vec<&Grid> = session.history().iter().collect();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0], &g0);
    assert_eq!(entries[1], &g1);
    assert!(entries[2].contains_cell(m));
    assert!(!session.can_redo());
    assert!(!session.redo());
}

#[test]
fn test_bounded_history() {
    let mut session = EditorSession::default();
    for n in 0..80 {
        session.add_cell(CellSpec::new(GridArea::new(n, 0, 1, 1)));
        assert!(session.history_len() <= 50);
    }
    assert_eq!(session.history_len(), 50);

    let mut undos = 0;
    while session.undo() {
        undos += 1;
    }
    assert_eq!(undos, 49);
    // The oldest retained snapshot already holds the first 31 cells.
    assert_eq!(session.grid().len(), 31);
}

#[test]
fn test_undo_redo_inverse() {
    let mut session = session_with(quadrants());
    let before = session.grid().clone();

    session.swap_cells(Id::new("q1"), Id::new("q4")).unwrap();
    let after = session.grid().clone();
    assert_ne!(before, after);

    assert!(session.undo());
    assert_eq!(session.grid(), &before);
    assert!(session.redo());
    assert_eq!(session.grid(), &after);
}

#[test]
fn test_snapshots_are_independent() {
    let mut session = session_with(quadrants());
    session
        .place_component(
            Id::new("q2"),
            Id::new("chart"),
            Some(Content::new().with("kind", json!("pie"))),
        )
        .unwrap();
    let committed = session.history().current().clone();

    session
        .update_cell(
            Id::new("q2"),
            &CellPatch::new().with_content(Some(Content::new().with("kind", json!("bar")))),
        )
        .unwrap();

    session.undo();
    assert_eq!(session.grid(), &committed);
    assert_eq!(
        session.grid().cell(Id::new("q2")).unwrap().content().unwrap().get("kind"),
        Some(&json!("pie"))
    );
}

#[test]
fn test_swap_overlap_leaves_grid_unchanged() {
    let grid = Grid::new(Id::new("g"), "G", 4, 12, 0)
        .with_cell(cell("big", 0, 0, 2, 6))
        .with_cell(cell("small", 2, 0, 1, 2))
        .with_cell(cell("blocker", 3, 0, 1, 2));
    let mut session = session_with(grid);
    let before = session.grid().clone();

    let err = session.swap_cells(Id::new("big"), Id::new("small")).unwrap_err();

    assert!(matches!(err, EditError::Overlap { .. }));
    assert_eq!(session.grid(), &before);
    assert_eq!(session.history_len(), 1);
}

#[test]
fn test_invalid_ids_are_no_ops() {
    let mut session = session_with(quadrants());
    let before = session.grid().clone();
    let ghost = Id::new("ghost");

    assert_eq!(
        session.update_cell(ghost, &CellPatch::new().with_row(1)),
        Err(EditError::UnknownCell(ghost))
    );
    assert!(session.remove_cell(ghost).is_err());
    assert!(session.clear_cell(ghost).is_err());
    assert!(session.place_component(ghost, Id::new("card"), None).is_err());
    assert!(session.move_component(ghost, Id::new("q2")).is_err());
    assert!(session.swap_cells(ghost, Id::new("q2")).is_err());

    assert_eq!(session.grid(), &before);
    assert_eq!(session.history_len(), 1);
}

#[test]
fn test_move_component_requires_occupied_source() {
    let mut session = session_with(quadrants());
    assert_eq!(
        session.move_component(Id::new("q2"), Id::new("q3")),
        Err(EditError::EmptySource(Id::new("q2")))
    );

    session.move_component(Id::new("q1"), Id::new("q3")).unwrap();
    assert!(!session.grid().cell(Id::new("q1")).unwrap().has_component());
    assert_eq!(
        session.grid().cell(Id::new("q3")).unwrap().component_id(),
        Some(Id::new("card"))
    );
}

#[test]
fn test_remove_selected_cell_clears_selection() {
    let mut session = session_with(quadrants());
    session.select(Some(Id::new("q1")));
    session.remove_cell(Id::new("q1")).unwrap();
    assert!(session.selection().is_empty());

    session.select(Some(Id::new("q2")));
    session.clear_cell(Id::new("q3")).unwrap();
    assert_eq!(session.selection().focused(), Some(Id::new("q2")));
    session.clear_cell(Id::new("q2")).unwrap();
    assert!(session.selection().is_empty());
}

#[test]
fn test_selection_is_not_versioned() {
    let mut session = session_with(quadrants());
    session.select(Some(Id::new("q2")));
    session.clear_cell(Id::new("q1")).unwrap();
    let len = session.history_len();

    session.select(Some(Id::new("q3")));
    assert_eq!(session.history_len(), len);
    session.undo();
    assert_eq!(session.selection().focused(), Some(Id::new("q3")));
}

#[test]
fn test_undo_prunes_dangling_selection() {
    let mut session = EditorSession::default();
    let id = session.add_cell(CellSpec::new(GridArea::new(0, 0, 1, 1)));
    session.select(Some(id));
    session.undo();
    assert!(session.selection().is_empty());
}

#[test]
fn test_auto_fit_grows_and_shrinks() {
    let mut session = EditorSession::default();
    let id = session.add_cell(CellSpec::new(GridArea::new(6, 0, 3, 2)));
    assert_eq!(session.grid().rows(), 9);

    session.update_cell(id, &CellPatch::new().with_row(0)).unwrap();
    assert_eq!(session.grid().rows(), 4);

    session.remove_cell(id).unwrap();
    assert_eq!(session.grid().rows(), 4);
}

#[test]
fn test_resize_cell_clamps_to_grid() {
    let mut session = session_with(quadrants());
    session.remove_cell(Id::new("q2")).unwrap();
    session.resize_cell(Id::new("q1"), 10, 20).unwrap();
    assert_eq!(
        session.grid().cell(Id::new("q1")).unwrap().area(),
        GridArea::new(0, 0, 4, 12)
    );
}

#[test]
fn test_insert_template_finds_free_region() {
    let catalog = templates();
    let mut session = session_with(quadrants());

    let id = session
        .insert_template(&catalog, Id::new("glass-button"), 3, 1)
        .unwrap();

    let inserted = session.grid().cell(id).unwrap();
    assert_eq!(inserted.area(), GridArea::new(4, 0, 1, 3));
    assert_eq!(inserted.component_id(), Some(Id::new("glass-button")));
    assert_eq!(
        inserted.content().unwrap().get("label"),
        Some(&json!("Click me"))
    );
    assert_eq!(session.grid().rows(), 5);
    assert_eq!(session.selection().focused(), Some(id));
    assert_eq!(session.grid().overlapping_pair(), None);
}

#[test]
fn test_insert_unknown_template() {
    let mut session = EditorSession::default();
    let err = session
        .insert_template(&templates(), Id::new("missing"), 1, 1)
        .unwrap_err();
    assert_eq!(err, EditError::UnknownTemplate(Id::new("missing")));
    assert_eq!(session.history_len(), 1);
}

#[test]
fn test_drop_template_overwrites_occupant() {
    let mut session = session_with(quadrants());
    session
        .drop_template(&templates(), Id::new("q1"), Id::new("glass-button"))
        .unwrap();

    let q1 = session.grid().cell(Id::new("q1")).unwrap();
    assert_eq!(q1.component_id(), Some(Id::new("glass-button")));
    assert_eq!(q1.content().unwrap().get("label"), Some(&json!("Click me")));
}

#[test]
fn test_duplicate_cell() {
    let mut session = session_with(quadrants());
    let copy = session.duplicate_cell(Id::new("q1")).unwrap();

    let copied = session.grid().cell(copy).unwrap();
    assert_eq!(copied.area(), GridArea::new(4, 0, 2, 6));
    assert_eq!(copied.component_id(), Some(Id::new("card")));
    assert_ne!(copy, Id::new("q1"));
    assert_eq!(session.grid().overlapping_pair(), None);
}

#[test]
fn test_group_and_ungroup() {
    let mut session = session_with(quadrants());
    session.toggle_selected(Id::new("q1"));
    assert_eq!(session.group_selection(), Err(EditError::NotGrouped(1)));

    session.toggle_selected(Id::new("q2"));
    let group = session.group_selection().unwrap();

    assert_eq!(session.selection().group(), Some(group));
    for id in ["q1", "q2"] {
        assert_eq!(session.grid().cell(Id::new(id)).unwrap().group_id(), Some(group));
    }
    assert_eq!(session.grid().cell(Id::new("q3")).unwrap().group_id(), None);

    session.ungroup(group).unwrap();
    assert!(session.grid().cells().iter().all(|c| c.group_id().is_none()));
    assert_eq!(session.selection().group(), None);
    assert_eq!(session.ungroup(group), Err(EditError::UnknownGroup(group)));
}

#[test]
fn test_load_preset_twice_uses_fresh_ids() {
    let presets = PresetLibrary::builtin();
    let mut session = EditorSession::default();

    session.load_preset(&presets, "dashboard").unwrap();
    let first = session.grid().clone();
    session.load_preset(&presets, "dashboard").unwrap();
    let second = session.grid().clone();

    assert_ne!(first.id(), second.id());
    for cell in second.cells() {
        assert!(!first.contains_cell(cell.id()));
    }
    assert_eq!(first.len(), presets.preset("dashboard").unwrap().len());

    assert!(session.undo());
    assert_eq!(session.grid(), &first);
}

#[test]
fn test_load_unknown_preset() {
    let mut session = EditorSession::default();
    assert_eq!(
        session.load_preset(&PresetLibrary::builtin(), "nope"),
        Err(EditError::UnknownPreset("nope".to_string()))
    );
}

#[test]
fn test_apply_grid_is_undoable() {
    let mut session = EditorSession::default();
    let before = session.grid().clone();
    session.apply_grid(quadrants());
    assert_eq!(session.grid(), &quadrants());

    assert!(session.undo());
    assert_eq!(session.grid(), &before);
}

#[test]
fn test_resize_gesture_commits_once() {
    let mut session = session_with(quadrants());
    session.remove_cell(Id::new("q2")).unwrap();
    let len = session.history_len();

    session.begin_resize(Id::new("q1")).unwrap();
    for col in 6..12 {
        session.drag_to(GridPoint::new(1, col)).unwrap();
    }
    assert_eq!(session.history_len(), len);
    assert_eq!(
        session.grid().cell(Id::new("q1")).unwrap().area(),
        GridArea::new(0, 0, 2, 12)
    );

    assert_eq!(session.end_gesture(), Ok(true));
    assert_eq!(session.history_len(), len + 1);

    session.undo();
    assert_eq!(
        session.grid().cell(Id::new("q1")).unwrap().area(),
        GridArea::new(0, 0, 2, 6)
    );
}

#[test]
fn test_cancelled_gesture_restores_grid() {
    let mut session = session_with(quadrants());
    let before = session.grid().clone();

    session.begin_move(Id::new("q4")).unwrap();
    session.drag_to(GridPoint::new(7, 3)).unwrap();
    assert_ne!(session.grid(), &before);

    assert!(session.cancel_gesture());
    assert_eq!(session.grid(), &before);
    assert_eq!(session.history_len(), 1);
    assert!(!session.cancel_gesture());
}

#[test]
fn test_gesture_without_change_commits_nothing() {
    let mut session = session_with(quadrants());
    session.begin_move(Id::new("q1")).unwrap();
    session.drag_to(GridPoint::new(0, 0)).unwrap();
    assert_eq!(session.end_gesture(), Ok(false));
    assert_eq!(session.history_len(), 1);
}

#[test]
fn test_drag_to_extreme_pointer_clamps() {
    let grid = Grid::new(Id::new("g"), "G", 4, 12, 0).with_cell(cell("c", 1, 2, 1, 2));
    let mut session = session_with(grid);

    session.begin_resize(Id::new("c")).unwrap();
    session.drag_to(GridPoint::new(u32::MAX, u32::MAX)).unwrap();
    assert_eq!(
        session.grid().cell(Id::new("c")).unwrap().area(),
        GridArea::new(1, 2, 3, 10)
    );
    assert_eq!(session.end_gesture(), Ok(true));

    session.begin_move(Id::new("c")).unwrap();
    session.drag_to(GridPoint::new(0, u32::MAX)).unwrap();
    assert_eq!(
        session.grid().cell(Id::new("c")).unwrap().area(),
        GridArea::new(0, 2, 3, 10)
    );
}

#[test]
fn test_find_free_region_with_maximal_span() {
    let session = session_with(quadrants());
    assert_eq!(session.find_free_region(1, u32::MAX), GridPoint::new(4, 0));
}

#[test]
fn test_gesture_state_errors() {
    let mut session = session_with(quadrants());
    assert_eq!(session.drag_to(GridPoint::new(0, 0)), Err(EditError::NoGesture));
    assert_eq!(session.end_gesture(), Err(EditError::NoGesture));

    session.begin_move(Id::new("q1")).unwrap();
    assert_eq!(session.begin_resize(Id::new("q2")), Err(EditError::GestureInProgress));
}

#[test]
fn test_mutation_during_gesture_cancels_it() {
    let mut session = session_with(quadrants());
    session.begin_move(Id::new("q4")).unwrap();
    session.drag_to(GridPoint::new(8, 0)).unwrap();

    session.clear_cell(Id::new("q1")).unwrap();

    assert!(session.gesture().is_none());
    assert_eq!(
        session.grid().cell(Id::new("q4")).unwrap().area(),
        GridArea::new(2, 6, 2, 6)
    );
    assert_eq!(session.history_len(), 2);
}

#[test]
fn test_export_json_round_trip() {
    let session = session_with(quadrants());
    let json = session.export_json(false).unwrap();
    let imported = glassgrid::export::from_json(&json).unwrap();
    assert_eq!(&imported, session.grid());
}

#[test]
fn test_custom_history_depth() {
    let mut session = EditorSession::new(EngineConfig::default().with_max_history(3));
    for n in 0..10 {
        session.add_cell(CellSpec::new(GridArea::new(0, n, 1, 1)));
    }
    assert_eq!(session.history_len(), 3);
}
