//! In-progress pointer drags.
//!
//! A [`Gesture`] remembers the grid as it was when the drag started. Every
//! pointer update produces a preview grid derived from that origin, so
//! intermediate positions never accumulate and the origin can be restored
//! when the drag is cancelled. Only the release is committed to history.

use glassgrid_core::{
    geometry::{GridArea, GridPoint},
    grid::{CellPatch, Grid},
    identifier::Id,
};

use crate::{
    error::EditError,
    placement::{self, clamp_anchor, clamp_spans},
};

/// What a drag does to its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// The pointer tracks the bottom-right corner; spans follow it.
    Resize,
    /// The pointer tracks the top-left anchor; spans stay fixed.
    Move,
}

/// A drag that has started but not yet been released.
#[derive(Debug, Clone)]
pub struct Gesture {
    kind: GestureKind,
    cell_id: Id,
    start_area: GridArea,
    origin: Grid,
}

impl Gesture {
    /// Starts a drag of `cell_id` on `grid`.
    pub fn begin(kind: GestureKind, grid: &Grid, cell_id: Id) -> Result<Self, EditError> {
        let start_area = grid
            .cell(cell_id)
            .ok_or(EditError::UnknownCell(cell_id))?
            .area();
        Ok(Self {
            kind,
            cell_id,
            start_area,
            origin: grid.clone(),
        })
    }

    pub fn kind(&self) -> GestureKind {
        self.kind
    }

    pub fn cell_id(&self) -> Id {
        self.cell_id
    }

    /// The grid as it was when the drag started.
    pub fn origin(&self) -> &Grid {
        &self.origin
    }

    /// Computes the grid with the pointer at `point`.
    ///
    /// Resizing clamps spans to the declared extent minus the anchor; moving
    /// clamps the anchor so the cell stays within the columns.
    pub fn preview(&self, point: GridPoint) -> Grid {
        let area = self.start_area;
        let patch = match self.kind {
            GestureKind::Resize => {
                let row_span = point.row().saturating_add(1).saturating_sub(area.row());
                let col_span = point.col().saturating_add(1).saturating_sub(area.col());
                let (row_span, col_span) =
                    clamp_spans(&self.origin, area.anchor(), row_span, col_span);
                CellPatch::new()
                    .with_row_span(row_span)
                    .with_col_span(col_span)
            }
            GestureKind::Move => {
                let anchor = clamp_anchor(&self.origin, area, point);
                CellPatch::new().with_row(anchor.row()).with_col(anchor.col())
            }
        };
        // The cell was present at `begin` and `origin` is never mutated.
        placement::update_cell(&self.origin, self.cell_id, &patch)
            .unwrap_or_else(|_| self.origin.clone())
    }
}

#[cfg(test)]
mod tests {
    use glassgrid_core::grid::Cell;

    use super::*;

    fn grid() -> Grid {
        Grid::new(Id::new("g"), "G", 4, 12, 0)
            .with_cell(Cell::new(Id::new("c"), GridArea::new(1, 2, 1, 2)))
    }

    #[test]
    fn test_begin_unknown_cell() {
        let err = Gesture::begin(GestureKind::Move, &grid(), Id::new("x")).unwrap_err();
        assert_eq!(err, EditError::UnknownCell(Id::new("x")));
    }

    #[test]
    fn test_resize_follows_corner() {
        let gesture = Gesture::begin(GestureKind::Resize, &grid(), Id::new("c")).unwrap();
        let preview = gesture.preview(GridPoint::new(2, 6));
        assert_eq!(preview.cell(Id::new("c")).unwrap().area(), GridArea::new(1, 2, 2, 5));
    }

    #[test]
    fn test_resize_clamps_to_extent() {
        let gesture = Gesture::begin(GestureKind::Resize, &grid(), Id::new("c")).unwrap();
        let preview = gesture.preview(GridPoint::new(40, 40));
        assert_eq!(preview.cell(Id::new("c")).unwrap().area(), GridArea::new(1, 2, 3, 10));
    }

    #[test]
    fn test_resize_at_pointer_limit() {
        let gesture = Gesture::begin(GestureKind::Resize, &grid(), Id::new("c")).unwrap();
        let preview = gesture.preview(GridPoint::new(u32::MAX, 0));
        assert_eq!(preview.cell(Id::new("c")).unwrap().area(), GridArea::new(1, 2, 3, 1));

        let preview = gesture.preview(GridPoint::new(0, u32::MAX));
        assert_eq!(preview.cell(Id::new("c")).unwrap().area(), GridArea::new(1, 2, 1, 10));
    }

    #[test]
    fn test_resize_before_anchor_keeps_one_cell() {
        let gesture = Gesture::begin(GestureKind::Resize, &grid(), Id::new("c")).unwrap();
        let preview = gesture.preview(GridPoint::new(0, 0));
        assert_eq!(preview.cell(Id::new("c")).unwrap().area(), GridArea::new(1, 2, 1, 1));
    }

    #[test]
    fn test_move_clamps_columns() {
        let gesture = Gesture::begin(GestureKind::Move, &grid(), Id::new("c")).unwrap();
        let preview = gesture.preview(GridPoint::new(3, 11));
        assert_eq!(preview.cell(Id::new("c")).unwrap().area(), GridArea::new(3, 10, 1, 2));
    }

    #[test]
    fn test_previews_do_not_accumulate() {
        let gesture = Gesture::begin(GestureKind::Move, &grid(), Id::new("c")).unwrap();
        let _ = gesture.preview(GridPoint::new(3, 3));
        assert_eq!(gesture.origin(), &grid());
    }
}
