//! Read-only reasoning about a grid.
//!
//! The [`GridQuery`] extension trait answers point lookups, enumerates empty
//! slots and searches for free regions. Everything here is a linear scan over
//! the cells; grids hold at most a few dozen of them.

use log::trace;

use glassgrid_core::{
    geometry::{GridArea, GridPoint},
    grid::{Cell, Grid},
    identifier::Id,
};

/// Spatial queries over a [`Grid`].
pub trait GridQuery {
    /// Returns the cell whose area contains `(row, col)`.
    ///
    /// With non-overlapping cells there is at most one match; otherwise the
    /// first one in cell order wins.
    fn cell_at(&self, row: u32, col: u32) -> Option<&Cell>;

    /// Returns true if any cell covers `(row, col)`.
    fn is_occupied(&self, row: u32, col: u32) -> bool {
        self.cell_at(row, col).is_some()
    }

    /// Enumerates every unoccupied point inside the declared `rows × cols`
    /// bound in row-major order. Call again to restart.
    fn empty_slots(&self) -> EmptySlots<'_>;

    /// Returns true if no cell intersects `area`.
    fn is_region_free(&self, area: GridArea) -> bool;

    /// Finds the first row-major anchor where a `col_span × row_span`
    /// rectangle fits without touching any cell.
    ///
    /// The scan runs past the declared row count, up to
    /// `max(rows, content_extent) + row_span + 1`, so a small declared grid
    /// never blocks placement. When nothing fits (the rectangle is wider than
    /// the grid) the append position `(content_extent, 0)` is returned; that
    /// position may overlap existing cells.
    fn find_free_region(&self, col_span: u32, row_span: u32) -> GridPoint;

    /// Returns the first pair of cells whose areas intersect, if any.
    fn overlapping_pair(&self) -> Option<(Id, Id)>;
}

impl GridQuery for Grid {
    fn cell_at(&self, row: u32, col: u32) -> Option<&Cell> {
        let point = GridPoint::new(row, col);
        self.cells().iter().find(|cell| cell.area().contains(point))
    }

    fn empty_slots(&self) -> EmptySlots<'_> {
        EmptySlots {
            grid: self,
            next: Some(GridPoint::new(0, 0)),
        }
    }

    fn is_region_free(&self, area: GridArea) -> bool {
        !self.cells().iter().any(|cell| cell.area().intersects(&area))
    }

    fn find_free_region(&self, col_span: u32, row_span: u32) -> GridPoint {
        let col_span = col_span.max(1);
        let row_span = row_span.max(1);
        let extent = self.content_extent();

        if col_span <= self.cols() {
            let window = self
                .rows()
                .max(extent)
                .saturating_add(row_span)
                .saturating_add(1);
            for row in 0..window {
                for col in 0..=(self.cols() - col_span) {
                    let area = GridArea::new(row, col, row_span, col_span);
                    if self.is_region_free(area) {
                        return area.anchor();
                    }
                }
            }
        }

        trace!(col_span, row_span, extent; "No free region found, appending below content");
        GridPoint::new(extent, 0)
    }

    fn overlapping_pair(&self) -> Option<(Id, Id)> {
        let cells = self.cells();
        cells.iter().enumerate().find_map(|(i, first)| {
            cells[i + 1..]
                .iter()
                .find(|second| first.area().intersects(&second.area()))
                .map(|second| (first.id(), second.id()))
        })
    }
}

/// Iterator over the unoccupied points of a grid, see [`GridQuery::empty_slots`].
#[derive(Debug, Clone)]
pub struct EmptySlots<'a> {
    grid: &'a Grid,
    next: Option<GridPoint>,
}

impl EmptySlots<'_> {
    fn advance(&self, point: GridPoint) -> Option<GridPoint> {
        if point.col() + 1 < self.grid.cols() {
            Some(GridPoint::new(point.row(), point.col() + 1))
        } else if point.row() + 1 < self.grid.rows() {
            Some(GridPoint::new(point.row() + 1, 0))
        } else {
            None
        }
    }
}

impl Iterator for EmptySlots<'_> {
    type Item = GridPoint;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(point) = self.next {
            self.next = self.advance(point);
            if !self.grid.is_occupied(point.row(), point.col()) {
                return Some(point);
            }
        }
        None
    }
}
