//! Row-count auto-fit applied after every committed mutation.
//!
//! The declared row count tracks content: `rows = max(min_rows, content_extent)`.
//! Columns are never adjusted.

use log::trace;

use glassgrid_core::grid::Grid;

/// Row count a grid should declare for its current cells.
pub fn fitted_rows(grid: &Grid, min_rows: u32) -> u32 {
    min_rows.max(grid.content_extent()).max(1)
}

/// Sets the grid's row count to [`fitted_rows`].
pub fn fit_rows(grid: &mut Grid, min_rows: u32) {
    let rows = fitted_rows(grid, min_rows);
    if rows != grid.rows() {
        trace!(from = grid.rows(), to = rows; "Auto-fitting rows");
        grid.set_rows(rows);
    }
}
