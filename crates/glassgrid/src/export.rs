//! JSON export and import of grids.
//!
//! Export is a lossless structural dump of the in-memory model. Import is the
//! boundary where malformed input is rejected: it checks the schema
//! (positive dimensions and spans, unique cell ids) but not the non-overlap
//! invariant. Zero spans already fail while parsing a cell's area.

use std::collections::HashSet;

use log::{debug, info};

use glassgrid_core::grid::Grid;

use crate::error::GlassGridError;

/// Serializes a grid to JSON.
///
/// # Errors
///
/// Returns [`GlassGridError::Json`] if serialization fails.
pub fn to_json(grid: &Grid, pretty: bool) -> Result<String, GlassGridError> {
    let json = if pretty {
        serde_json::to_string_pretty(grid)?
    } else {
        serde_json::to_string(grid)?
    };
    debug!(grid_id:% = grid.id(), bytes = json.len(); "Grid exported");
    Ok(json)
}

/// Parses and validates a grid from JSON.
///
/// # Errors
///
/// Returns [`GlassGridError::Json`] for malformed JSON, a shape mismatch or
/// a zero span, and [`GlassGridError::Schema`] for zero dimensions or
/// duplicate cell ids.
///
/// # Examples
///
/// ```
/// let grid = glassgrid::export::from_json(r#"{
///     "id": "g", "name": "Imported", "rows": 4, "cols": 12, "gap": 16,
///     "cells": [{ "id": "a", "row": 0, "col": 0, "rowSpan": 1, "colSpan": 3 }]
/// }"#).unwrap();
/// assert_eq!(grid.len(), 1);
///
/// assert!(glassgrid::export::from_json(r#"{ "id": "g" }"#).is_err());
/// ```
pub fn from_json(source: &str) -> Result<Grid, GlassGridError> {
    let grid: Grid = serde_json::from_str(source)?;
    validate(&grid)?;
    info!(grid_id:% = grid.id(), cells = grid.len(); "Grid imported");
    Ok(grid)
}

fn validate(grid: &Grid) -> Result<(), GlassGridError> {
    if grid.rows() == 0 || grid.cols() == 0 {
        return Err(GlassGridError::Schema(format!(
            "grid dimensions must be positive, got {}x{}",
            grid.rows(),
            grid.cols()
        )));
    }

    let mut seen = HashSet::new();
    for cell in grid.cells() {
        if !seen.insert(cell.id()) {
            return Err(GlassGridError::Schema(format!(
                "duplicate cell id `{}`",
                cell.id()
            )));
        }
    }
    Ok(())
}
