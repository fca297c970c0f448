//! Integer grid geometry for cell placement.
//!
//! This module provides the coordinate types used to anchor and size cells
//! on the editing grid.
//!
//! # Overview
//!
//! - [`GridPoint`] - A single `(row, col)` position on the grid
//! - [`GridArea`] - An axis-aligned rectangle anchored at a point with row and column spans
//!
//! # Coordinate System
//!
//! ```text
//!   (0,0) ────────► +col
//!     │
//!     │
//!     ▼
//!   +row
//! ```
//!
//! Areas are half-open: an area anchored at `(row, col)` with spans
//! `(row_span, col_span)` covers `[row, row + row_span) × [col, col + col_span)`.

use serde::{Deserialize, Serialize};

/// A position on the grid, zero-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    row: u32,
    col: u32,
}

impl GridPoint {
    /// Creates a new point at the given row and column.
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Returns the row of the point.
    pub fn row(self) -> u32 {
        self.row
    }

    /// Returns the column of the point.
    pub fn col(self) -> u32 {
        self.col
    }
}

/// A rectangular region of the grid.
///
/// Spans are always at least one. Constructors and setters clamp zero spans
/// up to one; deserialization rejects them.
///
/// # Examples
///
/// ```
/// # use glassgrid_core::geometry::{GridArea, GridPoint};
/// let header = GridArea::new(0, 0, 1, 12);
/// let body = GridArea::new(1, 0, 3, 8);
///
/// assert_eq!(header.row_end(), 1);
/// assert!(!header.intersects(&body));
/// assert!(body.contains(GridPoint::new(2, 7)));
/// assert!(!body.contains(GridPoint::new(2, 8)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawGridArea")]
pub struct GridArea {
    row: u32,
    col: u32,
    row_span: u32,
    col_span: u32,
}

/// Wire form of [`GridArea`], checked before it becomes one.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGridArea {
    row: u32,
    col: u32,
    row_span: u32,
    col_span: u32,
}

impl TryFrom<RawGridArea> for GridArea {
    type Error = &'static str;

    fn try_from(raw: RawGridArea) -> Result<Self, Self::Error> {
        if raw.row_span == 0 || raw.col_span == 0 {
            return Err("rowSpan and colSpan must be at least 1");
        }
        Ok(Self::new(raw.row, raw.col, raw.row_span, raw.col_span))
    }
}

impl Default for GridArea {
    fn default() -> Self {
        Self::new(0, 0, 1, 1)
    }
}

impl GridArea {
    /// Creates a new area. Zero spans are clamped to one.
    pub fn new(row: u32, col: u32, row_span: u32, col_span: u32) -> Self {
        Self {
            row,
            col,
            row_span: row_span.max(1),
            col_span: col_span.max(1),
        }
    }

    /// Returns the anchor row.
    pub fn row(self) -> u32 {
        self.row
    }

    /// Returns the anchor column.
    pub fn col(self) -> u32 {
        self.col
    }

    /// Returns the number of rows covered.
    pub fn row_span(self) -> u32 {
        self.row_span
    }

    /// Returns the number of columns covered.
    pub fn col_span(self) -> u32 {
        self.col_span
    }

    /// Returns the top-left anchor.
    pub fn anchor(self) -> GridPoint {
        GridPoint::new(self.row, self.col)
    }

    /// Exclusive end row (`row + row_span`).
    pub fn row_end(self) -> u32 {
        self.row.saturating_add(self.row_span)
    }

    /// Exclusive end column (`col + col_span`).
    pub fn col_end(self) -> u32 {
        self.col.saturating_add(self.col_span)
    }

    /// Returns a copy anchored at `anchor`, keeping the spans.
    pub fn with_anchor(mut self, anchor: GridPoint) -> Self {
        self.row = anchor.row;
        self.col = anchor.col;
        self
    }

    /// Returns a copy with new spans, clamped to at least one.
    pub fn with_spans(mut self, row_span: u32, col_span: u32) -> Self {
        self.row_span = row_span.max(1);
        self.col_span = col_span.max(1);
        self
    }

    /// Checks whether the point lies inside this area.
    pub fn contains(self, point: GridPoint) -> bool {
        point.row >= self.row
            && point.row < self.row_end()
            && point.col >= self.col
            && point.col < self.col_end()
    }

    /// Checks whether two areas share at least one grid point.
    pub fn intersects(&self, other: &GridArea) -> bool {
        self.row < other.row_end()
            && other.row < self.row_end()
            && self.col < other.col_end()
            && other.col < self.col_end()
    }

    /// Clips the area to a `rows × cols` bound.
    ///
    /// Returns `None` when the anchor itself falls outside the bound. Otherwise
    /// the spans are clamped so the area ends at or before the bound.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glassgrid_core::geometry::GridArea;
    /// let tall = GridArea::new(0, 0, 4, 2);
    /// assert_eq!(tall.clip_to(3, 12), Some(GridArea::new(0, 0, 3, 2)));
    ///
    /// let below = GridArea::new(3, 0, 1, 2);
    /// assert_eq!(below.clip_to(3, 12), None);
    /// ```
    pub fn clip_to(self, rows: u32, cols: u32) -> Option<Self> {
        if self.row >= rows || self.col >= cols {
            return None;
        }
        Some(self.with_spans(
            self.row_span.min(rows - self.row),
            self.col_span.min(cols - self.col),
        ))
    }
}
