//! Error types for GlassGrid operations.
//!
//! [`EditError`] describes why a mutation was rejected. A rejected mutation
//! never changes the grid, the history or the selection, so callers that only
//! care about the resulting state may ignore it.
//!
//! [`GlassGridError`] wraps everything that can go wrong at the boundaries:
//! I/O, JSON import/export and configuration.

use std::io;

use thiserror::Error;

use glassgrid_core::identifier::Id;

/// Reason a mutation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("no cell with id `{0}`")]
    UnknownCell(Id),

    #[error("source and destination are the same cell `{0}`")]
    SameCell(Id),

    #[error("cell `{0}` holds no component")]
    EmptySource(Id),

    #[error("cells `{first}` and `{second}` would overlap")]
    Overlap { first: Id, second: Id },

    #[error("no template with id `{0}`")]
    UnknownTemplate(Id),

    #[error("no preset named `{0}`")]
    UnknownPreset(String),

    #[error("grouping needs at least two selected cells, found {0}")]
    NotGrouped(usize),

    #[error("no cell carries group `{0}`")]
    UnknownGroup(Id),

    #[error("a drag gesture is already in progress")]
    GestureInProgress,

    #[error("no drag gesture in progress")]
    NoGesture,
}

/// The main error type for GlassGrid operations.
#[derive(Debug, Error)]
pub enum GlassGridError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid grid: {0}")]
    Schema(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Edit rejected: {0}")]
    Edit(#[from] EditError),
}
