//! Error adapter for converting GlassGridError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use glassgrid::{EditError, GlassGridError};

/// Adapter for a single GlassGrid error.
///
/// Wraps a [`GlassGridError`] and implements [`MietteDiagnostic`] with a
/// stable code and a hint on how to fix the input.
pub struct ErrorAdapter<'a> {
    err: &'a GlassGridError,
}

impl<'a> ErrorAdapter<'a> {
    /// Create a new error adapter.
    pub fn new(err: &'a GlassGridError) -> Self {
        Self { err }
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for ErrorAdapter<'_> {}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.err {
            GlassGridError::Io(_) => "glassgrid::io",
            GlassGridError::Json(_) => "glassgrid::json",
            GlassGridError::Schema(_) => "glassgrid::schema",
            GlassGridError::Config(_) => "glassgrid::config",
            GlassGridError::Edit(_) => "glassgrid::edit",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.err {
            GlassGridError::Io(_) => "check that the input, script and output paths are accessible",
            GlassGridError::Json(_) => {
                "grids use the camelCase shape `{ id, name, rows, cols, gap, cells }` with spans of at least 1; scripts are arrays of `{ \"op\": ... }` objects"
            }
            GlassGridError::Schema(_) => "rows and cols must be at least 1, and cell ids must be unique",
            GlassGridError::Config(_) => "configuration is TOML with optional `[engine]` and `[export]` sections",
            GlassGridError::Edit(EditError::Overlap { .. }) => {
                "swaps are only applied when the cells still fit without overlapping"
            }
            GlassGridError::Edit(_) => "run without `--strict` to skip rejected commands",
        };
        Some(Box::new(help))
    }
}

/// Converts a [`GlassGridError`] into miette-compatible reportables.
pub fn to_reportables(err: &GlassGridError) -> Vec<ErrorAdapter<'_>> {
    vec![ErrorAdapter::new(err)]
}
