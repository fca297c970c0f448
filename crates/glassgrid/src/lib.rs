//! GlassGrid - the grid layout engine behind a visual layout editor.
//!
//! The engine owns a placement model of rectangular cells on an integer
//! grid, keeps the declared row count fitted to the content, and records
//! every committed edit in a bounded undo/redo history. It runs entirely
//! synchronously and performs no I/O beyond JSON (de)serialization.
//!
//! # Overview
//!
//! - [`EditorSession`] - the stateful entry point: grid, history, selection and drags
//! - [`query`] - point lookup, empty-slot enumeration, free-region search
//! - [`placement`] - pure grid transforms (add, update, remove, swap, ...)
//! - [`history`] - bounded linear snapshot history
//! - [`preset`] - named starting layouts
//! - [`export`] - JSON export and validated import
//!
//! # Examples
//!
//! ```
//! use glassgrid::{EditorSession, config::EngineConfig, preset::PresetLibrary};
//!
//! let presets = PresetLibrary::builtin();
//! let mut session = EditorSession::new(EngineConfig::default());
//! session.load_preset(&presets, "bento").expect("builtin preset");
//!
//! let first = session.grid().cells()[0].id();
//! session.clear_cell(first).expect("cell exists");
//! assert!(!session.grid().cell(first).unwrap().has_component());
//!
//! session.undo();
//! assert!(session.grid().cell(first).unwrap().has_component());
//! ```

pub mod autofit;
pub mod config;
pub mod export;
pub mod gesture;
pub mod history;
pub mod ids;
pub mod placement;
pub mod preset;
pub mod query;
pub mod selection;

mod error;
mod session;

pub use glassgrid_core::{content, geometry, grid, identifier, template};

pub use error::{EditError, GlassGridError};
pub use session::EditorSession;
