//! Configuration types for the GlassGrid engine.
//!
//! This module provides configuration structures that control the editing
//! session and JSON export. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining engine and export settings.
//! - [`EngineConfig`] - Grid defaults, the auto-fit row floor and the history depth.
//! - [`ExportConfig`] - Controls how grids are serialized.
//!
//! # Example
//!
//! ```
//! # use glassgrid::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.engine().min_rows(), 4);
//! assert_eq!(config.engine().max_history(), 50);
//! ```

use serde::Deserialize;

/// Top-level application configuration combining engine and export settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Engine configuration section.
    #[serde(default)]
    engine: EngineConfig,

    /// Export configuration section.
    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified engine and export configurations.
    pub fn new(engine: EngineConfig, export: ExportConfig) -> Self {
        Self { engine, export }
    }

    /// Returns the engine configuration.
    pub fn engine(&self) -> &EngineConfig {
        &self.engine
    }

    /// Returns the export configuration.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }
}

/// Settings for an editing session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Floor applied by auto-fit to the declared row count.
    min_rows: u32,

    /// Maximum number of snapshots retained by the undo history.
    max_history: usize,

    /// Row count of a freshly created grid.
    default_rows: u32,

    /// Column count of a freshly created grid.
    default_cols: u32,

    /// Gap of a freshly created grid.
    default_gap: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_rows: 4,
            max_history: 50,
            default_rows: 4,
            default_cols: 12,
            default_gap: 16,
        }
    }
}

impl EngineConfig {
    /// Sets the auto-fit row floor (builder style). Clamped to at least one.
    pub fn with_min_rows(mut self, min_rows: u32) -> Self {
        self.min_rows = min_rows.max(1);
        self
    }

    /// Sets the history depth (builder style). Clamped to at least one.
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history.max(1);
        self
    }

    /// Sets the column count of new grids (builder style).
    pub fn with_default_cols(mut self, cols: u32) -> Self {
        self.default_cols = cols.max(1);
        self
    }

    pub fn min_rows(&self) -> u32 {
        self.min_rows.max(1)
    }

    pub fn max_history(&self) -> usize {
        self.max_history.max(1)
    }

    pub fn default_rows(&self) -> u32 {
        self.default_rows.max(1)
    }

    pub fn default_cols(&self) -> u32 {
        self.default_cols.max(1)
    }

    pub fn default_gap(&self) -> u32 {
        self.default_gap
    }

    /// Names the settings that were given as zero.
    ///
    /// The accessors clamp these to one, so a session still works; callers
    /// loading user-written configuration may reject them instead.
    pub fn zero_settings(&self) -> Vec<&'static str> {
        [
            ("min_rows", self.min_rows == 0),
            ("max_history", self.max_history == 0),
            ("default_rows", self.default_rows == 0),
            ("default_cols", self.default_cols == 0),
        ]
        .into_iter()
        .filter_map(|(name, zero)| zero.then_some(name))
        .collect()
    }
}

/// Serialization options for exported grids.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Emit indented JSON.
    pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl ExportConfig {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }
}
